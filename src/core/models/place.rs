use serde::{Deserialize, Serialize};

/// One result record from the external places search, deserialized verbatim
/// from the service response. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub vicinity: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    pub geometry: PlaceGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

impl PlaceLocation {
    pub fn at_coordinates(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Place {
    pub fn is_open_now(&self) -> bool {
        self.opening_hours
            .as_ref()
            .map(|hours| hours.open_now)
            .unwrap_or(false)
    }

    pub fn location(&self) -> PlaceLocation {
        self.geometry.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_deserializes_from_service_response() {
        let json = r#"{
            "name": "Sushi Zen",
            "vicinity": "123 First St, Los Angeles",
            "icon": "https://maps.gstatic.com/mapfiles/place_api/icons/restaurant-71.png",
            "photos": [
                {
                    "photo_reference": "CnRtAAAA",
                    "height": 400,
                    "width": 600,
                    "html_attributions": []
                }
            ],
            "opening_hours": { "open_now": true },
            "rating": 4.5,
            "geometry": {
                "location": { "lat": 34.05, "lng": -118.24 },
                "viewport": {}
            }
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.name, "Sushi Zen");
        assert_eq!(place.vicinity, "123 First St, Los Angeles");
        assert_eq!(place.photos.len(), 1);
        assert_eq!(place.photos[0].photo_reference, "CnRtAAAA");
        assert!(place.is_open_now());
        assert_eq!(place.location().lat, 34.05);
        assert_eq!(place.location().lng, -118.24);
    }

    #[test]
    fn test_place_deserializes_with_optional_fields_missing() {
        let json = r#"{
            "name": "Ramen House",
            "geometry": { "location": { "lat": 34.1, "lng": -118.3 } }
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.name, "Ramen House");
        assert!(place.vicinity.is_empty());
        assert!(place.icon.is_empty());
        assert!(place.photos.is_empty());
        assert!(!place.is_open_now());
    }

    #[test]
    fn test_open_now_is_false_when_hours_present_but_closed() {
        let json = r#"{
            "name": "Burger Barn",
            "opening_hours": { "open_now": false },
            "geometry": { "location": { "lat": 34.0, "lng": -118.2 } }
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();

        assert!(!place.is_open_now());
    }
}
