use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::core::models::PlaceLocation;
use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub places_api_key: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub map_zoom: u8,
    pub search_radius_meters: u32,
    #[serde(default = "default_tile_url_template")]
    pub tile_url_template: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn default_tile_url_template() -> String {
    global_constants::DEFAULT_TILE_URL_TEMPLATE.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            places_api_key: String::new(),
            center_latitude: global_constants::DEFAULT_CENTER_LATITUDE,
            center_longitude: global_constants::DEFAULT_CENTER_LONGITUDE,
            map_zoom: global_constants::DEFAULT_MAP_ZOOM,
            search_radius_meters: global_constants::DEFAULT_SEARCH_RADIUS_METERS,
            tile_url_template: default_tile_url_template(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Map center: ({}, {}) zoom {}",
            settings.center_latitude,
            settings.center_longitude,
            settings.map_zoom
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn center(&self) -> PlaceLocation {
        PlaceLocation::at_coordinates(self.center_latitude, self.center_longitude)
    }

    /// Checks every configured value and returns one message per problem;
    /// an empty list means the settings are usable as-is.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.places_api_key.trim().is_empty() {
            errors.push("places_api_key is empty, nearby searches will fail".to_string());
        }

        if !(global_constants::MIN_MAP_ZOOM..=global_constants::MAX_MAP_ZOOM)
            .contains(&self.map_zoom)
        {
            errors.push(format!(
                "map_zoom {} is outside the supported range {}..={}",
                self.map_zoom,
                global_constants::MIN_MAP_ZOOM,
                global_constants::MAX_MAP_ZOOM
            ));
        }

        if self.search_radius_meters == 0 {
            errors.push("search_radius_meters must be greater than zero".to_string());
        }

        if !(-90.0..=90.0).contains(&self.center_latitude) {
            errors.push(format!(
                "center_latitude {} is not a valid latitude",
                self.center_latitude
            ));
        }

        if !(-180.0..=180.0).contains(&self.center_longitude) {
            errors.push(format!(
                "center_longitude {} is not a valid longitude",
                self.center_longitude
            ));
        }

        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.tile_url_template.contains(placeholder) {
                errors.push(format!(
                    "tile_url_template is missing the {} placeholder",
                    placeholder
                ));
            }
        }

        errors
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_default_is_light() {
        let default_theme = ThemeMode::default();
        assert_eq!(default_theme, ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_display() {
        assert_eq!(format!("{}", ThemeMode::Dark), "Dark");
        assert_eq!(format!("{}", ThemeMode::Light), "Light");
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert!(settings.places_api_key.is_empty());
        assert_eq!(
            settings.center_latitude,
            global_constants::DEFAULT_CENTER_LATITUDE
        );
        assert_eq!(
            settings.center_longitude,
            global_constants::DEFAULT_CENTER_LONGITUDE
        );
        assert_eq!(settings.map_zoom, global_constants::DEFAULT_MAP_ZOOM);
        assert_eq!(
            settings.search_radius_meters,
            global_constants::DEFAULT_SEARCH_RADIUS_METERS
        );
        assert_eq!(
            settings.tile_url_template,
            global_constants::DEFAULT_TILE_URL_TEMPLATE
        );
    }

    #[test]
    fn test_user_settings_serialization_roundtrip() {
        let settings = UserSettings {
            places_api_key: "test-key".to_string(),
            center_latitude: 35.6812,
            center_longitude: 139.7671,
            map_zoom: 14,
            search_radius_meters: 2500,
            tile_url_template: "https://tiles.example.com/{z}/{x}/{y}.png".to_string(),
            theme_mode: ThemeMode::Dark,
        };

        let serialized = serde_json::to_string(&settings).unwrap();
        let deserialized: UserSettings = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.places_api_key, settings.places_api_key);
        assert_eq!(deserialized.center_latitude, settings.center_latitude);
        assert_eq!(deserialized.center_longitude, settings.center_longitude);
        assert_eq!(deserialized.map_zoom, settings.map_zoom);
        assert_eq!(deserialized.theme_mode, settings.theme_mode);
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_optional_fields() {
        let json = r#"{
            "places_api_key": "abc",
            "center_latitude": 34.05223,
            "center_longitude": -118.24368,
            "map_zoom": 12,
            "search_radius_meters": 5000
        }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(
            settings.tile_url_template,
            global_constants::DEFAULT_TILE_URL_TEMPLATE
        );
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_validate_accepts_complete_settings() {
        let settings = UserSettings {
            places_api_key: "test-key".to_string(),
            ..UserSettings::default()
        };

        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_blank_api_key() {
        let settings = UserSettings::default();

        let errors = settings.validate();

        assert!(errors.iter().any(|e| e.contains("places_api_key")));
    }

    #[test]
    fn test_validate_reports_zoom_out_of_range() {
        let settings = UserSettings {
            places_api_key: "k".to_string(),
            map_zoom: 25,
            ..UserSettings::default()
        };

        let errors = settings.validate();

        assert!(errors.iter().any(|e| e.contains("map_zoom")));
    }

    #[test]
    fn test_validate_reports_zero_radius_and_bad_coordinates() {
        let settings = UserSettings {
            places_api_key: "k".to_string(),
            search_radius_meters: 0,
            center_latitude: 99.0,
            center_longitude: 200.0,
            ..UserSettings::default()
        };

        let errors = settings.validate();

        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_reports_missing_tile_placeholders() {
        let settings = UserSettings {
            places_api_key: "k".to_string(),
            tile_url_template: "https://tiles.example.com/static.png".to_string(),
            ..UserSettings::default()
        };

        let errors = settings.validate();

        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.contains("placeholder")));
    }
}
