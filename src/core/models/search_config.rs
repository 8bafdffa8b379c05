use crate::global_constants;

/// Parameters for one nearby search. Ephemeral: built per request, never
/// persisted.
#[derive(Debug, Clone)]
pub struct NearbySearchConfig {
    pub radius_meters: u32,
    pub place_types: Vec<String>,
    pub keyword: String,
}

impl NearbySearchConfig {
    pub fn restaurants_with_keyword(radius_meters: u32, keyword: &str) -> Self {
        Self {
            radius_meters,
            place_types: vec![global_constants::RESTAURANT_PLACE_TYPE.to_string()],
            keyword: keyword.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_config_carries_keyword_and_type() {
        let config = NearbySearchConfig::restaurants_with_keyword(5000, "japanese");

        assert_eq!(config.radius_meters, 5000);
        assert_eq!(config.place_types, vec!["restaurant".to_string()]);
        assert_eq!(config.keyword, "japanese");
    }
}
