use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::PlacesSearchProvider;
use crate::core::models::{NearbySearchConfig, Place, PlaceLocation, PlacePhoto};
use crate::global_constants;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

pub struct GooglePlacesSearchProvider {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<Place>,
    #[serde(default)]
    error_message: Option<String>,
}

impl GooglePlacesSearchProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, global_constants::DEFAULT_PLACES_API_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn nearby_search_url(&self, center: PlaceLocation, config: &NearbySearchConfig) -> String {
        let place_types = config.place_types.join("|");

        format!(
            "{}/nearbysearch/json?location={},{}&radius={}&type={}&keyword={}&key={}",
            self.base_url,
            center.lat,
            center.lng,
            config.radius_meters,
            urlencoding::encode(&place_types),
            urlencoding::encode(&config.keyword),
            urlencoding::encode(&self.api_key),
        )
    }
}

#[async_trait]
impl PlacesSearchProvider for GooglePlacesSearchProvider {
    async fn search_nearby(
        &self,
        center: PlaceLocation,
        config: &NearbySearchConfig,
    ) -> Result<Vec<Place>> {
        let url = self.nearby_search_url(center, config);

        log::info!(
            "[PLACES] issuing nearby search for keyword '{}' within {}m",
            config.keyword,
            config.radius_meters
        );

        let response = self.http_client.get(&url).send().await?.error_for_status()?;
        let body: NearbySearchResponse = response.json().await?;

        match body.status.as_str() {
            STATUS_OK => {
                log::info!(
                    "[PLACES] search for '{}' returned {} places",
                    config.keyword,
                    body.results.len()
                );
                Ok(body.results)
            }
            STATUS_ZERO_RESULTS => {
                log::info!("[PLACES] search for '{}' returned no places", config.keyword);
                Ok(Vec::new())
            }
            other => anyhow::bail!(
                "places service returned status {}: {}",
                other,
                body.error_message.unwrap_or_default()
            ),
        }
    }

    fn photo_url(&self, photo: &PlacePhoto, max_width: u32, max_height: u32) -> String {
        format!(
            "{}/photo?maxwidth={}&maxheight={}&photo_reference={}&key={}",
            self.base_url,
            max_width,
            max_height,
            urlencoding::encode(&photo.photo_reference),
            urlencoding::encode(&self.api_key),
        )
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("[PLACES] fetching image {}", url);

        let response = self.http_client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}
