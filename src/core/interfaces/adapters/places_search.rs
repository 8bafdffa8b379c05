use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{NearbySearchConfig, Place, PlaceLocation, PlacePhoto};

/// Capability over the external places service: nearby search, photo URL
/// synthesis and raw image retrieval for popup thumbnails.
#[async_trait]
pub trait PlacesSearchProvider: Send + Sync {
    /// Searches for places around `center`. Results keep the order the
    /// service returned them in.
    async fn search_nearby(
        &self,
        center: PlaceLocation,
        config: &NearbySearchConfig,
    ) -> Result<Vec<Place>>;

    /// Builds the URL serving `photo` constrained to the given dimensions.
    fn photo_url(&self, photo: &PlacePhoto, max_width: u32, max_height: u32) -> String;

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}
