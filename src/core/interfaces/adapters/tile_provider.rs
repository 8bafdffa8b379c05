use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::TileId;

#[async_trait]
pub trait MapTileProvider: Send + Sync {
    /// Fetches the encoded raster image for one map tile.
    async fn fetch_tile(&self, tile: TileId) -> Result<Vec<u8>>;
}
