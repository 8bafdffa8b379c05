use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use crate::core::interfaces::adapters::MapTileProvider;
use crate::core::models::TileId;
use crate::global_constants;

/// Fetches raster tiles from any server exposing a `{z}/{x}/{y}` URL scheme.
pub struct HttpTileProvider {
    http_client: reqwest::Client,
    url_template: String,
}

impl HttpTileProvider {
    pub fn new(url_template: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url_template,
        }
    }

    fn tile_url(&self, tile: TileId) -> String {
        self.url_template
            .replace("{z}", &tile.zoom.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}

#[async_trait]
impl MapTileProvider for HttpTileProvider {
    async fn fetch_tile(&self, tile: TileId) -> Result<Vec<u8>> {
        let url = self.tile_url(tile);

        log::debug!("[TILES] fetching {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(USER_AGENT, global_constants::TILE_FETCH_USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_tile_url_substitutes_all_placeholders() {
        let provider =
            HttpTileProvider::new("https://tiles.test/base/{z}/{x}/{y}.png".to_string());

        let url = provider.tile_url(TileId {
            zoom: 12,
            x: 702,
            y: 1635,
        });

        assert_eq!(url, "https://tiles.test/base/12/702/1635.png");
    }

    #[tokio::test]
    async fn test_fetch_tile_sends_user_agent_and_returns_bytes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/7/20/49.png")
                .header_exists("user-agent");
            then.status(200).body(&[1u8, 2, 3]);
        });

        let provider = HttpTileProvider::new(format!("{}/{{z}}/{{x}}/{{y}}.png", server.base_url()));

        let bytes = provider
            .fetch_tile(TileId { zoom: 7, x: 20, y: 49 })
            .await
            .unwrap();

        mock.assert();
        assert_eq!(bytes, vec![1u8, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetch_tile_fails_on_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/9/1/1.png");
            then.status(404);
        });

        let provider = HttpTileProvider::new(format!("{}/{{z}}/{{x}}/{{y}}.png", server.base_url()));

        let result = provider.fetch_tile(TileId { zoom: 9, x: 1, y: 1 }).await;

        assert!(result.is_err());
    }
}
