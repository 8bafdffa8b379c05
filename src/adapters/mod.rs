mod google_places_search_provider;
mod http_tile_provider;

pub use google_places_search_provider::GooglePlacesSearchProvider;
pub use http_tile_provider::HttpTileProvider;
