mod places_search;
mod tile_provider;

pub use places_search::PlacesSearchProvider;
pub use tile_provider::MapTileProvider;
