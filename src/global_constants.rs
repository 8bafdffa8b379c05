#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Nearby Bites - Desktop";
pub const APPLICATION_TITLE: &str = "Nearby Bites";

pub const DEFAULT_CENTER_LATITUDE: f64 = 34.05223;
pub const DEFAULT_CENTER_LONGITUDE: f64 = -118.24368;
pub const DEFAULT_MAP_ZOOM: u8 = 12;
pub const MIN_MAP_ZOOM: u8 = 1;
pub const MAX_MAP_ZOOM: u8 = 19;

pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 5000;
pub const RESTAURANT_PLACE_TYPE: &str = "restaurant";

/// One fixed sidebar category: a stable slot id, the header label, and the
/// keyword sent to the places service.
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub keyword: &'static str,
}

pub const RESTAURANT_CATEGORIES: [CategoryDescriptor; 3] = [
    CategoryDescriptor {
        id: "japanese-restaurants",
        display_name: "Japanese",
        keyword: "japanese",
    },
    CategoryDescriptor {
        id: "korean-restaurants",
        display_name: "Korean",
        keyword: "korean",
    },
    CategoryDescriptor {
        id: "american-restaurants",
        display_name: "American",
        keyword: "burger",
    },
];

pub const DEFAULT_PLACES_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_FETCH_USER_AGENT: &str = "nearby-bites/0.1 (desktop map client)";
pub const MAP_ATTRIBUTION: &str = "© OpenStreetMap contributors";

pub const TILE_SIZE_PIXELS: f64 = 256.0;
pub const VIEWPORT_TILE_SPAN_X: i64 = 3;
pub const VIEWPORT_TILE_SPAN_Y: i64 = 2;

pub const POPUP_PHOTO_MAX_WIDTH: u32 = 80;
pub const POPUP_PHOTO_MAX_HEIGHT: u32 = 80;
pub const MARKER_HIT_RADIUS: f32 = 12.0;

pub const SETTINGS_DIR_NAME: &str = "nearby-bites";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_MAP_VIEW: &str = "[MAP_VIEW]";
pub const LOG_TAG_PLACES: &str = "[PLACES]";
pub const LOG_TAG_TILES: &str = "[TILES]";

pub const SEARCH_INPUT_PLACEHOLDER: &str = "Filter restaurants by name...";
pub const NO_RESULTS_LABEL: &str = "No results";
pub const LOADING_LABEL: &str = "Searching...";
pub const OPEN_NOW_LABEL: &str = "Now open!";
