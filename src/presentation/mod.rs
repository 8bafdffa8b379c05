pub mod app_theme;
mod category_list_view;
mod map_view;

pub use category_list_view::{CategoryListConfig, CategoryListMessage, CategoryListView};
pub use map_view::{MapView, MapViewMessage, PopupContent, PopupImageKind};
