use std::collections::HashSet;
use std::sync::Arc;

use iced::widget::{column, container, image, row, scrollable, text, text_input};
use iced::{Element, Length, Task};

use crate::core::interfaces::adapters::{MapTileProvider, PlacesSearchProvider};
use crate::core::models::{NearbySearchConfig, Place, PlaceField, TileId};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::{
    CategoryListConfig, CategoryListMessage, CategoryListView, MapView, MapViewMessage,
    PopupContent, PopupImageKind,
};
use crate::user_settings::{ThemeMode, UserSettings};

/// One fixed sidebar slot. Slots are pre-allocated so the display order
/// stays stable however the three searches race each other.
pub enum CategorySlot {
    Loading,
    Ready(CategoryListView),
}

pub struct AppOrchestrator {
    places_provider: Arc<dyn PlacesSearchProvider>,
    tile_provider: Arc<dyn MapTileProvider>,
    map_view: MapView,
    category_slots: Vec<CategorySlot>,
    requested_tiles: HashSet<TileId>,
    search_query: String,
    status: String,
    settings: UserSettings,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    CategorySearchComplete(usize, Result<Vec<Place>, String>),
    SearchInputChanged(String),
    CategoryToggled(usize),
    PlaceSelected { slot: usize, index: usize },
    PopupImageFetched {
        place_name: String,
        kind: PopupImageKind,
        result: Result<image::Handle, String>,
    },
    TileFetched(TileId, Result<image::Handle, String>),
    MapInteraction(MapViewMessage),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::CategorySearchComplete(index, result) => match result {
                Ok(places) => write!(f, "CategorySearchComplete({}, {} places)", index, places.len()),
                Err(error) => write!(f, "CategorySearchComplete({}, error: {})", index, error),
            },
            OrchestratorMessage::SearchInputChanged(query) => {
                write!(f, "SearchInputChanged({})", query)
            }
            OrchestratorMessage::CategoryToggled(index) => write!(f, "CategoryToggled({})", index),
            OrchestratorMessage::PlaceSelected { slot, index } => {
                write!(f, "PlaceSelected({}, {})", slot, index)
            }
            OrchestratorMessage::PopupImageFetched {
                place_name,
                kind,
                result,
            } => write!(
                f,
                "PopupImageFetched({}, {:?}, ok: {})",
                place_name,
                kind,
                result.is_ok()
            ),
            OrchestratorMessage::TileFetched(tile, result) => {
                write!(f, "TileFetched({:?}, ok: {})", tile, result.is_ok())
            }
            OrchestratorMessage::MapInteraction(message) => {
                write!(f, "MapInteraction({:?})", message)
            }
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        places_provider: Arc<dyn PlacesSearchProvider>,
        tile_provider: Arc<dyn MapTileProvider>,
        map_view: MapView,
        settings: UserSettings,
        startup_errors: Vec<String>,
    ) -> Self {
        let category_slots = global_constants::RESTAURANT_CATEGORIES
            .iter()
            .map(|_| CategorySlot::Loading)
            .collect();

        let status = match startup_errors.first() {
            Some(error) => format!("Configuration error: {}", error),
            None => "Searching for restaurants nearby...".to_string(),
        };

        Self {
            places_provider,
            tile_provider,
            map_view,
            category_slots,
            requested_tiles: HashSet::new(),
            search_query: String::new(),
            status,
            settings,
        }
    }

    pub fn startup_tasks(&mut self) -> Task<OrchestratorMessage> {
        Task::batch(vec![self.issue_category_searches(), self.request_missing_tiles()])
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] received message: {:?}", message);

        match message {
            OrchestratorMessage::CategorySearchComplete(index, result) => {
                self.handle_category_search_complete(index, result)
            }
            OrchestratorMessage::SearchInputChanged(query) => {
                self.handle_search_input_changed(query)
            }
            OrchestratorMessage::CategoryToggled(index) => self.handle_category_toggled(index),
            OrchestratorMessage::PlaceSelected { slot, index } => {
                self.handle_place_selected(slot, index)
            }
            OrchestratorMessage::PopupImageFetched {
                place_name,
                kind,
                result,
            } => self.handle_popup_image_fetched(place_name, kind, result),
            OrchestratorMessage::TileFetched(tile, result) => {
                self.handle_tile_fetched(tile, result)
            }
            OrchestratorMessage::MapInteraction(map_message) => {
                self.handle_map_interaction(map_message)
            }
        }
    }

    /// Dispatches the three fixed category searches. Each completes
    /// independently; there is no ordering across categories and no way to
    /// abort one once issued.
    fn issue_category_searches(&self) -> Task<OrchestratorMessage> {
        let mut tasks = Vec::new();

        for (index, descriptor) in global_constants::RESTAURANT_CATEGORIES.iter().enumerate() {
            let provider = Arc::clone(&self.places_provider);
            let center = self.map_view.center();
            let config = NearbySearchConfig::restaurants_with_keyword(
                self.settings.search_radius_meters,
                descriptor.keyword,
            );

            log::info!(
                "[ORCHESTRATOR] dispatching '{}' restaurant search",
                descriptor.display_name
            );

            tasks.push(Task::perform(
                async move {
                    provider
                        .search_nearby(center, &config)
                        .await
                        .map_err(|error| error.to_string())
                },
                move |result| OrchestratorMessage::CategorySearchComplete(index, result),
            ));
        }

        Task::batch(tasks)
    }

    fn request_missing_tiles(&mut self) -> Task<OrchestratorMessage> {
        let mut tasks = Vec::new();

        for tile in self.map_view.missing_tiles() {
            if !self.requested_tiles.insert(tile) {
                continue;
            }

            let provider = Arc::clone(&self.tile_provider);
            tasks.push(Task::perform(
                async move { provider.fetch_tile(tile).await.map_err(|error| error.to_string()) },
                move |result| {
                    OrchestratorMessage::TileFetched(tile, result.map(image::Handle::from_bytes))
                },
            ));
        }

        if !tasks.is_empty() {
            log::debug!("[ORCHESTRATOR] requesting {} map tiles", tasks.len());
        }

        Task::batch(tasks)
    }

    fn handle_category_search_complete(
        &mut self,
        index: usize,
        result: Result<Vec<Place>, String>,
    ) -> Task<OrchestratorMessage> {
        let Some(descriptor) = global_constants::RESTAURANT_CATEGORIES.get(index) else {
            log::warn!(
                "[ORCHESTRATOR] search completed for unknown category slot {}",
                index
            );
            return Task::none();
        };

        // A failed search still lands here as an empty list so the slot
        // renders its zero-result state instead of loading forever.
        let places = match result {
            Ok(places) => {
                log::info!(
                    "[ORCHESTRATOR] '{}' search returned {} places",
                    descriptor.display_name,
                    places.len()
                );
                self.status = "Select a restaurant to see it on the map".to_string();
                places
            }
            Err(error) => {
                log::error!(
                    "[ORCHESTRATOR] '{}' search failed: {}",
                    descriptor.display_name,
                    error
                );
                self.status = format!("{} search failed: {}", descriptor.display_name, error);
                Vec::new()
            }
        };

        self.category_slots[index] = CategorySlot::Ready(CategoryListView::build(
            CategoryListConfig {
                display_name: descriptor.display_name.to_string(),
                places,
            },
        ));

        Task::none()
    }

    /// Filters every ready list against the same query, each over its own
    /// stored places. Filtering and showing stay two separate calls.
    fn handle_search_input_changed(&mut self, query: String) -> Task<OrchestratorMessage> {
        self.search_query = query.clone();

        for slot in &mut self.category_slots {
            if let CategorySlot::Ready(list_view) = slot {
                let filtered = list_view.filter(PlaceField::Name, &query);
                list_view.show(filtered);
            }
        }

        Task::none()
    }

    fn handle_category_toggled(&mut self, index: usize) -> Task<OrchestratorMessage> {
        if let Some(CategorySlot::Ready(list_view)) = self.category_slots.get_mut(index) {
            list_view.toggle_collapsed();
        }

        Task::none()
    }

    fn handle_place_selected(&mut self, slot: usize, index: usize) -> Task<OrchestratorMessage> {
        let Some(CategorySlot::Ready(list_view)) = self.category_slots.get(slot) else {
            log::warn!("[ORCHESTRATOR] selection from a slot that is not ready: {}", slot);
            return Task::none();
        };

        let Some(place) = list_view.shown_place(index).cloned() else {
            log::warn!(
                "[ORCHESTRATOR] selection index {} is out of range for slot {}",
                index,
                slot
            );
            return Task::none();
        };

        let had_marker = self.map_view.remove_marker();
        log::debug!("[ORCHESTRATOR] replaced existing marker: {}", had_marker);

        let photo_url = place.photos.first().map(|photo| {
            self.places_provider.photo_url(
                photo,
                global_constants::POPUP_PHOTO_MAX_WIDTH,
                global_constants::POPUP_PHOTO_MAX_HEIGHT,
            )
        });

        let content = PopupContent {
            name: place.name.clone(),
            vicinity: place.vicinity.clone(),
            open_now: place.is_open_now(),
            icon_url: place.icon.clone(),
            photo_url: photo_url.clone(),
            icon: None,
            photo: None,
        };

        self.status = format!("Showing {}", place.name);
        self.map_view.show_marker(place.clone(), content);

        let mut tasks = vec![self.request_missing_tiles()];
        if let Some(url) = photo_url {
            tasks.push(self.fetch_popup_image(place.name.clone(), PopupImageKind::Photo, url));
        }
        if !place.icon.is_empty() {
            tasks.push(self.fetch_popup_image(
                place.name.clone(),
                PopupImageKind::Icon,
                place.icon.clone(),
            ));
        }

        Task::batch(tasks)
    }

    fn fetch_popup_image(
        &self,
        place_name: String,
        kind: PopupImageKind,
        url: String,
    ) -> Task<OrchestratorMessage> {
        let provider = Arc::clone(&self.places_provider);

        Task::perform(
            async move { provider.fetch_image(&url).await.map_err(|error| error.to_string()) },
            move |result| OrchestratorMessage::PopupImageFetched {
                place_name: place_name.clone(),
                kind,
                result: result.map(image::Handle::from_bytes),
            },
        )
    }

    fn handle_popup_image_fetched(
        &mut self,
        place_name: String,
        kind: PopupImageKind,
        result: Result<image::Handle, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(handle) => self.map_view.attach_popup_image(&place_name, kind, handle),
            Err(error) => log::warn!(
                "[ORCHESTRATOR] popup {:?} for '{}' failed to load: {}",
                kind,
                place_name,
                error
            ),
        }

        Task::none()
    }

    fn handle_tile_fetched(
        &mut self,
        tile: TileId,
        result: Result<image::Handle, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(handle) => self.map_view.insert_tile(tile, handle),
            Err(error) => log::warn!("[ORCHESTRATOR] tile {:?} failed to load: {}", tile, error),
        }

        Task::none()
    }

    fn handle_map_interaction(&mut self, message: MapViewMessage) -> Task<OrchestratorMessage> {
        match message {
            MapViewMessage::MarkerClicked => self.map_view.reopen_popup(),
            MapViewMessage::PopupDismissed => self.map_view.dismiss_popup(),
        }

        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let search_input = text_input(
            global_constants::SEARCH_INPUT_PLACEHOLDER,
            &self.search_query,
        )
        .on_input(OrchestratorMessage::SearchInputChanged)
        .padding(10)
        .size(14);

        let mut sections = column![].spacing(12);
        for (index, slot) in self.category_slots.iter().enumerate() {
            sections = sections.push(self.render_category_slot(index, slot));
        }

        let sidebar = container(
            column![
                text(global_constants::APPLICATION_TITLE).size(22),
                search_input,
                scrollable(sections).height(Length::Fill),
            ]
            .spacing(14)
            .padding(14),
        )
        .width(340)
        .height(Length::Fill)
        .style(app_theme::sidebar_style);

        let map_area = self
            .map_view
            .render_ui()
            .map(OrchestratorMessage::MapInteraction);

        let status_bar = container(
            text(&self.status)
                .size(12)
                .style(app_theme::placeholder_text_style),
        )
        .width(Length::Fill)
        .padding([4, 10]);

        column![row![sidebar, map_area].height(Length::Fill), status_bar].into()
    }

    fn render_category_slot<'a>(
        &'a self,
        index: usize,
        slot: &'a CategorySlot,
    ) -> Element<'a, OrchestratorMessage> {
        match slot {
            CategorySlot::Loading => {
                let descriptor = &global_constants::RESTAURANT_CATEGORIES[index];

                container(
                    text(format!(
                        "{}: {}",
                        descriptor.display_name,
                        global_constants::LOADING_LABEL
                    ))
                    .size(13)
                    .style(app_theme::placeholder_text_style),
                )
                .padding([6, 10])
                .into()
            }
            CategorySlot::Ready(list_view) => {
                list_view.render_ui().map(move |message| match message {
                    CategoryListMessage::HeaderClicked => {
                        OrchestratorMessage::CategoryToggled(index)
                    }
                    CategoryListMessage::PlaceClicked(place_index) => {
                        OrchestratorMessage::PlaceSelected {
                            slot: index,
                            index: place_index,
                        }
                    }
                })
            }
        }
    }

    pub fn map_view(&self) -> &MapView {
        &self.map_view
    }

    pub fn category_slots(&self) -> &[CategorySlot] {
        &self.category_slots
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn theme_mode(&self) -> &ThemeMode {
        &self.settings.theme_mode
    }
}
