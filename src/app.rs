use std::sync::Arc;

use iced::{Element, Task};

use crate::adapters::{GooglePlacesSearchProvider, HttpTileProvider};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::presentation::{app_theme, MapView};
use crate::user_settings::UserSettings;

pub struct NearbyBitesApp {
    orchestrator: AppOrchestrator,
}

impl NearbyBitesApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|error| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", error);
            UserSettings::default()
        });

        let mut startup_errors = settings.validate();
        for error in &startup_errors {
            log::error!("[APP] Configuration error: {}", error);
        }

        let places_provider = Arc::new(GooglePlacesSearchProvider::new(
            settings.places_api_key.clone(),
        ));
        let tile_provider = Arc::new(HttpTileProvider::new(settings.tile_url_template.clone()));

        let map_view =
            MapView::initialize(settings.center(), settings.map_zoom).unwrap_or_else(|error| {
                log::error!("[APP] {}", error);
                startup_errors.push(error.to_string());
                MapView::with_default_view()
            });

        let mut orchestrator = AppOrchestrator::build(
            places_provider,
            tile_provider,
            map_view,
            settings,
            startup_errors,
        );
        let startup = orchestrator.startup_tasks();

        (Self { orchestrator }, startup)
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> iced::Theme {
        app_theme::get_theme(self.orchestrator.theme_mode())
    }
}
