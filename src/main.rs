mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;
mod user_settings;


use iced::Size;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Nearby Bites application");

    iced::application(
        app::NearbyBitesApp::build,
        app::NearbyBitesApp::handle_update,
        app::NearbyBitesApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::NearbyBitesApp::theme)
    .window_size(Size::new(1160.0, 760.0))
    .run()
}
