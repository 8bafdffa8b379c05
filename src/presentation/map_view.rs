use std::collections::HashMap;

use iced::mouse;
use iced::widget::{button, canvas, column, container, image, row, stack, text};
use iced::{Alignment, Color, Element, Length, Point, Rectangle, Size};

use crate::core::models::{mercator_normalized, Place, PlaceLocation, TileId};
use crate::global_constants;
use crate::presentation::app_theme;

/// The single on-map marker and its attached info panel. At most one exists
/// at a time; placing a new one replaces it entirely.
struct ActiveMarker {
    place: Place,
    content: PopupContent,
    popup_open: bool,
}

/// Everything the info popup shows for the selected place. Thumbnails arrive
/// asynchronously and are attached once fetched.
#[derive(Debug, Clone)]
pub struct PopupContent {
    pub name: String,
    pub vicinity: String,
    pub open_now: bool,
    pub icon_url: String,
    pub photo_url: Option<String>,
    pub icon: Option<image::Handle>,
    pub photo: Option<image::Handle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupImageKind {
    Photo,
    Icon,
}

#[derive(Debug, Clone)]
pub enum MapViewMessage {
    MarkerClicked,
    PopupDismissed,
}

pub struct MapView {
    center: PlaceLocation,
    zoom: u8,
    tiles: HashMap<TileId, image::Handle>,
    marker: Option<ActiveMarker>,
}

impl MapView {
    /// Builds the map view state. Rejects a zoom level the tile pyramid
    /// cannot serve.
    pub fn initialize(center: PlaceLocation, zoom: u8) -> anyhow::Result<Self> {
        if !(global_constants::MIN_MAP_ZOOM..=global_constants::MAX_MAP_ZOOM).contains(&zoom) {
            anyhow::bail!(
                "cannot initialize map at zoom {}, supported range is {}..={}",
                zoom,
                global_constants::MIN_MAP_ZOOM,
                global_constants::MAX_MAP_ZOOM
            );
        }

        log::info!(
            "[MAP_VIEW] initializing at ({}, {}) zoom {}",
            center.lat,
            center.lng,
            zoom
        );

        Ok(Self {
            center,
            zoom,
            tiles: HashMap::new(),
            marker: None,
        })
    }

    pub fn with_default_view() -> Self {
        Self {
            center: PlaceLocation::at_coordinates(
                global_constants::DEFAULT_CENTER_LATITUDE,
                global_constants::DEFAULT_CENTER_LONGITUDE,
            ),
            zoom: global_constants::DEFAULT_MAP_ZOOM,
            tiles: HashMap::new(),
            marker: None,
        }
    }

    pub fn center(&self) -> PlaceLocation {
        self.center
    }

    /// Replaces any existing marker with one at the place's location, opens
    /// its popup immediately and re-centers the view on the place.
    pub fn show_marker(&mut self, place: Place, content: PopupContent) {
        log::info!(
            "[MAP_VIEW] showing marker for '{}' at ({}, {})",
            place.name,
            place.location().lat,
            place.location().lng
        );

        self.center = place.location();
        self.marker = Some(ActiveMarker {
            place,
            content,
            popup_open: true,
        });
    }

    /// Detaches the current marker. Returns whether one was present.
    pub fn remove_marker(&mut self) -> bool {
        if self.marker.is_none() {
            return false;
        }

        log::debug!("[MAP_VIEW] removing marker");
        self.marker = None;
        true
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    pub fn marker_place(&self) -> Option<&Place> {
        self.marker.as_ref().map(|marker| &marker.place)
    }

    pub fn is_popup_open(&self) -> bool {
        self.marker
            .as_ref()
            .map(|marker| marker.popup_open)
            .unwrap_or(false)
    }

    pub fn reopen_popup(&mut self) {
        if let Some(marker) = self.marker.as_mut() {
            log::debug!("[MAP_VIEW] reopening popup for '{}'", marker.place.name);
            marker.popup_open = true;
        }
    }

    pub fn dismiss_popup(&mut self) {
        if let Some(marker) = self.marker.as_mut() {
            marker.popup_open = false;
        }
    }

    /// Attaches a fetched thumbnail, unless the marker changed while the
    /// fetch was in flight.
    pub fn attach_popup_image(
        &mut self,
        place_name: &str,
        kind: PopupImageKind,
        handle: image::Handle,
    ) {
        let Some(marker) = self.marker.as_mut() else {
            return;
        };

        if marker.place.name != place_name {
            log::debug!(
                "[MAP_VIEW] discarding stale popup image for '{}', marker is now '{}'",
                place_name,
                marker.place.name
            );
            return;
        }

        match kind {
            PopupImageKind::Photo => marker.content.photo = Some(handle),
            PopupImageKind::Icon => marker.content.icon = Some(handle),
        }
    }

    pub fn insert_tile(&mut self, tile: TileId, handle: image::Handle) {
        self.tiles.insert(tile, handle);
    }

    /// The tile grid covering the viewport around the current center.
    pub fn visible_tiles(&self) -> Vec<TileId> {
        let tiles_across = 1i64 << self.zoom;
        let center_tile = TileId::containing(&self.center, self.zoom);

        let mut tiles = Vec::new();
        for delta_y in -global_constants::VIEWPORT_TILE_SPAN_Y..=global_constants::VIEWPORT_TILE_SPAN_Y
        {
            let y = i64::from(center_tile.y) + delta_y;
            if y < 0 || y >= tiles_across {
                continue;
            }

            for delta_x in
                -global_constants::VIEWPORT_TILE_SPAN_X..=global_constants::VIEWPORT_TILE_SPAN_X
            {
                let x = (i64::from(center_tile.x) + delta_x).rem_euclid(tiles_across);
                tiles.push(TileId {
                    zoom: self.zoom,
                    x: x as u32,
                    y: y as u32,
                });
            }
        }

        tiles
    }

    /// Visible tiles not yet in the cache, for the orchestrator to fetch.
    pub fn missing_tiles(&self) -> Vec<TileId> {
        self.visible_tiles()
            .into_iter()
            .filter(|tile| !self.tiles.contains_key(tile))
            .collect()
    }

    fn screen_position(&self, location: &PlaceLocation, bounds: Rectangle) -> Point {
        let tiles_across = f64::from(1u32 << self.zoom);

        let (center_x, center_y) = mercator_normalized(&self.center);
        let (point_x, point_y) = mercator_normalized(location);

        let mut delta_x = (point_x - center_x) * tiles_across;
        if delta_x > tiles_across / 2.0 {
            delta_x -= tiles_across;
        } else if delta_x < -tiles_across / 2.0 {
            delta_x += tiles_across;
        }
        let delta_y = (point_y - center_y) * tiles_across;

        Point::new(
            bounds.width / 2.0 + (delta_x * global_constants::TILE_SIZE_PIXELS) as f32,
            bounds.height / 2.0 + (delta_y * global_constants::TILE_SIZE_PIXELS) as f32,
        )
    }

    fn marker_hit(&self, cursor_position: Point, bounds: Rectangle) -> bool {
        let Some(marker) = self.marker.as_ref() else {
            return false;
        };

        let pin_tip = self.screen_position(&marker.place.location(), bounds);
        let pin_head = Point::new(pin_tip.x, pin_tip.y - 14.0);

        let distance = ((cursor_position.x - pin_head.x).powi(2)
            + (cursor_position.y - pin_head.y).powi(2))
        .sqrt();

        distance <= global_constants::MARKER_HIT_RADIUS
    }

    pub fn render_ui(&self) -> Element<'_, MapViewMessage> {
        let map_canvas = canvas(self).width(Length::Fill).height(Length::Fill);

        let attribution = container(
            text(global_constants::MAP_ATTRIBUTION)
                .size(11)
                .style(app_theme::attribution_text_style),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(4);

        let mut layers: Vec<Element<'_, MapViewMessage>> =
            vec![map_canvas.into(), attribution.into()];

        if let Some(marker) = &self.marker {
            if marker.popup_open {
                layers.push(self.render_popup(marker));
            }
        }

        stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn render_popup<'a>(&'a self, marker: &'a ActiveMarker) -> Element<'a, MapViewMessage> {
        let content = &marker.content;

        let mut header = row![].spacing(6).align_y(Alignment::Center);
        if let Some(icon_handle) = &content.icon {
            header = header.push(image(icon_handle.clone()).height(15));
        }
        header = header.push(
            text(&content.name)
                .size(15)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..iced::Font::default()
                }),
        );

        let mut info = column![header].spacing(4);
        info = info.push(text(&content.vicinity).size(13));
        if content.open_now {
            info = info.push(
                text(global_constants::OPEN_NOW_LABEL)
                    .size(13)
                    .style(app_theme::open_now_text_style),
            );
        }

        let mut body = row![].spacing(10).align_y(Alignment::Start);
        if let Some(photo_handle) = &content.photo {
            body = body.push(image(photo_handle.clone()).width(80).height(80));
        }
        body = body.push(info);

        let close_button = button(text("✕").size(12))
            .padding([2, 6])
            .style(app_theme::popup_close_button_style)
            .on_press(MapViewMessage::PopupDismissed);

        let card = container(row![body, close_button].spacing(8))
            .padding(12)
            .max_width(320)
            .style(app_theme::popup_card_style);

        container(card)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .padding(iced::Padding {
                top: 48.0,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

impl canvas::Program<MapViewMessage> for MapView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<MapViewMessage>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;

                if self.marker_hit(position, bounds) {
                    Some(canvas::Action::publish(MapViewMessage::MarkerClicked))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry<iced::Renderer>> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            app_theme::tile_placeholder_color(theme),
        );

        let tiles_across = f64::from(1u32 << self.zoom);
        let (center_x, center_y) = mercator_normalized(&self.center);
        let center_world_x = center_x * tiles_across;
        let center_world_y = center_y * tiles_across;
        let tile_size = Size::new(
            global_constants::TILE_SIZE_PIXELS as f32,
            global_constants::TILE_SIZE_PIXELS as f32,
        );

        for tile in self.visible_tiles() {
            let Some(handle) = self.tiles.get(&tile) else {
                continue;
            };

            let mut delta_x = f64::from(tile.x) - center_world_x;
            if delta_x > tiles_across / 2.0 {
                delta_x -= tiles_across;
            } else if delta_x < -tiles_across / 2.0 {
                delta_x += tiles_across;
            }
            let delta_y = f64::from(tile.y) - center_world_y;

            let origin = Point::new(
                bounds.width / 2.0 + (delta_x * global_constants::TILE_SIZE_PIXELS) as f32,
                bounds.height / 2.0 + (delta_y * global_constants::TILE_SIZE_PIXELS) as f32,
            );

            frame.draw_image(
                Rectangle::new(origin, tile_size),
                canvas::Image::new(handle.clone()),
            );
        }

        if let Some(marker) = &self.marker {
            let pin_tip = self.screen_position(&marker.place.location(), bounds);
            let pin_head = Point::new(pin_tip.x, pin_tip.y - 14.0);
            let pin_color = theme.palette().danger;

            let mut stem = canvas::path::Builder::new();
            stem.move_to(Point::new(pin_tip.x - 5.0, pin_tip.y - 10.0));
            stem.line_to(pin_tip);
            stem.line_to(Point::new(pin_tip.x + 5.0, pin_tip.y - 10.0));
            stem.close();

            frame.fill(&stem.build(), pin_color);
            frame.fill(&canvas::Path::circle(pin_head, 7.0), pin_color);
            frame.fill(&canvas::Path::circle(pin_head, 2.5), Color::WHITE);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.marker_hit(position, bounds) => mouse::Interaction::Pointer,
            _ => mouse::Interaction::default(),
        }
    }
}
