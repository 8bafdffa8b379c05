use iced::widget::{button, column, container, text};
use iced::{Element, Length};

use crate::core::models::{Category, Place, PlaceField};
use crate::global_constants;
use crate::presentation::app_theme;

pub struct CategoryListConfig {
    pub display_name: String,
    pub places: Vec<Place>,
}

#[derive(Debug, Clone)]
pub enum CategoryListMessage {
    HeaderClicked,
    PlaceClicked(usize),
}

/// One collapsible sidebar list bound to a category. The stored places stay
/// untouched; what is visible is always the sequence most recently handed to
/// `show`, so filtering and rendering stay two independent steps.
pub struct CategoryListView {
    category: Category,
    shown: Vec<Place>,
    collapsed: bool,
}

impl CategoryListView {
    pub fn build(config: CategoryListConfig) -> Self {
        let category = Category::build(config.display_name, config.places);
        let shown = category.places().to_vec();

        log::debug!(
            "[CATEGORY_LIST] built '{}' list with {} places",
            category.display_name(),
            shown.len()
        );

        Self {
            category,
            shown,
            collapsed: false,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn filter(&self, field: PlaceField, pattern: &str) -> Vec<Place> {
        self.category.filter(field, pattern)
    }

    /// Replaces the visible sequence. The caller decides full vs filtered;
    /// the view never re-reads stored state on its own.
    pub fn show(&mut self, places: Vec<Place>) {
        self.shown = places;
    }

    pub fn shown(&self) -> &[Place] {
        &self.shown
    }

    pub fn shown_place(&self, index: usize) -> Option<&Place> {
        self.shown.get(index)
    }

    pub fn is_showing_no_results(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        log::debug!(
            "[CATEGORY_LIST] '{}' collapsed: {}",
            self.category.display_name(),
            self.collapsed
        );
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn render_ui(&self) -> Element<'_, CategoryListMessage> {
        let chevron = if self.collapsed { "▸" } else { "▾" };
        let header_label = format!(
            "{} {} ({})",
            chevron,
            self.category.display_name(),
            self.category.places().len()
        );

        let header = button(text(header_label).size(15))
            .width(Length::Fill)
            .padding([8, 10])
            .style(app_theme::category_header_style)
            .on_press(CategoryListMessage::HeaderClicked);

        let mut section = column![header].spacing(2);

        if !self.collapsed {
            if self.is_showing_no_results() {
                section = section.push(
                    container(
                        text(global_constants::NO_RESULTS_LABEL)
                            .size(13)
                            .style(app_theme::placeholder_text_style),
                    )
                    .padding([6, 14]),
                );
            } else {
                for (index, place) in self.shown.iter().enumerate() {
                    section = section.push(
                        button(text(&place.name).size(13))
                            .width(Length::Fill)
                            .padding([4, 14])
                            .style(app_theme::list_item_style)
                            .on_press(CategoryListMessage::PlaceClicked(index)),
                    );
                }
            }
        }

        section.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{PlaceGeometry, PlaceLocation};

    fn place_named(name: &str) -> Place {
        Place {
            name: name.to_string(),
            vicinity: String::new(),
            icon: String::new(),
            photos: Vec::new(),
            opening_hours: None,
            geometry: PlaceGeometry {
                location: PlaceLocation::at_coordinates(34.05, -118.24),
            },
        }
    }

    fn japanese_list() -> CategoryListView {
        CategoryListView::build(CategoryListConfig {
            display_name: "Japanese".to_string(),
            places: vec![place_named("Sushi Zen"), place_named("Ramen House")],
        })
    }

    #[test]
    fn test_build_shows_the_full_stored_sequence() {
        let view = japanese_list();

        assert_eq!(view.shown().len(), 2);
        assert_eq!(view.shown()[0].name, "Sushi Zen");
        assert_eq!(view.shown()[1].name, "Ramen House");
        assert!(!view.is_showing_no_results());
    }

    #[test]
    fn test_show_with_empty_sequence_enters_placeholder_state() {
        let mut view = japanese_list();

        view.show(Vec::new());

        assert!(view.is_showing_no_results());
        assert!(view.shown_place(0).is_none());
    }

    #[test]
    fn test_show_never_touches_stored_places() {
        let mut view = japanese_list();

        view.show(Vec::new());
        view.show(vec![place_named("Izakaya Ten")]);

        assert_eq!(view.category().places().len(), 2);
        assert_eq!(view.category().places()[0].name, "Sushi Zen");
    }

    #[test]
    fn test_shown_place_resolves_by_position_in_shown_sequence() {
        let mut view = japanese_list();

        let filtered = view.filter(PlaceField::Name, "ramen");
        view.show(filtered);

        assert_eq!(view.shown_place(0).unwrap().name, "Ramen House");
        assert!(view.shown_place(1).is_none());
    }

    #[test]
    fn test_filter_then_clearing_restores_original_order() {
        let mut view = japanese_list();

        view.show(view.filter(PlaceField::Name, "zzz"));
        assert!(view.is_showing_no_results());

        view.show(view.filter(PlaceField::Name, ""));
        assert_eq!(view.shown().len(), 2);
        assert_eq!(view.shown()[0].name, "Sushi Zen");
        assert_eq!(view.shown()[1].name, "Ramen House");
    }

    #[test]
    fn test_collapse_toggle_is_purely_presentational() {
        let mut view = japanese_list();

        view.toggle_collapsed();
        assert!(view.is_collapsed());
        assert_eq!(view.shown().len(), 2);
        assert_eq!(view.category().places().len(), 2);

        view.toggle_collapsed();
        assert!(!view.is_collapsed());
    }
}
