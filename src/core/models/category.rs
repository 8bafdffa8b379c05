use regex::RegexBuilder;

use crate::core::models::Place;

/// Which place field a filter pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceField {
    Name,
    Vicinity,
}

impl PlaceField {
    fn value_of<'a>(&self, place: &'a Place) -> &'a str {
        match self {
            PlaceField::Name => &place.name,
            PlaceField::Vicinity => &place.vicinity,
        }
    }
}

/// A named, ordered grouping of places. The sequence is stored verbatim at
/// construction, in service response order, and never mutated afterwards;
/// filtering always computes a fresh sequence.
pub struct Category {
    display_name: String,
    places: Vec<Place>,
}

impl Category {
    pub fn build(display_name: String, places: Vec<Place>) -> Self {
        log::debug!(
            "[CATEGORY] building category '{}' with {} places",
            display_name,
            places.len()
        );

        Self {
            display_name,
            places,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The full stored collection, never the filtered view.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Case-insensitive match of `pattern` against the selected field.
    ///
    /// The pattern is compiled as a case-insensitive regular expression so
    /// queries like "sushi|ramen" work; a pattern that does not compile
    /// degrades to a plain case-insensitive substring test instead of
    /// surfacing an error. An empty pattern matches everything.
    pub fn filter(&self, field: PlaceField, pattern: &str) -> Vec<Place> {
        if pattern.is_empty() {
            return self.places.clone();
        }

        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(matcher) => self
                .places
                .iter()
                .filter(|place| matcher.is_match(field.value_of(place)))
                .cloned()
                .collect(),
            Err(_) => {
                log::debug!(
                    "[CATEGORY] pattern '{}' is not a valid regex, matching literally",
                    pattern
                );

                let needle = pattern.to_lowercase();
                self.places
                    .iter()
                    .filter(|place| field.value_of(place).to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        }
    }
}
