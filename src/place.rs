//! Points of interest returned by the place-search provider.

use serde::{Deserialize, Serialize};

/// Location of a place, in the search provider's field names.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceCoordinates {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub alias: String,
    pub title: String,
}

/// A single search result.
///
/// `id` is stable per real-world place and is the only field used to decide
/// whether two results are the same place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    /// Price tier as coded by the provider, e.g. `"$$"`.
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub coordinates: PlaceCoordinates,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Place {
    /// Creates a place with only identity and name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating: 0.0,
            review_count: 0,
            price: None,
            coordinates: PlaceCoordinates::default(),
            categories: Vec::new(),
            image_url: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
