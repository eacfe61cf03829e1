//! Order-preserving, identity-keyed collection of places.

use std::collections::HashSet;

use crate::place::Place;

/// Keeps the first place seen for each identifier, in insertion order.
///
/// Not synchronized: merge into it from a single thread once concurrent
/// results have been collected.
#[derive(Debug, Clone, Default)]
pub struct PlaceSet {
    places: Vec<Place>,
    seen: HashSet<String>,
}

impl PlaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `place` unless a place with the same id is already present.
    ///
    /// Returns `true` when the place was added.
    pub fn add(&mut self, place: Place) -> bool {
        if self.seen.contains(place.id()) {
            return false;
        }
        self.seen.insert(place.id.clone());
        self.places.push(place);
        true
    }

    /// Adds each place in order. Returns how many were new.
    pub fn add_many<I>(&mut self, places: I) -> usize
    where
        I: IntoIterator<Item = Place>,
    {
        let mut added = 0;
        for place in places {
            if self.add(place) {
                added += 1;
            }
        }
        added
    }

    /// Current contents in first-seen order.
    pub fn items(&self) -> &[Place] {
        &self.places
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn into_places(self) -> Vec<Place> {
        self.places
    }
}

impl Extend<Place> for PlaceSet {
    fn extend<I: IntoIterator<Item = Place>>(&mut self, iter: I) {
        self.add_many(iter);
    }
}

impl FromIterator<Place> for PlaceSet {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_many(iter);
        set
    }
}
