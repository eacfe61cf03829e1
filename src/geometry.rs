//! Route geometry as returned by the routing provider.
//!
//! Points are kept in the provider's GeoJSON order, `[longitude, latitude]`,
//! so a geometry can be handed back to callers without reshaping.

use serde::{Deserialize, Serialize};

/// A single `(longitude, latitude)` coordinate on a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint(f64, f64);

impl RoutePoint {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self(longitude, latitude)
    }

    pub const fn longitude(&self) -> f64 {
        self.0
    }

    pub const fn latitude(&self) -> f64 {
        self.1
    }
}

/// An ordered sequence of route points describing one candidate path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteGeometry {
    points: Vec<RoutePoint>,
}

impl RouteGeometry {
    pub fn new(points: Vec<RoutePoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Consumes the geometry and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<RoutePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<RoutePoint>> for RouteGeometry {
    fn from(points: Vec<RoutePoint>) -> Self {
        Self::new(points)
    }
}
