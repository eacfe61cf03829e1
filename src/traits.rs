//! Capabilities the planner consumes.
//!
//! Production implementations live in [`crate::mapbox`] and [`crate::yelp`];
//! tests substitute canned implementations. Credentials belong to the
//! implementation and are fixed when it is constructed.

use crate::error::TangentError;
use crate::geometry::{RouteGeometry, RoutePoint};
use crate::place::Place;
use crate::request::PlaceQuery;

/// Provides driving routes between two points.
pub trait RoutingProvider {
    /// Returns one or more alternative route geometries, best first.
    fn routes(&self, start: RoutePoint, end: RoutePoint) -> Result<Vec<RouteGeometry>, TangentError>;
}

/// Searches for places around a single point.
///
/// Implementations are called from several worker threads at once and must
/// not retry or cache.
pub trait PlaceSearchProvider: Send + Sync {
    fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>, TangentError>;
}
