//! Stub providers returning canned responses without network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use tangent_planner::error::TangentError;
use tangent_planner::geometry::{RouteGeometry, RoutePoint};
use tangent_planner::place::Place;
use tangent_planner::request::PlaceQuery;
use tangent_planner::traits::{PlaceSearchProvider, RoutingProvider};

pub fn places(ids: &[&str]) -> Vec<Place> {
    ids.iter().map(|id| Place::new(*id, format!("Place {id}"))).collect()
}

pub fn ids(places: &[Place]) -> Vec<&str> {
    places.iter().map(Place::id).collect()
}

/// Returns canned routes, optionally choosing one by the request's start.
pub struct StubRouting {
    response: Result<Vec<RouteGeometry>, TangentError>,
    by_start: Vec<(RoutePoint, RouteGeometry)>,
    calls: AtomicUsize,
}

impl StubRouting {
    pub fn with_routes(routes: Vec<RouteGeometry>) -> Self {
        Self {
            response: Ok(routes),
            by_start: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn starting_at(mut self, start: RoutePoint, route: RouteGeometry) -> Self {
        self.by_start.push((start, route));
        self
    }

    pub fn with_error(error: TangentError) -> Self {
        Self {
            response: Err(error),
            by_start: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RoutingProvider for StubRouting {
    fn routes(&self, start: RoutePoint, _end: RoutePoint) -> Result<Vec<RouteGeometry>, TangentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((_, route)) = self.by_start.iter().find(|(from, _)| *from == start) {
            return Ok(vec![route.clone()]);
        }
        self.response.clone()
    }
}

/// Answers each query by its center point, falling back to a default.
pub struct StubSearch {
    responses: Vec<(RoutePoint, Result<Vec<Place>, TangentError>)>,
    delays: Vec<(RoutePoint, Duration)>,
    fallback: Result<Vec<Place>, TangentError>,
    calls: AtomicUsize,
}

impl StubSearch {
    pub fn returning(places: Vec<Place>) -> Self {
        Self {
            responses: Vec::new(),
            delays: Vec::new(),
            fallback: Ok(places),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: TangentError) -> Self {
        Self {
            fallback: Err(error),
            ..Self::returning(Vec::new())
        }
    }

    pub fn at(mut self, center: RoutePoint, response: Result<Vec<Place>, TangentError>) -> Self {
        self.responses.push((center, response));
        self
    }

    pub fn delayed_at(mut self, center: RoutePoint, delay: Duration) -> Self {
        self.delays.push((center, delay));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PlaceSearchProvider for StubSearch {
    fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>, TangentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((_, delay)) = self.delays.iter().find(|(center, _)| *center == query.center) {
            thread::sleep(*delay);
        }
        self.responses
            .iter()
            .find(|(center, _)| *center == query.center)
            .map_or_else(|| self.fallback.clone(), |(_, response)| response.clone())
    }
}
