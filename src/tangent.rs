//! Tangent planning: route fetch, sampling, and place aggregation.
//!
//! A request runs `fetch route -> sample -> aggregate -> respond` exactly
//! once. Any routing failure ends the request; place-search failures are
//! counted on the result and only end the request when every search failed
//! and [`TangentConfig::fail_on_total_search_failure`] is set.

use std::sync::Arc;

use serde::Serialize;

use crate::aggregator::{PlaceAggregator, QueryFailure};
use crate::config::{Credentials, TangentConfig};
use crate::error::{PlannerBuildError, TangentError};
use crate::geometry::RouteGeometry;
use crate::mapbox::{MapboxClient, MapboxConfig};
use crate::place::Place;
use crate::request::TangentRequest;
use crate::sampler::sample_points;
use crate::traits::{PlaceSearchProvider, RoutingProvider};
use crate::yelp::{YelpClient, YelpConfig};

/// Places found along a route, together with the full route geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TangentResult {
    #[serde(rename = "businesses")]
    pub places: Vec<Place>,
    pub coordinates: RouteGeometry,
    /// Sampled points whose search failed and contributed no places.
    pub failed_queries: usize,
}

pub struct TangentPlanner<R, S: ?Sized> {
    routing: R,
    search: Arc<S>,
    aggregator: PlaceAggregator,
    config: TangentConfig,
}

impl<R, S> TangentPlanner<R, S>
where
    R: RoutingProvider,
    S: PlaceSearchProvider + ?Sized + 'static,
{
    pub fn new(routing: R, search: Arc<S>, config: TangentConfig) -> Self {
        let aggregator = PlaceAggregator::new(config.max_concurrency, config.aggregation_deadline);
        Self {
            routing,
            search,
            aggregator,
            config,
        }
    }

    pub fn config(&self) -> &TangentConfig {
        &self.config
    }

    /// Finds the places along the first route between the request's endpoints.
    pub fn find_tangents(&self, request: &TangentRequest) -> Result<TangentResult, TangentError> {
        let mut routes = self
            .routing
            .routes(request.start, request.end)
            .inspect_err(|err| tracing::warn!(error = %err, "route fetch failed"))?;
        if routes.is_empty() {
            return Err(TangentError::routing("no route between the requested points"));
        }
        // Alternatives beyond the first are ignored.
        let route = routes.swap_remove(0);

        let sampled = sample_points(route.points(), self.config.sample_stride);
        let aggregation = self.aggregator.aggregate(&self.search, request, &sampled);

        if aggregation.all_failed() && self.config.fail_on_total_search_failure {
            return Err(total_failure(&aggregation.failures));
        }

        tracing::info!(
            route_points = route.len(),
            sampled = sampled.len(),
            places = aggregation.places.len(),
            failed_queries = aggregation.failures.len(),
            "tangent request complete"
        );

        Ok(TangentResult {
            places: aggregation.places,
            coordinates: route,
            failed_queries: aggregation.failures.len(),
        })
    }
}

impl TangentPlanner<MapboxClient, YelpClient> {
    /// Builds a planner backed by the Mapbox and Yelp HTTP clients.
    pub fn with_credentials(credentials: &Credentials, config: TangentConfig) -> Result<Self, PlannerBuildError> {
        let (mapbox, yelp) = client_configs(credentials, &config);
        let routing = MapboxClient::new(mapbox)?;
        let search = YelpClient::new(yelp)?;
        Ok(Self::new(routing, Arc::new(search), config))
    }
}

fn client_configs(credentials: &Credentials, config: &TangentConfig) -> (MapboxConfig, YelpConfig) {
    let mapbox = MapboxConfig {
        timeout: config.query_timeout,
        ..MapboxConfig::new(credentials.mapbox_token.clone())
    };
    let yelp = YelpConfig {
        timeout: config.query_timeout,
        ..YelpConfig::new(credentials.yelp_token.clone())
    };
    (mapbox, yelp)
}

fn total_failure(failures: &[QueryFailure]) -> TangentError {
    let first = failures
        .first()
        .map(|failure| failure.error.to_string())
        .unwrap_or_default();
    tracing::warn!(failed = failures.len(), %first, "every place search failed");
    TangentError::UpstreamSearchFailure {
        message: format!("all {} place searches failed; first error: {first}", failures.len()),
        status: failures.first().and_then(|failure| failure.error.status()),
    }
}
