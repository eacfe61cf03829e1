//! Yelp Fusion business search adapter.
//!
//! One [`PlaceSearchProvider::search`] call issues exactly one HTTP request;
//! there is no retry and no caching.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{TangentError, Upstream};
use crate::http::fetch_json;
use crate::place::Place;
use crate::request::PlaceQuery;
use crate::traits::PlaceSearchProvider;

/// Largest radius, in meters, the search API accepts.
pub const MAX_RADIUS_METERS: u32 = 40_000;
/// Largest page size the search API accepts.
pub const MAX_LIMIT: u32 = 50;

#[derive(Clone)]
pub struct YelpConfig {
    pub base_url: String,
    pub sort_by: String,
    /// Timeout for each request, connect through body.
    pub timeout: Duration,
    pub api_key: String,
}

impl YelpConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}

impl Default for YelpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.yelp.com".to_string(),
            sort_by: "best_match".to_string(),
            timeout: Duration::from_secs(10),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for YelpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YelpConfig")
            .field("base_url", &self.base_url)
            .field("sort_by", &self.sort_by)
            .field("timeout", &self.timeout)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct YelpClient {
    config: YelpConfig,
    client: reqwest::blocking::Client,
}

impl YelpClient {
    pub fn new(config: YelpConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    fn search_request(&self, query: &PlaceQuery) -> reqwest::blocking::RequestBuilder {
        let url = format!(
            "{}/v3/businesses/search",
            self.config.base_url.trim_end_matches('/')
        );

        // Out-of-range values are clamped rather than rejected upstream.
        let mut params = vec![
            ("latitude", query.center.latitude().to_string()),
            ("longitude", query.center.longitude().to_string()),
            ("term", query.term.clone()),
            ("radius", query.radius_meters.min(MAX_RADIUS_METERS).to_string()),
            ("limit", query.limit.clamp(1, MAX_LIMIT).to_string()),
            ("open_now", query.open_now.to_string()),
            ("sort_by", self.config.sort_by.clone()),
        ];
        if let Some(price) = &query.price {
            params.push(("price", price.to_string()));
        }

        self.client
            .get(url)
            .bearer_auth(&self.config.api_key)
            .query(&params)
    }
}

impl PlaceSearchProvider for YelpClient {
    fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>, TangentError> {
        tracing::debug!(center = ?query.center, term = %query.term, "searching places");
        let body: SearchResponse = fetch_json(self.search_request(query), Upstream::Search)?;
        Ok(body.businesses)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    businesses: Vec<Place>,
}
