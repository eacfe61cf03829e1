//! Mapbox Directions adapter for route geometry.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{TangentError, Upstream};
use crate::geometry::{RouteGeometry, RoutePoint};
use crate::http::fetch_json;
use crate::traits::RoutingProvider;

#[derive(Clone)]
pub struct MapboxConfig {
    pub base_url: String,
    pub profile: String,
    /// Timeout for each request, connect through body.
    pub timeout: Duration,
    pub access_token: String,
}

impl MapboxConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com".to_string(),
            profile: "driving".to_string(),
            timeout: Duration::from_secs(10),
            access_token: String::new(),
        }
    }
}

impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("base_url", &self.base_url)
            .field("profile", &self.profile)
            .field("timeout", &self.timeout)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct MapboxClient {
    config: MapboxConfig,
    client: reqwest::blocking::Client,
}

impl MapboxClient {
    pub fn new(config: MapboxConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    fn directions_request(&self, start: RoutePoint, end: RoutePoint) -> reqwest::blocking::RequestBuilder {
        let url = format!(
            "{}/directions/v5/mapbox/{}/{:.6},{:.6};{:.6},{:.6}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            start.longitude(),
            start.latitude(),
            end.longitude(),
            end.latitude(),
        );

        self.client.get(url).query(&[
            ("alternatives", "true"),
            ("geometries", "geojson"),
            ("language", "en"),
            ("overview", "simplified"),
            ("steps", "true"),
            ("access_token", self.config.access_token.as_str()),
        ])
    }
}

impl RoutingProvider for MapboxClient {
    fn routes(&self, start: RoutePoint, end: RoutePoint) -> Result<Vec<RouteGeometry>, TangentError> {
        tracing::debug!(?start, ?end, "requesting directions");
        let body: DirectionsResponse = fetch_json(self.directions_request(start, end), Upstream::Routing)?;
        body.into_geometries()
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    geometry: LineString,
}

#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<RoutePoint>,
}

impl DirectionsResponse {
    fn into_geometries(self) -> Result<Vec<RouteGeometry>, TangentError> {
        if self.code != "Ok" {
            let detail = self.message.unwrap_or_default();
            return Err(TangentError::routing(format!("{}: {detail}", self.code)));
        }
        if self.routes.is_empty() {
            return Err(TangentError::routing("no route between the requested points"));
        }

        Ok(self
            .routes
            .into_iter()
            .map(|route| RouteGeometry::new(route.geometry.coordinates))
            .collect())
    }
}
