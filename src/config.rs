//! Planner configuration and upstream credentials.
//!
//! Both are loaded once at startup and shared read-only by every request.

use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::sampler::DEFAULT_SAMPLE_STRIDE;

pub const MAPBOX_TOKEN_VAR: &str = "TOKEN_MAPBOX";
pub const YELP_TOKEN_VAR: &str = "TOKEN_YELP";

const STRIDE_VAR: &str = "TANGENT_SAMPLE_STRIDE";
const CONCURRENCY_VAR: &str = "TANGENT_MAX_CONCURRENCY";
const QUERY_TIMEOUT_VAR: &str = "TANGENT_QUERY_TIMEOUT_SECS";
const DEADLINE_VAR: &str = "TANGENT_DEADLINE_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct TangentConfig {
    /// Distance, in route points, between consecutive search centers.
    pub sample_stride: NonZeroUsize,
    /// Upper bound on place searches in flight at once.
    pub max_concurrency: usize,
    /// Timeout applied to each upstream HTTP request.
    pub query_timeout: Duration,
    /// Time budget for the whole place-search fan-out of one request.
    pub aggregation_deadline: Duration,
    /// Fail the request when every place search failed.
    pub fail_on_total_search_failure: bool,
}

impl Default for TangentConfig {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            max_concurrency: 8,
            query_timeout: Duration::from_secs(10),
            aggregation_deadline: Duration::from_secs(30),
            fail_on_total_search_failure: true,
        }
    }
}

impl TangentConfig {
    /// Defaults overridden by any `TANGENT_*` variables present in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`TangentConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(stride) = parse_var::<NonZeroUsize, _>(&lookup, STRIDE_VAR)? {
            config.sample_stride = stride;
        }
        if let Some(concurrency) = parse_var::<NonZeroUsize, _>(&lookup, CONCURRENCY_VAR)? {
            config.max_concurrency = concurrency.get();
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, QUERY_TIMEOUT_VAR)? {
            config.query_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, DEADLINE_VAR)? {
            config.aggregation_deadline = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_sample_stride(mut self, stride: NonZeroUsize) -> Self {
        self.sample_stride = stride;
        self
    }

    /// Values below one are treated as one.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_aggregation_deadline(mut self, deadline: Duration) -> Self {
        self.aggregation_deadline = deadline;
        self
    }

    pub fn with_fail_on_total_search_failure(mut self, fail: bool) -> Self {
        self.fail_on_total_search_failure = fail;
        self
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}

/// Access tokens for the routing and search providers.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub mapbox_token: String,
    pub yelp_token: String,
}

impl Credentials {
    pub fn new(mapbox_token: impl Into<String>, yelp_token: impl Into<String>) -> Self {
        Self {
            mapbox_token: mapbox_token.into(),
            yelp_token: yelp_token.into(),
        }
    }

    /// Reads `TOKEN_MAPBOX` and `TOKEN_YELP`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };
        Ok(Self {
            mapbox_token: required(MAPBOX_TOKEN_VAR)?,
            yelp_token: required(YELP_TOKEN_VAR)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("mapbox_token", &"<redacted>")
            .field("yelp_token", &"<redacted>")
            .finish()
    }
}
