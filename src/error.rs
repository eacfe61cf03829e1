//! Error types for tangent planning.

use std::fmt;

use thiserror::Error;

/// Which external capability produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Routing,
    Search,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Routing => f.write_str("routing"),
            Self::Search => f.write_str("place search"),
        }
    }
}

/// Failure of a tangent request or one of its upstream calls.
///
/// The `Display` text is the failure reason reported to callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TangentError {
    /// The routing provider could not be reached, answered with a non-success
    /// status, or found no route.
    #[error("routing provider failed: {message}")]
    UpstreamRoutingFailure { message: String, status: Option<u16> },

    /// A place-search call failed or did not finish in time.
    #[error("place search failed: {message}")]
    UpstreamSearchFailure { message: String, status: Option<u16> },

    /// An upstream response could not be decoded into the expected shape.
    #[error("malformed {upstream} payload: {message}")]
    MalformedUpstreamPayload { upstream: Upstream, message: String },
}

impl TangentError {
    pub fn routing(message: impl Into<String>) -> Self {
        Self::UpstreamRoutingFailure {
            message: message.into(),
            status: None,
        }
    }

    pub fn search(message: impl Into<String>) -> Self {
        Self::UpstreamSearchFailure {
            message: message.into(),
            status: None,
        }
    }

    /// Builds the transport-level failure kind for `upstream`.
    pub fn upstream(upstream: Upstream, message: impl Into<String>, status: Option<u16>) -> Self {
        let message = message.into();
        match upstream {
            Upstream::Routing => Self::UpstreamRoutingFailure { message, status },
            Upstream::Search => Self::UpstreamSearchFailure { message, status },
        }
    }

    /// HTTP status reported by the upstream, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamRoutingFailure { status, .. } | Self::UpstreamSearchFailure { status, .. } => {
                *status
            }
            Self::MalformedUpstreamPayload { .. } => None,
        }
    }
}

/// Missing or invalid process configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Failure to construct the upstream HTTP clients.
#[derive(Debug, Error)]
pub enum PlannerBuildError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
