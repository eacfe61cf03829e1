//! Decoded tangent request parameters and the per-point search query.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geometry::RoutePoint;

pub const DEFAULT_TERM: &str = "food";
/// Search radius in meters (15 miles).
pub const DEFAULT_RADIUS_METERS: u32 = 24_140;
pub const DEFAULT_LIMIT: u32 = 5;

const MIN_PRICE_TIER: u8 = 1;
const MAX_PRICE_TIER: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceFilterError {
    #[error("price filter is empty")]
    Empty,
    #[error("invalid price tier {0:?}, expected 1 to 4")]
    InvalidTier(String),
}

/// Set of accepted price tiers, `1` (cheapest) through `4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFilter {
    tiers: Vec<u8>,
}

impl PriceFilter {
    pub fn new(tiers: &[u8]) -> Result<Self, PriceFilterError> {
        if tiers.is_empty() {
            return Err(PriceFilterError::Empty);
        }
        if let Some(bad) = tiers
            .iter()
            .find(|tier| !(MIN_PRICE_TIER..=MAX_PRICE_TIER).contains(*tier))
        {
            return Err(PriceFilterError::InvalidTier(bad.to_string()));
        }
        let mut tiers = tiers.to_vec();
        tiers.sort_unstable();
        tiers.dedup();
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[u8] {
        &self.tiers
    }
}

impl FromStr for PriceFilter {
    type Err = PriceFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiers = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map_err(|_| PriceFilterError::InvalidTier(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&tiers)
    }
}

/// Renders as the comma-separated form the search provider expects, e.g. `1,2`.
impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .tiers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Parameters of one tangent request, already decoded by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TangentRequest {
    pub start: RoutePoint,
    pub end: RoutePoint,
    pub term: String,
    pub radius_meters: u32,
    pub open_now: bool,
    pub price: Option<PriceFilter>,
    pub limit: u32,
}

impl TangentRequest {
    /// Creates a request between two points with default search parameters.
    pub fn new(start: RoutePoint, end: RoutePoint) -> Self {
        Self {
            start,
            end,
            term: DEFAULT_TERM.to_string(),
            radius_meters: DEFAULT_RADIUS_METERS,
            open_now: false,
            price: None,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    pub fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = open_now;
        self
    }

    pub fn with_price(mut self, price: PriceFilter) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Builds the search query centered on `center`.
    pub fn query_at(&self, center: RoutePoint) -> PlaceQuery {
        PlaceQuery {
            center,
            term: self.term.clone(),
            radius_meters: self.radius_meters,
            open_now: self.open_now,
            price: self.price.clone(),
            limit: self.limit,
        }
    }
}

/// One place-search call around a sampled route point.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    pub center: RoutePoint,
    pub term: String,
    pub radius_meters: u32,
    pub open_now: bool,
    pub price: Option<PriceFilter>,
    pub limit: u32,
}
