//! tangent-planner core
//!
//! Finds points of interest along a driving route: fetch a route, sample it
//! at a fixed stride, search for places around each sample concurrently, and
//! merge the results without duplicates.

pub mod aggregator;
pub mod collector;
pub mod config;
pub mod error;
pub mod geometry;
mod http;
pub mod mapbox;
pub mod place;
pub mod request;
pub mod sampler;
pub mod tangent;
pub mod traits;
pub mod yelp;

pub use error::TangentError;
pub use tangent::{TangentPlanner, TangentResult};
