//! Test fixtures for tangent-planner.
//!
//! Provides:
//! - A realistic driving route from Amherst to Boston, MA
//! - Stub routing and place-search providers with canned responses

#![allow(dead_code)]

pub mod amherst_boston_route;
pub mod stubs;

pub use amherst_boston_route::*;
pub use stubs::*;
