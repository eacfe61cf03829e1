//! Simplified driving geometry from Amherst to downtown Boston.
//!
//! Coordinates are `[longitude, latitude]` pairs along MA-9 and I-90, in
//! the order a directions response would list them.

use tangent_planner::geometry::{RouteGeometry, RoutePoint};

pub const START: RoutePoint = RoutePoint::new(-72.52603912353516, 42.39096069335938);
pub const END: RoutePoint = RoutePoint::new(-71.05728149414062, 42.36025619506836);

pub const AMHERST_TO_BOSTON: &[(f64, f64)] = &[
    (-72.526039, 42.390961),
    (-72.519874, 42.375613),
    (-72.508212, 42.352897),
    (-72.487455, 42.330561),
    (-72.458314, 42.318207),
    (-72.412880, 42.295534),
    (-72.355718, 42.278312),
    (-72.290155, 42.262407),
    (-72.226309, 42.244196),
    (-72.161477, 42.235910),
    (-72.071306, 42.224873),
    (-71.968734, 42.226015),
    (-71.872515, 42.219376),
    (-71.796212, 42.231150),
    (-71.706541, 42.250763),
    (-71.613225, 42.272410),
    (-71.525903, 42.296644),
    (-71.432671, 42.302119),
    (-71.349120, 42.317808),
    (-71.255731, 42.334265),
    (-71.169904, 42.351387),
    (-71.099217, 42.352215),
    (-71.057281, 42.360256),
];

pub fn amherst_to_boston() -> RouteGeometry {
    route_from(AMHERST_TO_BOSTON)
}

pub fn route_from(pairs: &[(f64, f64)]) -> RouteGeometry {
    RouteGeometry::new(
        pairs
            .iter()
            .map(|&(lon, lat)| RoutePoint::new(lon, lat))
            .collect(),
    )
}

/// A synthetic route of `len` points stepping east along a parallel.
pub fn straight_route(len: usize) -> RouteGeometry {
    RouteGeometry::new(
        (0..len)
            .map(|i| RoutePoint::new(-72.5 + i as f64 * 0.05, 42.3))
            .collect(),
    )
}
