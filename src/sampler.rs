//! Fixed-stride sampling of route geometry.

use std::num::NonZeroUsize;

use crate::geometry::RoutePoint;

/// Stride used when no other value is configured.
pub const DEFAULT_SAMPLE_STRIDE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(stride) => stride,
    None => NonZeroUsize::MIN,
};

/// A route point selected as a place-search center.
///
/// `index` is the point's position in the original route and only decides
/// the order in which queries are launched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint {
    pub index: usize,
    pub point: RoutePoint,
}

/// Selects the points at indices `0, stride, 2 * stride, ...` that lie inside
/// the route.
///
/// An empty route yields nothing; a route shorter than the stride yields only
/// its first point.
pub fn sample_points(points: &[RoutePoint], stride: NonZeroUsize) -> Vec<SampledPoint> {
    points
        .iter()
        .enumerate()
        .step_by(stride.get())
        .map(|(index, &point)| SampledPoint { index, point })
        .collect()
}
