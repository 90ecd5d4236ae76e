//! Area and centroid of ordered polygons (shoelace formula).
//!
//! Vertices must be listed in boundary order; CW and CCW are both accepted. The
//! closing edge (last → first) is implicit.

use super::predicates::cross;
use super::types::{Point, EPS};
use super::util::first_non_finite;
use crate::error::{GeomError, Result};

/// Iterate the edges `(p[i], p[i+1])` including the closing edge.
fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |j| (polygon[(j + n - 1) % n], polygon[j]))
}

/// Signed area; positive for counter-clockwise order. Zero for fewer than 3 vertices.
pub fn signed_area(polygon: &[Point]) -> f64 {
    edges(polygon).map(|(a, b)| cross(a, b)).sum::<f64>() / 2.0
}

#[inline]
pub fn area(polygon: &[Point]) -> f64 {
    signed_area(polygon).abs()
}

/// Area centroid of an ordered polygon.
///
/// Errors
/// - `GeomError::NonFinite` for NaN/∞ coordinates.
/// - `GeomError::Degenerate` when the signed area vanishes (collinear vertices,
///   fewer than 3 vertices).
pub fn centroid(polygon: &[Point]) -> Result<Point> {
    centroid_eps(polygon, EPS)
}

pub fn centroid_eps(polygon: &[Point], eps: f64) -> Result<Point> {
    if let Some(index) = first_non_finite(polygon) {
        return Err(GeomError::NonFinite { index });
    }
    if polygon.len() < 3 {
        return Err(GeomError::degenerate(format!(
            "centroid needs at least 3 vertices, got {}",
            polygon.len()
        )));
    }
    let mut sum = 0.0;
    let mut c = Point::zeros();
    for (a, b) in edges(polygon) {
        let w = cross(a, b);
        sum += w;
        c += (a + b) * w;
    }
    if sum.abs() < eps {
        return Err(GeomError::degenerate("polygon has zero signed area"));
    }
    Ok(c / (3.0 * sum))
}
