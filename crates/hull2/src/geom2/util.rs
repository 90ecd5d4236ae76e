use std::cmp::Ordering;

use super::types::Point;

/// `|a - b| < eps`.
#[inline]
pub fn nearly_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Sign of `value` with a dead zone of width `eps` around zero.
#[inline]
pub fn sign(value: f64, eps: f64) -> Ordering {
    if value.abs() < eps {
        Ordering::Equal
    } else if value < 0.0 {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Both coordinates within `eps`.
#[inline]
pub fn points_nearly_equal(a: Point, b: Point, eps: f64) -> bool {
    nearly_equal(a.x, b.x, eps) && nearly_equal(a.y, b.y, eps)
}

/// Index of the first point with a NaN or infinite coordinate.
pub fn first_non_finite(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
}
