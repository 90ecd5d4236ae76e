//! Vector arithmetic and the two comparators used by the Graham scan.

use std::cmp::Ordering;

use super::types::{Point, Turn, EPS};
use super::util::{nearly_equal, sign};

/// Vector `a - b`.
#[inline]
pub fn subtract(a: Point, b: Point) -> Point {
    a - b
}

#[inline]
pub fn dot(a: Point, b: Point) -> f64 {
    a.dot(&b)
}

/// Signed area of the parallelogram spanned by `a` and `b` (z of the 3D cross).
/// Positive for a→b counterclockwise.
#[inline]
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    distance_squared(a, b).sqrt()
}

/// `cross(p1 - p0, p2 - p0)`: positive when p0→p1→p2 turns counterclockwise.
#[inline]
pub fn orientation(p0: Point, p1: Point, p2: Point) -> f64 {
    cross(p1 - p0, p2 - p0)
}

/// Classify the turn p0→p1→p2; `|orientation| < eps` is `Straight`.
#[inline]
pub fn turn(p0: Point, p1: Point, p2: Point, eps: f64) -> Turn {
    match sign(orientation(p0, p1, p2), eps) {
        Ordering::Greater => Turn::Left,
        Ordering::Equal => Turn::Straight,
        Ordering::Less => Turn::Right,
    }
}

/// Bottom-most first, then left-most: y ascending, then x ascending.
#[inline]
pub fn compare_default(a: Point, b: Point) -> Ordering {
    compare_default_eps(a, b, EPS)
}

pub fn compare_default_eps(a: Point, b: Point, eps: f64) -> Ordering {
    if nearly_equal(a.y, b.y, eps) {
        sign(a.x - b.x, eps)
    } else if a.y < b.y {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Angular order of `p` and `q` around `pivot`.
///
/// - `p` and `q` both on the pivot's horizontal line: descending x.
/// - Otherwise by `k = cross(p - pivot, q - pivot)`: `k < 0` puts `p` first,
///   `k > 0` puts `q` first, and `k ≈ 0` (same ray) puts the point nearer to
///   `pivot` first.
///
/// For a bottom-most pivot this walks the upper half-plane clockwise: from the
/// steepest-left ray down to the horizontal ray to the right of the pivot. The
/// reversed tie on the horizontal ray makes that last ray run from far to near,
/// i.e. back towards the pivot.
#[inline]
pub fn compare_pivot_relative(p: Point, q: Point, pivot: Point) -> Ordering {
    compare_pivot_relative_eps(p, q, pivot, EPS)
}

pub fn compare_pivot_relative_eps(p: Point, q: Point, pivot: Point, eps: f64) -> Ordering {
    if nearly_equal(p.y, pivot.y, eps) && nearly_equal(p.y, q.y, eps) {
        return sign(q.x - p.x, eps);
    }
    match sign(cross(p - pivot, q - pivot), eps) {
        Ordering::Equal => sign(distance_squared(p, pivot) - distance_squared(q, pivot), eps),
        o => o,
    }
}
