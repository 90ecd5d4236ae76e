//! Graham scan convex hull in the plane.
//!
//! Pipeline
//! - Reject non-finite coordinates, copy the input into an owned buffer, and
//!   drop exact and adjacent near-duplicates (caller data is never reordered).
//! - Pivot = smallest point under `compare_default` (bottom-most, then
//!   left-most), swapped to index 0; every other point within eps of it is
//!   dropped. Remaining near-duplicates merge within their ray or in the sweep.
//! - `angular_sort` of `[1, n)` around the pivot. The comparator walks the
//!   upper half-plane clockwise, so the sweep below builds a clockwise chain.
//! - If the first and last sorted points lie on one line through the pivot,
//!   every point does: return the segment (or the full line walk).
//! - Otherwise compact same-ray runs and sweep with a stack, then reverse the
//!   chain so callers get counter-clockwise output starting at the pivot.
//!
//! Collinear policy
//! - `Collinear::Drop`: vertices only; no three consecutive outputs are collinear.
//! - `Collinear::Keep`: every input point on the boundary, in walk order.
//!
//! Code cross-refs: `geom2::{compare_default, compare_pivot_relative}`, `sort`, `scan`

mod scan;
mod sort;

pub use sort::{angular_sort, angular_sort_eps};

use std::cmp::Ordering;

use crate::error::{GeomError, Result};
use crate::geom2::{
    compare_default_eps, cross, distance_squared, first_non_finite, nearly_equal,
    points_nearly_equal, GeomCfg, Point,
};

/// Boundary policy for points lying on a hull edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Collinear {
    /// Keep only the corners.
    #[default]
    Drop,
    /// Keep every point on the boundary.
    Keep,
}

impl From<bool> for Collinear {
    /// `true` ↦ `Keep` (the "keep collinear" flag).
    fn from(keep: bool) -> Self {
        if keep {
            Collinear::Keep
        } else {
            Collinear::Drop
        }
    }
}

/// Convex hull with the default tolerance. See `graham_scan_cfg`.
#[inline]
pub fn graham_scan(points: &[Point], policy: Collinear) -> Result<Vec<Point>> {
    graham_scan_cfg(points, policy, GeomCfg::default())
}

/// Convex hull of `points`, counter-clockwise, starting at the pivot.
///
/// Degenerate inputs are answers, not errors:
/// - empty input → empty hull; one distinct point → that point;
/// - all points on one line → the two extremes (`Drop`) or every point ordered
///   from the pivot end to the far end (`Keep`). Two points land here too.
///
/// Errors
/// - `GeomError::NonFinite` if any coordinate is NaN or infinite.
pub fn graham_scan_cfg(points: &[Point], policy: Collinear, cfg: GeomCfg) -> Result<Vec<Point>> {
    if let Some(index) = first_non_finite(points) {
        return Err(GeomError::NonFinite { index });
    }
    let eps = cfg.eps;
    let mut ps = dedup_points(points, eps);
    let n = ps.len();
    tracing::debug!(input = points.len(), distinct = n, ?policy, "graham_scan");
    if n <= 1 {
        return Ok(ps);
    }

    let pivot_idx = (1..n).fold(0, |best, i| {
        if compare_default_eps(ps[i], ps[best], eps) == Ordering::Less {
            i
        } else {
            best
        }
    });
    ps.swap(0, pivot_idx);
    let pivot = ps[0];
    let mut rest = ps.split_off(1);
    rest.retain(|q| !points_nearly_equal(*q, pivot, eps));
    ps.extend(rest);
    let n = ps.len();
    if n == 1 {
        return Ok(ps);
    }
    angular_sort_eps(&mut ps, 1..n, eps);

    if nearly_equal(cross(ps[n - 1] - pivot, ps[1] - pivot), 0.0, eps) {
        tracing::debug!(n, "all points collinear; skipping sweep");
        return Ok(line_walk(&ps, policy, eps));
    }

    let run = scan::compact_rays(&ps, policy, eps);
    let mut hull = scan::sweep(&run, policy, eps);
    hull[1..].reverse();
    tracing::trace!(vertices = hull.len(), "graham_scan done");
    Ok(hull)
}

/// Copy of `points` with near-duplicates (both coordinates within `eps`) removed
/// when they are neighbours in (y, x) order. Non-adjacent copies are handled by
/// the pivot filter and the per-ray merge.
fn dedup_points(points: &[Point], eps: f64) -> Vec<Point> {
    let mut ps = points.to_vec();
    ps.sort_by(|a, b| a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x)));
    ps.dedup_by(|a, b| points_nearly_equal(*a, *b, eps));
    ps
}

/// Hull of an angularly sorted, fully collinear buffer (`ps[0]` is the pivot).
///
/// The pivot is one end of the segment. The sort puts the far end first when the
/// line is the pivot's horizontal (descending x) and last otherwise, so the
/// distances of `ps[1]` and `ps[n-1]` decide the walk direction.
fn line_walk(ps: &[Point], policy: Collinear, eps: f64) -> Vec<Point> {
    let n = ps.len();
    let pivot = ps[0];
    let far_first = distance_squared(pivot, ps[1]) >= distance_squared(pivot, ps[n - 1]) + eps;
    match policy {
        Collinear::Drop => {
            let far = if far_first { ps[1] } else { ps[n - 1] };
            vec![pivot, far]
        }
        Collinear::Keep => {
            let mut out = Vec::with_capacity(n);
            out.push(pivot);
            if far_first {
                out.extend(ps[1..].iter().rev());
            } else {
                out.extend_from_slice(&ps[1..]);
            }
            out
        }
    }
}
