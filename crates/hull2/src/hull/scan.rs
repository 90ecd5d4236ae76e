//! Same-ray compaction and the stack sweep.
//!
//! Input to both steps is an angularly sorted buffer with the pivot at index 0
//! and at least two distinct rays (the collinear case is handled earlier).

use std::cmp::Ordering;

use super::Collinear;
use crate::geom2::{cross, distance_squared, points_nearly_equal, sign, Point};

/// Collapse runs of points that share a ray from the pivot.
///
/// - `Drop`: keep only the farthest point of every ray.
/// - `Keep`: keep every point; the first ray runs near→far and the last ray
///   far→near so the chain leaves and re-enters the pivot along its edges.
///   Interior rays are left as sorted; the sweep discards their inner points.
///   Points of one ray within `eps` of each other are merged (first one wins).
pub(super) fn compact_rays(ps: &[Point], policy: Collinear, eps: f64) -> Vec<Point> {
    let pivot = ps[0];
    let d2 = |q: &Point| distance_squared(*q, pivot);
    let mut rays = split_rays(&ps[1..], pivot, eps);
    let mut out = Vec::with_capacity(ps.len());
    out.push(pivot);
    match policy {
        Collinear::Drop => {
            for ray in &rays {
                let far = ray.iter().copied().max_by(|a, b| d2(a).total_cmp(&d2(b)));
                out.extend(far);
            }
        }
        Collinear::Keep => {
            let last = rays.len() - 1;
            rays[0].sort_by(|a, b| d2(a).total_cmp(&d2(b)));
            rays[last].sort_by(|a, b| d2(b).total_cmp(&d2(a)));
            for ray in &mut rays {
                ray.dedup_by(|a, b| points_nearly_equal(*a, *b, eps));
            }
            for ray in rays {
                out.extend(ray);
            }
        }
    }
    out
}

/// Group consecutive points lying on one ray through `pivot`.
///
/// All points sit in the closed upper half-plane of a bottom-most pivot (minus
/// the left horizontal), so a vanishing cross product means the same direction.
fn split_rays(sorted: &[Point], pivot: Point, eps: f64) -> Vec<Vec<Point>> {
    let mut rays: Vec<Vec<Point>> = Vec::new();
    for &p in sorted {
        if let Some(ray) = rays.last_mut() {
            if sign(cross(ray[0] - pivot, p - pivot), eps) == Ordering::Equal {
                ray.push(p);
                continue;
            }
        }
        rays.push(vec![p]);
    }
    rays
}

/// Stack sweep over a compacted chain (pivot first), producing a clockwise hull.
///
/// The top is popped while the candidate does not make a clockwise turn:
/// `cross <= -eps` stops, `|cross| < eps` stops only under `Keep`. A candidate
/// within `eps` of the top is skipped.
pub(super) fn sweep(run: &[Point], policy: Collinear, eps: f64) -> Vec<Point> {
    let mut stack: Vec<Point> = Vec::with_capacity(run.len());
    for &p in run {
        if stack.last().is_some_and(|&top| points_nearly_equal(top, p, eps)) {
            continue;
        }
        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            match sign(cross(top - below, p - below), eps) {
                Ordering::Less => break,
                Ordering::Equal if policy == Collinear::Keep => break,
                _ => {
                    stack.pop();
                }
            }
        }
        stack.push(p);
    }
    stack
}
