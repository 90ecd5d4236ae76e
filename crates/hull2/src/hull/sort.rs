//! Angular merge sort around a fixed pivot.

use std::cmp::Ordering;
use std::ops::Range;

use crate::geom2::{compare_pivot_relative_eps, Point, EPS};

/// Sort `points[range]` by `compare_pivot_relative` around `points[0]`.
///
/// - The pivot is `points[0]` of the whole slice, read once before sorting.
/// - Top-down merge sort, stable: on ties the element from the left half wins.
/// - A range reaching past the slice is clamped; ranges of length ≤ 1 are a no-op.
#[inline]
pub fn angular_sort(points: &mut [Point], range: Range<usize>) {
    angular_sort_eps(points, range, EPS);
}

pub fn angular_sort_eps(points: &mut [Point], range: Range<usize>, eps: f64) {
    let Some(&pivot) = points.first() else {
        return;
    };
    let end = range.end.min(points.len());
    let begin = range.start.min(end);
    sort_range(points, begin, end, pivot, eps);
}

fn sort_range(ps: &mut [Point], begin: usize, end: usize, pivot: Point, eps: f64) {
    if end - begin <= 1 {
        return;
    }
    let mid = begin + (end - begin) / 2;
    sort_range(ps, begin, mid, pivot, eps);
    sort_range(ps, mid, end, pivot, eps);
    merge(ps, begin, mid, end, pivot, eps);
}

fn merge(ps: &mut [Point], begin: usize, mid: usize, end: usize, pivot: Point, eps: f64) {
    let mut merged: Vec<Point> = Vec::with_capacity(end - begin);
    let mut i = begin;
    let mut j = mid;
    while i < mid && j < end {
        if compare_pivot_relative_eps(ps[i], ps[j], pivot, eps) != Ordering::Greater {
            merged.push(ps[i]);
            i += 1;
        } else {
            merged.push(ps[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&ps[i..mid]);
    merged.extend_from_slice(&ps[j..end]);
    ps[begin..end].copy_from_slice(&merged);
}
