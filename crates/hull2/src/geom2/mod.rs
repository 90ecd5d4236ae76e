//! Planar points and eps-aware predicates.
//!
//! Purpose
//! - One point type (`Point = Vector2<f64>`) plus the handful of predicates the
//!   Graham scan needs: subtraction, dot/cross, (squared) distance, and two
//!   comparators (pivot selection and angular order around a pivot).
//! - Polygon helpers (signed area, area, centroid) for ordered vertex lists such
//!   as hull output.
//!
//! Tolerance
//! - Every tie goes through `util::{nearly_equal, sign}` with a single absolute
//!   eps. The `_eps` variants thread a caller-chosen `GeomCfg::eps`; callers
//!   must pass the same value to every predicate of one computation.
//!
//! Code cross-refs: `hull::{angular_sort, graham_scan}`

mod polygon;
mod predicates;
mod types;
mod util;

pub use polygon::{area, centroid, centroid_eps, signed_area};
pub use predicates::{
    compare_default, compare_default_eps, compare_pivot_relative, compare_pivot_relative_eps,
    cross, distance, distance_squared, dot, orientation, subtract, turn,
};
pub use types::{GeomCfg, Point, Turn, EPS};
pub use util::{first_non_finite, nearly_equal, points_nearly_equal, sign};
