//! Planar convex hulls (Graham scan) and the predicates they rest on.
//!
//! Layout
//! - `geom2`: point type, eps-aware predicates, comparators, polygon centroid/area.
//! - `hull`: angular merge sort around a pivot and the Graham scan itself.
//! - `io`: whitespace tokenizer and point-cloud readers for text input.
//! - `error`: error enums shared by the modules above.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; every tie is decided with one absolute
//!   tolerance (`EPS = 1e-9` unless a `GeomCfg` says otherwise).
//! - Hull output is counter-clockwise and starts at the pivot (bottom-most, then
//!   left-most input point). Inputs are never mutated.

pub mod error;
pub mod geom2;
pub mod hull;
pub mod io;

pub use error::{GeomError, ReadError};
pub use geom2::{GeomCfg, Point, EPS};
pub use hull::{graham_scan, graham_scan_cfg, Collinear};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, ReadError};
    pub use crate::geom2::{
        area, centroid, compare_default, compare_pivot_relative, cross, distance,
        distance_squared, dot, signed_area, subtract, GeomCfg, Point, Turn, EPS,
    };
    pub use crate::hull::{angular_sort, graham_scan, graham_scan_cfg, Collinear};
    pub use crate::io::{read_point_cloud, read_points, TokenReader, TokenSource};
}
