//! Point type, tolerance configuration, and turn classification.

use nalgebra::Vector2;

/// Absolute tolerance shared by all predicates unless a `GeomCfg` overrides it.
pub const EPS: f64 = 1e-9;

/// A point (or free vector) in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Two scalars closer than `eps` compare equal; cross products within `eps`
    /// count as collinear.
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    Straight,
    /// Clockwise.
    Right,
}
