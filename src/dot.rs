//! Control points of a spline.

use nalgebra::Vector2;

/// A control point ("dot") the curve passes through.
///
/// Besides its position every dot carries the three Kochanek-Bartels shape parameters.
/// All of them default to `0.0` which yields a plain Catmull-Rom like curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dot {
    /// Position in the plane
    pub position: Vector2<f64>,

    /// How sharply the curve bends at this dot
    ///
    /// `1.0` collapses the tangent to zero, negative values round the curve out.
    pub tension: f32,

    /// Skews the tangent towards the incoming (`> 0`) or outgoing (`< 0`) segment
    pub bias: f32,

    /// Breaks the tangent's continuity
    ///
    /// `0.0` is smooth, anything else produces a corner-like kink.
    pub continuity: f32,
}

impl Dot {
    /// Creates a dot at `(x, y)` with all shape parameters set to zero.
    pub fn new(x: f64, y: f64) -> Self {
        Dot::at(Vector2::new(x, y))
    }

    /// Creates a dot at `position` with all shape parameters set to zero.
    pub fn at(position: Vector2<f64>) -> Self {
        Dot {
            position,
            tension: 0.0,
            bias: 0.0,
            continuity: 0.0,
        }
    }

    /// Creates a dot with explicit shape parameters.
    pub fn with_params(x: f64, y: f64, tension: f32, bias: f32, continuity: f32) -> Self {
        Dot {
            position: Vector2::new(x, y),
            tension,
            bias,
            continuity,
        }
    }

    /// The dot's x coordinate
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// The dot's y coordinate
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns a copy of this dot moved to `position`, keeping its shape parameters.
    pub fn moved_to(&self, position: Vector2<f64>) -> Self {
        Dot { position, ..*self }
    }

    /// Manhattan distance (`|dx| + |dy|`) between this dot and `point`.
    pub fn manhattan_distance(&self, point: &Vector2<f64>) -> f64 {
        (point - self.position).abs().sum()
    }
}

impl Default for Dot {
    fn default() -> Self {
        Dot::at(Vector2::zeros())
    }
}

/* Conversions from positions */
impl From<Vector2<f64>> for Dot {
    fn from(position: Vector2<f64>) -> Self {
        Dot::at(position)
    }
}
impl From<(f64, f64)> for Dot {
    fn from(p: (f64, f64)) -> Self {
        Dot::new(p.0, p.1)
    }
}
impl From<Dot> for Vector2<f64> {
    fn from(dot: Dot) -> Self {
        dot.position
    }
}
