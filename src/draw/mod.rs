//! Defines and implements the helper method [`DrawCurve::add_curve`] on various drawing contexts.
//!
//! Turning a spline's sampled curve into something a drawing context understands
//! is never really an issue. But it is noisy and repetitive.
use nalgebra::Vector2;

use crate::spline::Spline;

/// Draw sampled curves on different "drawing contexts" with ease.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw curves using svg paths
pub trait DrawCurve {
    /// Add a polyline to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// But generally this just prepares the curve to be drawn instead of actually drawing it.
    fn add_curve(&mut self, curve: &[Vector2<f64>]);

    /// Add a spline's interpolated curve to the drawing context.
    fn add_spline(&mut self, spline: &mut Spline) {
        self.add_curve(spline.curve());
    }
}

#[cfg(feature = "draw-svg")]
pub mod svg;
