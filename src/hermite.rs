//! Cubic Hermite segments and the Kochanek-Bartels tangents driving them.
//!
//! A Hermite segment is fully described by its two end points and the tangents at those points.
//! TCB splines only differ from other cardinal splines in how the tangents are chosen:
//! every dot's tension, bias and continuity reshape the tangents around it.

use nalgebra::{Matrix2x4, Vector2, Vector4};
use num::Float;

use crate::dot::Dot;

/// Evaluates the four cubic Hermite basis functions at `u`.
///
/// The result is ordered `[h00, h10, h01, h11]` which are the weights for
/// start point, start tangent, end point and end tangent respectively.
pub fn hermite_basis<T: Float>(u: T) -> [T; 4] {
    let one = T::one();
    let two = one + one;
    let three = two + one;

    let u2 = u * u;
    let u3 = u2 * u;
    [
        two * u3 - three * u2 + one,
        u3 - two * u2 + u,
        three * u2 - two * u3,
        u3 - u2,
    ]
}

/// Tangent leaving `cur` towards `next`, shaped by `cur`'s parameters.
///
/// `prev` is the dot before `cur`; pass `cur` itself at the start of a spline.
pub fn outgoing_tangent(prev: &Dot, cur: &Dot, next: &Dot) -> Vector2<f64> {
    let (scale, incoming, outgoing) = tcb_weights(cur);
    ((cur.position - prev.position) * (incoming * (1.0 - f64::from(cur.continuity)))
        + (next.position - cur.position) * (outgoing * (1.0 + f64::from(cur.continuity))))
        * scale
}

/// Tangent arriving at `next` from `cur`, shaped by `next`'s parameters.
///
/// `next2` is the dot after `next`; pass `next` itself at the end of a spline.
pub fn incoming_tangent(cur: &Dot, next: &Dot, next2: &Dot) -> Vector2<f64> {
    let (scale, incoming, outgoing) = tcb_weights(next);
    ((next.position - cur.position) * (incoming * (1.0 + f64::from(next.continuity)))
        + (next2.position - next.position) * (outgoing * (1.0 - f64::from(next.continuity))))
        * scale
}

/// Splits a dot's parameters into the overall tangent scale `0.5 (1 - t)`
/// and the bias weights `(1 + b)` and `(1 - b)`.
fn tcb_weights(dot: &Dot) -> (f64, f64, f64) {
    let tension = f64::from(dot.tension);
    let bias = f64::from(dot.bias);
    (0.5 * (1.0 - tension), 1.0 + bias, 1.0 - bias)
}

/// A single cubic Hermite segment.
///
/// The matrix' columns are start point, start tangent, end point and end tangent,
/// matching the order returned by [`hermite_basis`].
#[derive(Clone, Debug, PartialEq)]
pub struct HermiteSegment(pub Matrix2x4<f64>);

impl HermiteSegment {
    /// Builds a segment from its end points and tangents.
    pub fn new(
        start: Vector2<f64>,
        start_tangent: Vector2<f64>,
        end: Vector2<f64>,
        end_tangent: Vector2<f64>,
    ) -> Self {
        HermiteSegment(Matrix2x4::from_columns(&[
            start,
            start_tangent,
            end,
            end_tangent,
        ]))
    }

    /// Builds the Kochanek-Bartels segment running from `cur` to `next`.
    ///
    /// `prev` and `next2` are the neighbouring dots used to derive the tangents.
    pub fn tcb(prev: &Dot, cur: &Dot, next: &Dot, next2: &Dot) -> Self {
        HermiteSegment::new(
            cur.position,
            outgoing_tangent(prev, cur, next),
            next.position,
            incoming_tangent(cur, next, next2),
        )
    }

    /// Get the point on the segment at position `u`.
    ///
    /// This method assumes `u` to be between 0 and 1 but doesn't check it.
    pub fn evaluate(&self, u: f64) -> Vector2<f64> {
        self.0 * Vector4::from(hermite_basis(u))
    }

    /// Appends `subdivisions` evenly spaced samples for `u` in `[0, 1)` to `out`.
    ///
    /// The end point itself (`u = 1`) is left out so consecutive segments don't repeat it.
    pub fn sample_into(&self, subdivisions: usize, out: &mut Vec<Vector2<f64>>) {
        let step = 1.0 / subdivisions as f64;
        out.extend((0..subdivisions).map(|i| self.evaluate(i as f64 * step)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn basis_partitions_endpoints() {
        assert_eq!(hermite_basis(0.0f64), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(hermite_basis(1.0f64), [0.0, 0.0, 1.0, 0.0]);

        // h00 + h01 is always one
        for i in 0..=10 {
            let [h00, _, h01, _] = hermite_basis(i as f32 / 10.0);
            assert_relative_eq!(h00 + h01, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_parameters_give_catmull_rom_tangents() {
        let prev = Dot::new(0.0, 0.0);
        let cur = Dot::new(1.0, 1.0);
        let next = Dot::new(3.0, 1.0);
        assert_relative_eq!(
            outgoing_tangent(&prev, &cur, &next),
            (next.position - prev.position) * 0.5
        );
    }

    #[test]
    fn full_tension_collapses_tangents() {
        let prev = Dot::new(0.0, 0.0);
        let cur = Dot::with_params(1.0, 1.0, 1.0, 0.3, -0.2);
        let next = Dot::with_params(3.0, 1.0, 1.0, 0.0, 0.0);
        assert_relative_eq!(outgoing_tangent(&prev, &cur, &next), Vector2::zeros());
        assert_relative_eq!(incoming_tangent(&cur, &next, &next), Vector2::zeros());
    }

    #[test]
    fn full_bias_only_looks_back() {
        let prev = Dot::new(0.0, 0.0);
        let cur = Dot::with_params(1.0, 0.0, 0.0, 1.0, 0.0);
        let next = Dot::new(1.0, 5.0);
        // (1 + b) = 2 on the incoming chord, (1 - b) = 0 on the outgoing one
        assert_relative_eq!(outgoing_tangent(&prev, &cur, &next), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn segment_hits_its_endpoints() {
        let a = Dot::new(-1.0, 2.0);
        let b = Dot::with_params(4.0, 7.0, 0.2, -0.4, 0.6);
        let segment = HermiteSegment::tcb(&a, &a, &b, &b);
        assert_relative_eq!(segment.evaluate(0.0), a.position);
        assert_relative_eq!(segment.evaluate(1.0), b.position, epsilon = 1e-12);
    }

    #[test]
    fn sampling_leaves_out_the_end() {
        let segment = HermiteSegment::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 0.0),
        );
        let mut out = Vec::new();
        segment.sample_into(4, &mut out);
        assert_eq!(out.len(), 4);
        assert_relative_eq!(out[0], Vector2::new(0.0, 0.0));
        // Tangents equal to the chord make this a linear parametrisation
        assert_relative_eq!(out[2], Vector2::new(0.5, 0.0), epsilon = 1e-12);
        assert!(out[3].x < 1.0);
    }
}
