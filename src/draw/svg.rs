//! Draw a curve in a svg

use crate::draw::DrawCurve;
use nalgebra::Vector2;
use std::fmt::Write;
use std::marker::PhantomData;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This toggles between lower and upper case letters for the path commands
/// and whether points are written as they are or as offsets to their predecessor.
pub trait CoordRepr {
    /// Character to use for the MoveTo command
    const M: &'static str;

    /// Character to use for the LineTo command
    const L: &'static str;

    /// Whether LineTo coordinates are offsets to the previous point
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const M: &'static str = "M";
    const L: &'static str = "L";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const M: &'static str = "m";
    const L: &'static str = "l";
    const RELATIVE: bool = true;
}

/// This type wraps a mutable String reference and implements [`DrawCurve`] on it.
/// The [`DrawCurve::add_curve`] writes the curve to the string
/// using the path commands used in a svg `<path>`'s d attribute
///
/// ```
/// # use nalgebra::Vector2;
/// use tcbspline::draw::DrawCurve;
/// use tcbspline::draw::svg::SVGAbsolutePath;
///
/// let curve = [Vector2::new(0.0, 1.0), Vector2::new(2.0, 3.0)];
/// let mut d = String::new();
/// SVGAbsolutePath::from(&mut d).add_curve(&curve);
/// assert_eq!(d, "M 0,1 L 2,3");
/// ```
pub struct SVGPath<'s, R: CoordRepr>(&'s mut String, PhantomData<&'s R>);

/// Wrapper for writing a curve to a svg's path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing a curve to a svg's path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(string: &'s mut String) -> Self {
        SVGPath(string, PhantomData)
    }
}

impl<'s, R: CoordRepr> DrawCurve for SVGPath<'s, R> {
    fn add_curve(&mut self, curve: &[Vector2<f64>]) {
        let Some((first, rest)) = curve.split_first() else {
            return;
        };

        if !self.0.is_empty() {
            self.0.push(' ');
        }
        let _ = write!(self.0, "{} {},{}", R::M, first.x, first.y);

        let mut previous = first;
        for point in rest {
            let p = if R::RELATIVE {
                point - previous
            } else {
                *point
            };
            let _ = write!(self.0, " {} {},{}", R::L, p.x, p.y);
            previous = point;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dot, Spline, SUBDIVISIONS};

    #[test]
    fn relative_offsets() {
        let curve = [
            Vector2::new(1.0, 1.0),
            Vector2::new(3.0, 2.0),
            Vector2::new(3.0, 5.0),
        ];
        let mut d = String::new();
        SVGRelativePath::from(&mut d).add_curve(&curve);
        assert_eq!(d, "m 1,1 l 2,1 l 0,3");
    }

    #[test]
    fn empty_curve_writes_nothing() {
        let mut d = String::new();
        SVGAbsolutePath::from(&mut d).add_curve(&[]);
        assert!(d.is_empty());
    }

    #[test]
    fn one_line_per_sample() {
        let mut spline: Spline = [Dot::new(0.0, 0.0), Dot::new(10.0, 0.0)]
            .into_iter()
            .collect();
        let mut d = String::new();
        SVGAbsolutePath::from(&mut d).add_spline(&mut spline);
        assert!(d.starts_with("M 0,0 L "));
        assert!(d.ends_with(" L 10,0"));
        assert_eq!(d.matches(" L ").count(), SUBDIVISIONS);
    }
}
