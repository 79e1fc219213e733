//! Small library to render splines as standalone svg documents.
//!
//! Only used by the command line tool and not exposed.

use nalgebra::Vector2;
use std::fmt::{Display, Formatter};
use tcbspline::bounding_box::BoundingBox;
use tcbspline::draw::svg::SVGAbsolutePath;
use tcbspline::draw::DrawCurve;

pub struct SVG {
    pub view_box: BoundingBox,
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.min.x,
            self.view_box.min.y,
            self.view_box.width(),
            self.view_box.height()
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub color: String,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            self.center[0], self.center[1], self.radius, self.color
        )
    }
}

/// A `<path>` whose `d` attribute is filled through [`DrawCurve`].
pub struct Path {
    pub stroke_color: String,
    pub fill_color: String,
    pub width: f64,
    pub d: String,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            stroke_color: "black".to_owned(),
            fill_color: "none".to_owned(),
            width: 1.0,
            d: String::new(),
        }
    }
}

impl DrawCurve for Path {
    fn add_curve(&mut self, curve: &[Vector2<f64>]) {
        SVGAbsolutePath::from(&mut self.d).add_curve(curve);
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<path stroke=\"{}\" fill=\"{}\" stroke-width=\"{}\" d=\"{}\"/>",
            self.stroke_color, self.fill_color, self.width, self.d
        )
    }
}
