//! Axis aligned bounding boxes around dots and curve samples.

use nalgebra::Vector2;

/// Smallest axis aligned rectangle containing a set of points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Corner with the lowest coordinates
    pub min: Vector2<f64>,
    /// Corner with the highest coordinates
    pub max: Vector2<f64>,
}

impl BoundingBox {
    /// Computes the box around all points, `None` if there are none.
    pub fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(points: I) -> Option<BoundingBox> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(BoundingBox::from([first, first]), |mut bb, p| {
            bb.include(p);
            bb
        }))
    }

    /// Computes the box around a slice of points, `None` if it is empty.
    pub fn from_slice(points: &[Vector2<f64>]) -> Option<BoundingBox> {
        BoundingBox::from_iter(points.iter().copied())
    }

    /// Grows the box until it contains `point`.
    pub fn include(&mut self, point: Vector2<f64>) {
        self.min = self.min.inf(&point);
        self.max = self.max.sup(&point);
    }

    /// Returns a copy grown by `margin` on every side.
    pub fn expand(&self, margin: f64) -> BoundingBox {
        let margin = Vector2::repeat(margin);
        BoundingBox {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Checks whether `point` lies inside the box or on its border.
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        self.min.x <= point.x && point.x <= self.max.x && self.min.y <= point.y && point.y <= self.max.y
    }

    /// Checks whether two boxes overlap (touching counts).
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersecting_interval::<0>(other) && self.intersecting_interval::<1>(other)
    }

    fn intersecting_interval<const I: usize>(&self, other: &Self) -> bool {
        self.min[I] <= other.max[I] && other.min[I] <= self.max[I]
    }
}

impl From<[Vector2<f64>; 2]> for BoundingBox {
    fn from(array: [Vector2<f64>; 2]) -> Self {
        BoundingBox {
            min: array[0],
            max: array[1],
        }
    }
}

impl From<BoundingBox> for [Vector2<f64>; 2] {
    fn from(bb: BoundingBox) -> Self {
        [bb.min, bb.max]
    }
}
