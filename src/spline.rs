//! The spline itself: an ordered list of dots and the polyline interpolated through them.

use log::debug;
use nalgebra::Vector2;

use crate::bounding_box::BoundingBox;
use crate::dot::Dot;
use crate::error::IndexError;
use crate::hermite::HermiteSegment;

/// Number of samples every segment between two consecutive dots is split into.
pub const SUBDIVISIONS: usize = 30;

/// Kochanek-Bartels spline through an ordered list of [`Dot`]s.
///
/// The interpolated curve is computed lazily: every mutation only marks it as stale
/// and the next call to [`Spline::curve`] recomputes it.
///
/// Cloning produces a fully independent copy, which is what [`History`](crate::History)
/// relies on for its snapshots.
#[derive(Clone, Debug, Default)]
pub struct Spline {
    dots: Vec<Dot>,
    curve: Vec<Vector2<f64>>,
    dirty: bool,
}

impl Spline {
    /// Creates an empty spline.
    pub fn new() -> Self {
        Spline::default()
    }

    /// Creates a spline from a list of dots.
    pub fn from_dots(dots: Vec<Dot>) -> Self {
        Spline {
            dots,
            curve: Vec::new(),
            dirty: true,
        }
    }

    /// Appends a dot to the end of the spline.
    pub fn add(&mut self, dot: Dot) {
        self.dots.push(dot);
        self.dirty = true;
    }

    /// Inserts a dot before `index`.
    ///
    /// `index` may equal [`len`](Spline::len) to append.
    pub fn insert(&mut self, index: usize, dot: Dot) -> Result<(), IndexError> {
        if index > self.dots.len() {
            return Err(self.index_error(index));
        }
        self.dots.insert(index, dot);
        self.dirty = true;
        Ok(())
    }

    /// Overwrites the dot at `index`.
    pub fn replace(&mut self, index: usize, dot: Dot) -> Result<(), IndexError> {
        let len = self.dots.len();
        let slot = self
            .dots
            .get_mut(index)
            .ok_or(IndexError { index, len })?;
        *slot = dot;
        self.dirty = true;
        Ok(())
    }

    /// Removes and returns the dot at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Dot, IndexError> {
        if index >= self.dots.len() {
            return Err(self.index_error(index));
        }
        self.dirty = true;
        Ok(self.dots.remove(index))
    }

    fn index_error(&self, index: usize) -> IndexError {
        IndexError {
            index,
            len: self.dots.len(),
        }
    }

    /// Number of dots
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Checks whether the spline has no dots at all.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Get the dot at `index`.
    pub fn dot(&self, index: usize) -> Option<&Dot> {
        self.dots.get(index)
    }

    /// Get all dots in order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Finds the dot closest to `position` and returns its index and distance.
    ///
    /// Distances are measured in the manhattan metric (`|dx| + |dy|`).
    /// On ties the dot with the lowest index wins.
    /// Dots at a NaN distance only win if no dot has a comparable distance,
    /// in which case the first dot is returned.
    /// Returns `None` only if the spline is empty.
    pub fn find_closest(&self, position: Vector2<f64>) -> Option<(usize, f64)> {
        self.dots
            .iter()
            .map(|dot| dot.manhattan_distance(&position))
            .enumerate()
            .fold(None, |closest, (i, distance)| match closest {
                Some((_, best)) if distance < best || (best.is_nan() && !distance.is_nan()) => {
                    Some((i, distance))
                }
                Some(_) => closest,
                None => Some((i, distance)),
            })
    }

    /// Get the interpolated curve, recomputing it if any dot changed since the last call.
    pub fn curve(&mut self) -> &[Vector2<f64>] {
        if self.dirty {
            Spline::interpolate_into(&mut self.curve, &self.dots);
            self.dirty = false;
            debug!(
                "Recomputed curve: {} dots -> {} samples",
                self.dots.len(),
                self.curve.len()
            );
        }
        &self.curve
    }

    /// Checks whether the cached curve is stale.
    ///
    /// The next call to [`curve`](Spline::curve) will recompute it if this is `true`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Computes the box around all dots and curve samples.
    pub fn bounding_box(&mut self) -> Option<BoundingBox> {
        let dots = self.dots.iter().map(|dot| dot.position).collect::<Vec<_>>();
        BoundingBox::from_iter(dots.into_iter().chain(self.curve().iter().copied()))
    }

    /// Interpolates a polyline through `dots`.
    ///
    /// Every pair of consecutive dots contributes [`SUBDIVISIONS`] samples, the last dot is
    /// appended once at the very end. Fewer than two dots produce an empty curve.
    pub fn interpolate(dots: &[Dot]) -> Vec<Vector2<f64>> {
        let mut curve = Vec::new();
        Spline::interpolate_into(&mut curve, dots);
        curve
    }

    /// Same as [`interpolate`](Spline::interpolate) but reuses `curve`'s allocation.
    pub fn interpolate_into(curve: &mut Vec<Vector2<f64>>, dots: &[Dot]) {
        curve.clear();

        let last = match dots {
            [] | [_] => return,
            [.., last] => last,
        };

        curve.reserve((dots.len() - 1) * SUBDIVISIONS + 1);

        for k in 0..dots.len() - 1 {
            // The end points act as their own neighbours
            let prev = &dots[k.saturating_sub(1)];
            let cur = &dots[k];
            let next = &dots[k + 1];
            let next2 = dots.get(k + 2).unwrap_or(next);

            HermiteSegment::tcb(prev, cur, next, next2).sample_into(SUBDIVISIONS, curve);
        }

        curve.push(last.position);
    }
}

impl PartialEq for Spline {
    /// Two splines are equal if their dots are, the curve cache doesn't matter.
    fn eq(&self, other: &Self) -> bool {
        self.dots == other.dots
    }
}

impl FromIterator<Dot> for Spline {
    fn from_iter<I: IntoIterator<Item = Dot>>(iter: I) -> Self {
        Spline::from_dots(iter.into_iter().collect())
    }
}

impl Extend<Dot> for Spline {
    fn extend<I: IntoIterator<Item = Dot>>(&mut self, iter: I) {
        self.dots.extend(iter);
        self.dirty = true;
    }
}
