#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod dot;
pub mod draw;
pub mod editor;
pub mod error;
pub mod format;
pub mod hermite;
pub mod history;
pub mod spline;

pub use crate::dot::Dot;
pub use crate::editor::{Editor, EditorEvent};
pub use crate::error::{Error, FormatError, IndexError, Result};
pub use crate::history::History;
pub use crate::spline::{Spline, SUBDIVISIONS};

#[cfg(test)]
mod tests {
    use crate::{format, Dot, History, Spline, SUBDIVISIONS};
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    /// Points generated randomly
    /// ```python
    /// from random import random
    /// for i in range(10):
    ///     print(f"({(random()-0.5)*i}, {(random()-0.5)*i})")
    /// ```
    const POINTS: [(f64, f64); 10] = [
        (0.0, 0.0),
        (-0.29734, 0.44984),
        (-0.52560, 0.42885),
        (1.42777, -0.02652),
        (1.98032, -0.67824),
        (0.44863, -0.91328),
        (-2.51139, -0.79100),
        (-3.10479, -0.59318),
        (-1.16022, -2.95591),
        (-1.07946, 0.78888),
    ];

    fn shaped(i: usize) -> Dot {
        let (x, y) = POINTS[i];
        let k = i as f32 / 10.0;
        Dot::with_params(x, y, k - 0.5, 0.5 - k, k * k - 0.3)
    }

    fn random_spline() -> Spline {
        (0..POINTS.len()).map(shaped).collect()
    }

    #[test]
    fn straight_line() {
        let mut spline = Spline::new();
        spline.add(Dot::with_params(0.0, 0.0, 0.0, 0.0, 0.0));
        spline.add(Dot::with_params(10.0, 0.0, 0.0, 0.0, 0.0));

        let curve = spline.curve();
        assert_eq!(curve.len(), 31);
        assert_eq!(curve[0], Vector2::new(0.0, 0.0));
        assert_eq!(curve[30], Vector2::new(10.0, 0.0));
        for p in curve {
            assert_eq!(p.y, 0.0);
        }
        for pair in curve.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn sample_count() {
        for n in 0..POINTS.len() {
            let mut spline: Spline = (0..n).map(shaped).collect();
            let expected = if n < 2 { 0 } else { (n - 1) * SUBDIVISIONS + 1 };
            assert_eq!(spline.curve().len(), expected, "{} dots", n);
        }
    }

    #[test]
    fn curve_is_cached() {
        let mut spline = random_spline();
        assert!(spline.is_dirty());
        let first = spline.curve().to_vec();
        assert!(!spline.is_dirty());
        let second = spline.curve().to_vec();
        assert!(!spline.is_dirty());
        assert_eq!(first, second);
    }

    #[test]
    fn mutations_invalidate_curve() {
        let mut spline = random_spline();
        spline.curve();

        spline.add(Dot::new(4.0, 4.0));
        let expected = Spline::interpolate(spline.dots());
        assert_eq!(spline.curve(), expected.as_slice());

        spline.insert(3, Dot::with_params(0.5, 0.5, 0.2, 0.2, 0.2)).unwrap();
        assert!(spline.is_dirty());
        let expected = Spline::interpolate(spline.dots());
        assert_eq!(spline.curve(), expected.as_slice());

        spline.replace(0, Dot::new(-9.0, 9.0)).unwrap();
        assert!(spline.is_dirty());
        assert_eq!(spline.curve()[0], Vector2::new(-9.0, 9.0));

        spline.remove(spline.len() - 1).unwrap();
        assert!(spline.is_dirty());
        let last = spline.dots()[spline.len() - 1].position;
        assert_eq!(spline.curve().last(), Some(&last));
    }

    #[test]
    fn closest_is_minimal() {
        let spline = random_spline();
        for i in -10..=10 {
            for j in -10..=10 {
                let query = Vector2::new(i as f64 * 0.4, j as f64 * 0.3);
                let (index, distance) = spline.find_closest(query).unwrap();
                assert_relative_eq!(distance, spline.dots()[index].manhattan_distance(&query));
                for (k, dot) in spline.dots().iter().enumerate() {
                    let other = dot.manhattan_distance(&query);
                    assert!(distance <= other);
                    if k < index {
                        assert!(distance < other);
                    }
                }
            }
        }
    }

    #[test]
    fn undo_redo_restores_state() {
        let mut history = History::new();
        let mut spline = random_spline();

        history.push(spline.clone());
        spline.remove(4).unwrap();
        history.push(spline.clone());
        spline.replace(0, Dot::new(1.0, 1.0)).unwrap();

        let live = spline.clone();
        assert!(history.undo(&mut spline));
        assert!(history.redo(&mut spline));
        assert_eq!(spline, live);
        assert_eq!(spline.curve(), Spline::interpolate(live.dots()).as_slice());
    }

    #[test]
    fn snapshots_are_independent() {
        let mut history = History::new();
        let mut spline = random_spline();
        history.push(spline.clone());
        for i in 0..5 {
            spline.replace(i, Dot::new(0.0, 0.0)).unwrap();
        }
        assert!(history.undo(&mut spline));
        assert_eq!(spline, random_spline());
    }

    #[test]
    fn save_load_round_trip() {
        let mut spline = random_spline();
        let text = format::to_string(&spline);
        let mut loaded = format::parse(&text).unwrap();
        assert_eq!(loaded, spline);
        assert_eq!(loaded.curve(), spline.curve());
    }
}
