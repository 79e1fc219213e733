use once_cell::sync::Lazy;
use tcbspline::{Dot, Spline};

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Dot::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 0.0,      0.0    ),
    (-0.29734,  0.44984),
    (-0.52560,  0.42885),
    ( 1.42777, -0.02652),
    ( 1.98032, -0.67824),
    ( 0.44863, -0.91328),
    (-2.51139, -0.79100),
    (-3.10479, -0.59318),
    (-1.16022, -2.95591),
    (-1.07946,  0.78888),
];

pub static SPLINES: Lazy<Splines> = Lazy::new(Splines::new);
#[allow(non_snake_case)]
pub struct Splines {
    pub SHORT: Vec<Spline>,
    pub LONG: Vec<Spline>,
    pub SHAPED: Vec<Spline>,
}
impl Splines {
    pub fn new() -> Splines {
        Splines {
            SHORT:  vec![
                spline([0, 1]),
                spline([2, 3, 4]),
                spline([5, 6, 7, 8]),
            ],
            LONG:   vec![
                spline((0..100).map(|i| i % 10)),
                spline((0..1000).map(|i| (i * 7) % 10)),
            ],
            SHAPED: vec![
                shaped([0, 4, 2, 6, 8]),
                shaped([1, 5, 3, 7, 9]),
                shaped([2, 6, 4, 8, 0]),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&Spline> {
        self.SHORT.iter()
            .chain(self.LONG.iter())
            .chain(self.SHAPED.iter())
    }
}

fn spline(indices: impl IntoIterator<Item=usize>) -> Spline {
    indices.into_iter().map(|i| Dot::from(POINTS[i])).collect()
}

fn shaped(indices: impl IntoIterator<Item=usize>) -> Spline {
    indices.into_iter()
        .map(|i| {
            let (x, y) = POINTS[i];
            let k = i as f32 / 10.0;
            Dot::with_params(x, y, k - 0.5, 0.5 - k, k * k - 0.3)
        })
        .collect()
}
