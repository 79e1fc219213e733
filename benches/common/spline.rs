use criterion::{black_box, Criterion};
use nalgebra::Vector2;
use tcbspline::{History, Spline};
use crate::common::samples::SPLINES;

pub fn interpolate(c: &mut Criterion) {
    c.bench_function("interpolate", |b| {
        for spline in SPLINES.iter() {
            b.iter(|| black_box(Spline::interpolate(spline.dots())))
        }
    });
}

pub fn find_closest(c: &mut Criterion) {
    c.bench_function("find_closest", |b| {
        for spline in SPLINES.iter() {
            b.iter(|| black_box(spline.find_closest(Vector2::new(0.5, -0.5))))
        }
    });
}

pub fn history(c: &mut Criterion) {
    c.bench_function("history", |b| {
        for spline in SPLINES.LONG.iter() {
            b.iter(|| {
                let mut history = History::new();
                let mut live = spline.clone();
                history.push(live.clone());
                history.undo(&mut live);
                history.redo(&mut live);
                black_box(live)
            })
        }
    });
}

pub fn all(c: &mut Criterion) {
    interpolate(c);
    find_closest(c);
    history(c);
}
