pub mod samples;
pub mod spline;
