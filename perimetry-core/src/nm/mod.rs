pub mod integrate;
pub mod sample;
pub mod spline;

pub use integrate::simpson;
pub use sample::linspace;
pub use spline::CubicSpline;
