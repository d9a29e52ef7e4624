mod fourier;

pub use fourier::RandomShape;
pub use fourier::generate_random_shape;
