pub mod params;
pub mod ratios;
pub mod shape;
