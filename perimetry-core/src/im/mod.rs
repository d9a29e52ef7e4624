mod grid;
mod raster;

pub use grid::OccupancyGrid;

pub use raster::discrete_grid_representation;
