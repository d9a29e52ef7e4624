// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use crate::constant::MOORE_OFFSETS;
use crate::cv::neighbourhood::{EdgeMode, extended_offsets, shifted};
use crate::error::PerimetryError;
use crate::im::OccupancyGrid;

/// Discrete boundary estimates of an occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteBoundary {
    /// Occupied cells with at least one empty Moore neighbour
    pub mask: OccupancyGrid,
    /// Number of cells in `mask`
    pub order0: u64,
    /// Empty Moore neighbours summed over occupied cells
    pub order1: u64,
    /// Empty extended neighbours summed over occupied cells
    pub order2: u64,
}

impl DiscreteBoundary {
    /// Boundary counts ordered as (order 0, order 1, order 2)
    pub fn counts(&self) -> [u64; 3] {
        [self.order0, self.order1, self.order2]
    }
}

/// Compute discrete boundary estimates with toroidal neighbour lookups
///
/// Every occupied cell is compared against its shifted neighbours; an empty
/// cell contributes nothing. The order-0 estimate counts occupied cells
/// touching at least one empty Moore neighbour, the order-1 estimate counts
/// every empty Moore neighbour of every occupied cell, and the order-2
/// estimate does the same over the 20-cell extended neighbourhood (see
/// [`extended_offsets`]).
///
/// Neighbours wrap around the grid edges, so a full grid has no boundary.
///
/// # Arguments
///
/// * `grid` - Square occupancy grid
/// * `pixel_dimension` - Expected side length of `grid`
///
/// # Examples
///
/// ```
/// use perimetry_core::cv::compute_discrete_boundary;
/// use perimetry_core::im::OccupancyGrid;
///
/// let mut grid = OccupancyGrid::zeros(7);
/// grid.set(3, 3, true);
///
/// let boundary = compute_discrete_boundary(&grid, 7).unwrap();
///
/// assert_eq!(boundary.counts(), [1, 8, 20]);
/// ```
pub fn compute_discrete_boundary(
    grid: &OccupancyGrid,
    pixel_dimension: usize,
) -> Result<DiscreteBoundary, PerimetryError> {
    compute_discrete_boundary_with(grid, pixel_dimension, EdgeMode::Toroidal)
}

/// Compute discrete boundary estimates with a chosen edge behaviour
///
/// # Arguments
///
/// * `grid` - Square occupancy grid
/// * `pixel_dimension` - Expected side length of `grid`
/// * `edge` - Neighbour lookup behaviour past the grid edge
pub fn compute_discrete_boundary_with(
    grid: &OccupancyGrid,
    pixel_dimension: usize,
    edge: EdgeMode,
) -> Result<DiscreteBoundary, PerimetryError> {
    if grid.shape() != (pixel_dimension, pixel_dimension) {
        return Err(PerimetryError::ShapeDimensionError(format!(
            "Grid of shape {:?} does not match pixel dimension {}.",
            grid.shape(),
            pixel_dimension
        )));
    }

    let extended = extended_offsets();

    let mut mask = OccupancyGrid::zeros(pixel_dimension);
    let mut order0 = 0;
    let mut order1 = 0;
    let mut order2 = 0;

    for x in 0..pixel_dimension {
        for y in 0..pixel_dimension {
            if !grid.is_occupied(x, y) {
                continue;
            }

            let empty_moore = MOORE_OFFSETS
                .iter()
                .filter(|&&offset| shifted(grid, x, y, offset, edge) == 0)
                .count() as u64;

            let empty_extended = extended
                .iter()
                .filter(|&&offset| shifted(grid, x, y, offset, edge) == 0)
                .count() as u64;

            if empty_moore > 0 {
                mask.set(x, y, true);
                order0 += 1;
            }

            order1 += empty_moore;
            order2 += empty_extended;
        }
    }

    Ok(DiscreteBoundary {
        mask,
        order0,
        order1,
        order2,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn square(dimension: usize, start: usize, side: usize) -> OccupancyGrid {
        let mut grid = OccupancyGrid::zeros(dimension);
        for x in start..start + side {
            for y in start..start + side {
                grid.set(x, y, true);
            }
        }
        grid
    }

    #[test]
    fn test_isolated_pixel() {
        for dimension in [5, 6, 11] {
            let mut grid = OccupancyGrid::zeros(dimension);
            grid.set(2, 2, true);

            let boundary = compute_discrete_boundary(&grid, dimension).unwrap();

            assert_eq!(boundary.counts(), [1, 8, 20]);
            assert_eq!(boundary.mask, grid);
        }
    }

    #[test]
    fn test_isolated_pixel_on_edge_wraps() {
        let mut grid = OccupancyGrid::zeros(9);
        grid.set(0, 8, true);

        let boundary = compute_discrete_boundary(&grid, 9).unwrap();
        assert_eq!(boundary.counts(), [1, 8, 20]);
    }

    #[test]
    fn test_full_grid_toroidal() {
        let grid = OccupancyGrid::ones(6);
        let boundary = compute_discrete_boundary(&grid, 6).unwrap();

        assert_eq!(boundary.counts(), [0, 0, 0]);
        assert_eq!(boundary.mask.area(), 0);
    }

    #[test]
    fn test_full_grid_bounded() {
        let grid = OccupancyGrid::ones(6);
        let boundary = compute_discrete_boundary_with(&grid, 6, EdgeMode::Bounded).unwrap();

        // Every edge cell touches the outside of the grid
        assert_eq!(boundary.order0, 20);
        // Edge cells: 4 corners with 5 empty neighbours, 16 sides with 3
        assert_eq!(boundary.order1, 4 * 5 + 16 * 3);
    }

    #[test]
    fn test_empty_grid() {
        let grid = OccupancyGrid::zeros(8);
        let boundary = compute_discrete_boundary(&grid, 8).unwrap();

        assert_eq!(boundary.counts(), [0, 0, 0]);
        assert_eq!(boundary.mask, OccupancyGrid::zeros(8));
    }

    #[test]
    fn test_square_block() {
        let grid = square(12, 3, 4);
        let boundary = compute_discrete_boundary(&grid, 12).unwrap();

        // Only the 2x2 core has no empty Moore neighbour
        assert_eq!(boundary.order0, 12);
        // 4 corners see 5 empty neighbours and 8 side cells see 3
        assert_eq!(boundary.order1, 4 * 5 + 8 * 3);
        assert!(boundary.order2 > boundary.order1);

        for x in 4..6 {
            for y in 4..6 {
                assert!(!boundary.mask.is_occupied(x, y));
            }
        }
    }

    #[test]
    fn test_square_block_edge_modes_agree_inside() {
        let grid = square(12, 3, 4);
        let toroidal = compute_discrete_boundary_with(&grid, 12, EdgeMode::Toroidal).unwrap();
        let bounded = compute_discrete_boundary_with(&grid, 12, EdgeMode::Bounded).unwrap();
        assert_eq!(toroidal, bounded);
    }

    #[test]
    fn test_wrap_across_edge() {
        // Two pixels on opposite edges are Moore neighbours on a torus
        let mut grid = OccupancyGrid::zeros(6);
        grid.set(0, 2, true);
        grid.set(5, 2, true);

        let toroidal = compute_discrete_boundary(&grid, 6).unwrap();
        let bounded = compute_discrete_boundary_with(&grid, 6, EdgeMode::Bounded).unwrap();

        assert_eq!(toroidal.order1, 2 * 7);
        assert_eq!(bounded.order1, 2 * 8);
    }

    #[test]
    fn test_idempotent() {
        let grid = square(10, 2, 5);
        let first = compute_discrete_boundary(&grid, 10).unwrap();
        let second = compute_discrete_boundary(&grid, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dimension_mismatch() {
        let grid = OccupancyGrid::zeros(8);
        assert!(compute_discrete_boundary(&grid, 9).is_err());
    }
}
