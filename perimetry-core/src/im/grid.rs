// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::ops::Deref;

use crate::error::PerimetryError;

/// A square container storing a binary occupancy grid
///
/// Cells are stored row-major with the first axis (`x`) as the row, so the
/// cell at `(x, y)` lives at index `x * dimension + y`. Every cell holds
/// either 0 (empty) or 1 (occupied).
///
/// # Examples
///
/// ```
/// use perimetry_core::im::OccupancyGrid;
///
/// let grid = OccupancyGrid::new(3, vec![0, 1, 0, 1, 1, 1, 0, 1, 0]).unwrap();
///
/// assert_eq!(grid.dimension(), 3);
/// assert_eq!(grid.area(), 5);
/// assert_eq!(grid.get(1, 2), 1);
/// ```
///
/// ```
/// use perimetry_core::im::OccupancyGrid;
///
/// let grid = OccupancyGrid::new(3, vec![0u8; 8]);
///
/// assert!(grid.is_err()); // Buffer is not square
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    n: usize,            // Side length
    pub buffer: Vec<u8>, // Cells
}

impl OccupancyGrid {
    /// Initializes a grid from a row-major buffer of 0/1 cells
    ///
    /// # Arguments
    ///
    /// * `dimension` - Side length of the square grid
    /// * `buffer` - Row-major cell values
    pub fn new(dimension: usize, buffer: Vec<u8>) -> Result<OccupancyGrid, PerimetryError> {
        if dimension * dimension != buffer.len() {
            return Err(PerimetryError::ShapeDimensionError(format!(
                "Grid buffer of length {} does not match a {}x{} grid.",
                buffer.len(),
                dimension,
                dimension
            )));
        }

        if buffer.iter().any(|&v| v > 1) {
            return Err(PerimetryError::ShapeDimensionError(
                "Grid cells must be either 0 or 1.".to_string(),
            ));
        }

        Ok(OccupancyGrid {
            n: dimension,
            buffer,
        })
    }

    /// An empty grid
    pub fn zeros(dimension: usize) -> OccupancyGrid {
        OccupancyGrid {
            n: dimension,
            buffer: vec![0; dimension * dimension],
        }
    }

    /// A fully occupied grid
    pub fn ones(dimension: usize) -> OccupancyGrid {
        OccupancyGrid {
            n: dimension,
            buffer: vec![1; dimension * dimension],
        }
    }
}

// >>> PROPERTY METHODS

impl OccupancyGrid {
    /// Side length of the grid
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Grid shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// Number of occupied cells
    pub fn area(&self) -> u64 {
        self.buffer.iter().map(|&v| v as u64).sum()
    }
}

// >>> ACCESS METHODS

impl OccupancyGrid {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.buffer[x * self.n + y]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.buffer[x * self.n + y] = value as u8;
    }

    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == 1
    }

    /// Consume the grid and return the raw row-major buffer
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }
}

impl Deref for OccupancyGrid {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = OccupancyGrid::zeros(4);
        grid.set(1, 3, true);

        assert_eq!(grid.buffer[7], 1);
        assert!(grid.is_occupied(1, 3));
        assert!(!grid.is_occupied(3, 1));
        assert_eq!(grid.area(), 1);
    }

    #[test]
    fn test_grid_constructors() {
        assert_eq!(OccupancyGrid::ones(5).area(), 25);
        assert_eq!(OccupancyGrid::zeros(5).area(), 0);
        assert_eq!(OccupancyGrid::zeros(5).shape(), (5, 5));
        assert_eq!(OccupancyGrid::zeros(5).len(), 25);
    }

    #[test]
    fn test_grid_invalid_values() {
        assert!(OccupancyGrid::new(2, vec![0, 1, 2, 0]).is_err());
        assert!(OccupancyGrid::new(2, vec![0, 1, 1]).is_err());
    }
}
