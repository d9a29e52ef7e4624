// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use serde::{Deserialize, Serialize};

use crate::constant::ORDER2_NEIGHBOURHOOD_SIZE;
use crate::im::OccupancyGrid;

/// How neighbour lookups behave past the edge of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Opposite edges are adjacent (the grid is a torus)
    #[default]
    Toroidal,
    /// Cells outside the grid read as unoccupied
    Bounded,
}

/// Offsets of the extended order-2 neighbourhood as (dx, dy)
///
/// Each offset is decoded from the five low bits `a, b, c, d, e` of
/// `n = 0..20`:
///
/// ```text
/// dx = (2a - 1) * (c + e + 1 - b * (c + d + 1))
/// dy = (2a - 1) * (d - e + b * (c - d + 2e + 1))
/// ```
///
/// Consecutive offsets come in opposite pairs since bit `a` only flips the
/// sign.
///
/// # Examples
///
/// ```
/// use perimetry_core::cv::extended_offsets;
///
/// let offsets = extended_offsets();
///
/// assert_eq!(offsets[0], [-1, 0]);
/// assert_eq!(offsets[19], [1, 2]);
/// ```
pub fn extended_offsets() -> [[i64; 2]; ORDER2_NEIGHBOURHOOD_SIZE] {
    let mut offsets = [[0i64; 2]; ORDER2_NEIGHBOURHOOD_SIZE];

    for (n, offset) in offsets.iter_mut().enumerate() {
        let bit = |i: usize| ((n >> i) & 1) as i64;
        let (a, b, c, d, e) = (bit(0), bit(1), bit(2), bit(3), bit(4));
        let sign = 2 * a - 1;

        offset[0] = sign * (c + e + 1 - b * (c + d + 1));
        offset[1] = sign * (d - e + b * (c - d + 2 * e + 1));
    }

    offsets
}

/// Value of the grid shifted by `offset`, read at `(x, y)`
///
/// A view shifted by `(dx, dy)` shows the cell at `(x - dx, y - dy)`.
#[inline]
pub fn shifted(grid: &OccupancyGrid, x: usize, y: usize, offset: [i64; 2], edge: EdgeMode) -> u8 {
    let n = grid.dimension() as i64;
    let sx = x as i64 - offset[0];
    let sy = y as i64 - offset[1];

    match edge {
        EdgeMode::Toroidal => grid.get(sx.rem_euclid(n) as usize, sy.rem_euclid(n) as usize),
        EdgeMode::Bounded => {
            if sx < 0 || sy < 0 || sx >= n || sy >= n {
                0
            } else {
                grid.get(sx as usize, sy as usize)
            }
        }
    }
}
