// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::f64::consts::PI;

use crate::constant;
use crate::error::PerimetryError;
use crate::im::OccupancyGrid;
use crate::nm::{CubicSpline, linspace};

/// Rasterize a star-shaped outline onto a square pixel grid
///
/// Both axes sample `[-R, R]` with `R = 1.1 * max(radius)`. A cell is
/// occupied when the spline radius at the polar angle of its sample point
/// strictly exceeds the distance of that point from the origin. Polar angles
/// are measured as `atan2(y, x) + π` so they fall in `[0, 2π]`.
///
/// # Arguments
///
/// * `radius` - Sampled radii of the shape (only the maximum is used)
/// * `pixel_dimension` - Side length of the output grid
/// * `spline` - Continuous radius as a function of angle
///
/// # Examples
///
/// ```
/// use perimetry_core::im::discrete_grid_representation;
/// use perimetry_core::nm::{CubicSpline, linspace};
///
/// let theta = linspace(0.0, 2.0 * std::f64::consts::PI, 50);
/// let radius = vec![1.0; 50];
/// let spline = CubicSpline::new(&theta, &radius).unwrap();
///
/// let grid = discrete_grid_representation(&radius, 64, &spline).unwrap();
/// assert_eq!(grid.dimension(), 64);
/// assert!(grid.area() > 0);
/// ```
pub fn discrete_grid_representation(
    radius: &[f64],
    pixel_dimension: usize,
    spline: &CubicSpline,
) -> Result<OccupancyGrid, PerimetryError> {
    if pixel_dimension < 1 {
        return Err(PerimetryError::ShapeDimensionError(
            "Pixel dimension must be a positive integer.".to_string(),
        ));
    }

    if radius.is_empty() {
        return Err(PerimetryError::ShapeDimensionError(
            "At least one radius is required to bound the grid.".to_string(),
        ));
    }

    let max_radius = radius.iter().copied().fold(f64::NEG_INFINITY, |acc, r| {
        if acc.is_nan() || r.is_nan() {
            f64::NAN
        } else {
            acc.max(r)
        }
    });

    let bound = max_radius * constant::BOUNDING_RADIUS_SCALE;
    let points = linspace(-bound, bound, pixel_dimension);

    let mut grid = OccupancyGrid::zeros(pixel_dimension);

    for (x, &px) in points.iter().enumerate() {
        for (y, &py) in points.iter().enumerate() {
            let angle = py.atan2(px) + PI;
            if spline.evaluate(angle) > (px * px + py * py).sqrt() {
                grid.set(x, y, true);
            }
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod test {
    use super::*;

    fn circle(radius: f64, n: usize) -> (Vec<f64>, CubicSpline) {
        let theta = linspace(0.0, 2.0 * PI, n);
        let r = vec![radius; n];
        let spline = CubicSpline::new(&theta, &r).unwrap();
        (r, spline)
    }

    #[test]
    fn test_raster_circle_area() {
        let (radius, spline) = circle(1.0, 100);
        let grid = discrete_grid_representation(&radius, 101, &spline).unwrap();

        let spacing = 2.2 / 100.0;
        let expected = PI / (spacing * spacing);
        let area = grid.area() as f64;

        assert!((area - expected).abs() / expected < 0.02);
    }

    #[test]
    fn test_raster_scale_invariant() {
        let (small_radius, small) = circle(0.5, 100);
        let (large_radius, large) = circle(32.0, 100);

        let a = discrete_grid_representation(&small_radius, 64, &small).unwrap();
        let b = discrete_grid_representation(&large_radius, 64, &large).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_raster_boundary_margin() {
        let (radius, spline) = circle(1.0, 100);
        let grid = discrete_grid_representation(&radius, 50, &spline).unwrap();

        for i in 0..50 {
            assert!(!grid.is_occupied(0, i));
            assert!(!grid.is_occupied(49, i));
            assert!(!grid.is_occupied(i, 0));
            assert!(!grid.is_occupied(i, 49));
        }
    }

    #[test]
    fn test_raster_angle_offset() {
        // Radius peaks at angle π, which maps to the positive x direction
        let theta = linspace(0.0, 2.0 * PI, 200);
        let radius: Vec<f64> = theta.iter().map(|t| 1.0 - 0.5 * t.cos()).collect();
        let spline = CubicSpline::new(&theta, &radius).unwrap();

        let grid = discrete_grid_representation(&radius, 101, &spline).unwrap();

        let positive = (51..101).filter(|&x| grid.is_occupied(x, 50)).count();
        let negative = (0..50).filter(|&x| grid.is_occupied(x, 50)).count();

        assert!(positive > 2 * negative);
        assert!(negative > 0);
    }

    #[test]
    fn test_raster_point_shape_is_empty() {
        // Every sample sits exactly on the boundary and is excluded
        let (radius, spline) = circle(0.0, 20);
        let grid = discrete_grid_representation(&radius, 16, &spline).unwrap();
        assert_eq!(grid.area(), 0);
    }

    #[test]
    fn test_raster_single_pixel() {
        let (radius, spline) = circle(1.0, 20);
        let grid = discrete_grid_representation(&radius, 1, &spline).unwrap();
        assert_eq!(grid.dimension(), 1);
        assert_eq!(grid.area(), 0);
    }

    #[test]
    fn test_raster_invalid_dimension() {
        let (radius, spline) = circle(1.0, 20);
        assert!(discrete_grid_representation(&radius, 0, &spline).is_err());
        assert!(discrete_grid_representation(&[], 10, &spline).is_err());
    }
}
