// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use crate::error::PerimetryError;
use crate::nm::{CubicSpline, simpson};

/// Area and boundary length of a star-shaped outline given as `r(θ)`
///
/// Both integrals are evaluated with the composite Simpson rule on the
/// provided angles:
///
/// ```text
/// area      = ∫ r(θ)² / 2 dθ
/// perimeter = ∫ sqrt(r(θ)² + r'(θ)²) dθ
/// ```
///
/// # Arguments
///
/// * `spline` - Continuous radius as a function of angle
/// * `theta` - Angles to integrate over
///
/// # Examples
///
/// ```
/// use perimetry_core::mp::compute_spline_boundary;
/// use perimetry_core::nm::{CubicSpline, linspace};
///
/// let theta = linspace(0.0, 2.0 * std::f64::consts::PI, 361);
/// let spline = CubicSpline::new(&theta, &vec![2.0; 361]).unwrap();
///
/// let (area, perimeter) = compute_spline_boundary(&spline, &theta).unwrap();
///
/// assert!((area - 4.0 * std::f64::consts::PI).abs() < 1e-9);
/// assert!((perimeter - 4.0 * std::f64::consts::PI).abs() < 1e-9);
/// ```
pub fn compute_spline_boundary(
    spline: &CubicSpline,
    theta: &[f64],
) -> Result<(f64, f64), PerimetryError> {
    let radius: Vec<f64> = theta.iter().map(|&t| spline.evaluate(t)).collect();
    let slope: Vec<f64> = theta.iter().map(|&t| spline.derivative(t)).collect();

    let area_integrand: Vec<f64> = radius.iter().map(|r| 0.5 * r * r).collect();
    let perimeter_integrand: Vec<f64> = radius
        .iter()
        .zip(slope.iter())
        .map(|(r, dr)| (r * r + dr * dr).sqrt())
        .collect();

    let area = simpson(&area_integrand, theta)?;
    let perimeter = simpson(&perimeter_integrand, theta)?;

    Ok((area, perimeter))
}

/// Scale-invariant compactness of a shape
#[inline]
pub fn shape_index(perimeter: f64, area: f64) -> f64 {
    perimeter / area.sqrt()
}

/// Shape index from a boundary pixel count and a pixel area
///
/// An empty grid yields a non-finite index.
#[inline]
pub fn discrete_shape_index(boundary_pixels: u64, area_pixels: u64) -> f64 {
    shape_index(boundary_pixels as f64, area_pixels as f64)
}
