// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use crate::error::PerimetryError;

/// Integrate sampled values with the composite Simpson rule
///
/// Sample points may be unevenly spaced. With an odd number of samples the
/// classic composite rule is applied over consecutive pairs of intervals.
/// With an even number of samples the first `n - 1` samples use the
/// composite rule and the final interval is closed by integrating the
/// parabola through the last three samples. Two samples fall back to the
/// trapezoid rule.
///
/// # Arguments
///
/// * `y` - Function values
/// * `x` - Sample points (strictly increasing, same length as `y`)
///
/// # Examples
///
/// ```
/// use perimetry_core::nm::{linspace, simpson};
///
/// let x = linspace(0.0, 1.0, 11);
/// let y: Vec<f64> = x.iter().map(|v| v * v).collect();
///
/// let integral = simpson(&y, &x).unwrap();
/// assert!((integral - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn simpson(y: &[f64], x: &[f64]) -> Result<f64, PerimetryError> {
    if y.len() != x.len() {
        return Err(PerimetryError::ShapeDimensionError(format!(
            "Integrand and sample points must have equal length ({} != {}).",
            y.len(),
            x.len()
        )));
    }

    let n = y.len();

    if n < 2 {
        return Err(PerimetryError::ShapeDimensionError(
            "At least two samples are required for integration.".to_string(),
        ));
    }

    if n == 2 {
        return Ok(0.5 * (x[1] - x[0]) * (y[0] + y[1]));
    }

    if n % 2 == 1 {
        return Ok(composite(y, x));
    }

    let mut result = composite(&y[..n - 1], &x[..n - 1]);

    let h0 = x[n - 2] - x[n - 3];
    let h1 = x[n - 1] - x[n - 2];

    let alpha = (2.0 * h1 * h1 + 3.0 * h0 * h1) / (6.0 * (h0 + h1));
    let beta = (h1 * h1 + 3.0 * h0 * h1) / (6.0 * h0);
    let eta = h1 * h1 * h1 / (6.0 * h0 * (h0 + h1));

    result += alpha * y[n - 1] + beta * y[n - 2] - eta * y[n - 3];

    Ok(result)
}

/// Composite Simpson rule over an odd number of samples
#[inline]
fn composite(y: &[f64], x: &[f64]) -> f64 {
    let mut result = 0.0;

    for i in (0..y.len() - 2).step_by(2) {
        let h0 = x[i + 1] - x[i];
        let h1 = x[i + 2] - x[i + 1];
        let hsum = h0 + h1;
        let hprod = h0 * h1;
        let h0_div_h1 = h0 / h1;

        result += hsum / 6.0
            * (y[i] * (2.0 - 1.0 / h0_div_h1)
                + y[i + 1] * (hsum * hsum / hprod)
                + y[i + 2] * (2.0 - h0_div_h1));
    }

    result
}
