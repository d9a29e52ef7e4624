// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::PerimetryError;
use crate::nm::linspace;

/// Radial samples of a random star-shaped outline
///
/// `theta` is strictly increasing over `[0, 2π]` with both endpoints
/// included and `radius[i]` is the distance from the origin at `theta[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomShape {
    pub radius: Vec<f64>,
    pub theta: Vec<f64>,
}

impl RandomShape {
    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    /// Largest sampled radius
    pub fn max_radius(&self) -> f64 {
        self.radius.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest sampled radius
    pub fn min_radius(&self) -> f64 {
        self.radius.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Generate a random shape from a truncated Fourier series
///
/// Amplitudes are drawn from a standard normal distribution and phases
/// uniformly from `[0, 2π)`. Frequencies `1..order` contribute to the
/// radius; the constant term is excluded. The radius is then lifted by
/// `|spikeyness * min(radius)|`, so a coefficient of at least one keeps
/// every radius non-negative and larger values give rounder shapes.
///
/// Orders below two produce an all-zero radius (a point).
///
/// # Arguments
///
/// * `rng` - Random number generator
/// * `order` - Number of Fourier coefficients drawn
/// * `n_points` - Number of angular samples
/// * `spikeyness` - Lift coefficient applied to the minimum radius
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use perimetry_core::sh::generate_random_shape;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let shape = generate_random_shape(&mut rng, 6, 200, 1.5).unwrap();
///
/// assert_eq!(shape.radius.len(), 200);
/// assert!(shape.radius.iter().all(|&r| r >= 0.0));
/// ```
pub fn generate_random_shape<R: Rng + ?Sized>(
    rng: &mut R,
    order: usize,
    n_points: usize,
    spikeyness: f64,
) -> Result<RandomShape, PerimetryError> {
    if n_points < 2 {
        return Err(PerimetryError::ShapeDimensionError(format!(
            "Shapes require at least 2 points per shape (got {}).",
            n_points
        )));
    }

    if !spikeyness.is_finite() {
        return Err(PerimetryError::ParameterError(format!(
            "Spikeyness coefficient must be finite (got {}).",
            spikeyness
        )));
    }

    let amplitude: Vec<f64> = (0..order).map(|_| rng.sample(StandardNormal)).collect();
    let phase_offset: Vec<f64> = (0..order).map(|_| rng.gen_range(0.0..2.0 * PI)).collect();

    let theta = linspace(0.0, 2.0 * PI, n_points);
    let mut radius = vec![0.0; n_points];

    for frequency in 1..order {
        let k = frequency as f64;
        for (r, t) in radius.iter_mut().zip(theta.iter()) {
            *r += amplitude[frequency] * (k * t - phase_offset[frequency]).cos();
        }
    }

    let min = radius.iter().copied().fold(f64::INFINITY, f64::min);
    let lift = (spikeyness * min).abs();
    radius.iter_mut().for_each(|r| *r += lift);

    Ok(RandomShape { radius, theta })
}
