// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use kdam::TqdmParallelIterator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;

use crate::config::RatioConfig;
use crate::cv::{EdgeMode, compute_discrete_boundary_with};
use crate::error::PerimetryError;
use crate::im::{OccupancyGrid, discrete_grid_representation};
use crate::mp::form::{compute_spline_boundary, discrete_shape_index, shape_index};
use crate::nm::CubicSpline;
use crate::sh::{RandomShape, generate_random_shape};
use crate::ut;

/// Every intermediate measurement of a single trial
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialMeasurement {
    pub area: f64,
    pub perimeter: f64,
    pub area_pixels: u64,
    pub boundary_pixels: [u64; 3],
    pub shape_index: f64,
    pub shape_index_discrete: [f64; 3],
    pub ratio: [f64; 3],
}

impl TrialMeasurement {
    /// Measurements flattened in the order of `constant::TRIAL_MEASUREMENT_NAMES`
    pub fn to_row(&self) -> [f64; 13] {
        [
            self.area,
            self.perimeter,
            self.area_pixels as f64,
            self.boundary_pixels[0] as f64,
            self.boundary_pixels[1] as f64,
            self.boundary_pixels[2] as f64,
            self.shape_index,
            self.shape_index_discrete[0],
            self.shape_index_discrete[1],
            self.shape_index_discrete[2],
            self.ratio[0],
            self.ratio[1],
            self.ratio[2],
        ]
    }
}

/// A single trial with the raster kept alongside the measurements
#[derive(Debug, Clone)]
pub struct Trial {
    pub shape: RandomShape,
    pub grid: OccupancyGrid,
    pub boundary: OccupancyGrid,
    pub measurement: TrialMeasurement,
}

/// Continuous to discrete shape index ratios for each boundary order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionRatios {
    pub order0: Vec<f64>,
    pub order1: Vec<f64>,
    pub order2: Vec<f64>,
}

/// Summary statistics of one ratio sequence
///
/// Non-finite ratios are counted but excluded from the mean and the
/// (population) standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioSummary {
    pub finite: usize,
    pub non_finite: usize,
    pub mean: f64,
    pub std: f64,
}

impl RatioSummary {
    pub fn new(ratios: &[f64]) -> RatioSummary {
        let finite: Vec<f64> = ratios.iter().copied().filter(|r| r.is_finite()).collect();
        let n = finite.len() as f64;

        let mean = finite.iter().sum::<f64>() / n;
        let variance = finite.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

        RatioSummary {
            finite: finite.len(),
            non_finite: ratios.len() - finite.len(),
            mean,
            std: variance.sqrt(),
        }
    }
}

impl ConversionRatios {
    pub fn with_capacity(capacity: usize) -> ConversionRatios {
        ConversionRatios {
            order0: Vec::with_capacity(capacity),
            order1: Vec::with_capacity(capacity),
            order2: Vec::with_capacity(capacity),
        }
    }

    pub fn from_measurements(measurements: &[TrialMeasurement]) -> ConversionRatios {
        let mut ratios = ConversionRatios::with_capacity(measurements.len());
        for measurement in measurements {
            ratios.push(measurement);
        }
        ratios
    }

    pub fn push(&mut self, measurement: &TrialMeasurement) {
        self.order0.push(measurement.ratio[0]);
        self.order1.push(measurement.ratio[1]);
        self.order2.push(measurement.ratio[2]);
    }

    pub fn len(&self) -> usize {
        self.order0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order0.is_empty()
    }

    /// Summaries for order 0, 1, and 2
    pub fn summary(&self) -> [RatioSummary; 3] {
        [
            RatioSummary::new(&self.order0),
            RatioSummary::new(&self.order1),
            RatioSummary::new(&self.order2),
        ]
    }
}

/// Run a single trial and keep every intermediate result
///
/// # Arguments
///
/// * `rng` - Random number generator used for the shape
/// * `config` - Experiment settings (sample count and seed are ignored)
pub fn run_trial<R: Rng + ?Sized>(
    rng: &mut R,
    config: &RatioConfig,
) -> Result<Trial, PerimetryError> {
    let shape = generate_random_shape(
        rng,
        config.fourier_series_order,
        config.points_per_shape,
        config.spikeyness_coefficient,
    )?;

    let spline = CubicSpline::new(&shape.theta, &shape.radius)?;

    let (area, perimeter) = compute_spline_boundary(&spline, &shape.theta)?;
    let index = shape_index(perimeter, area);

    let grid = discrete_grid_representation(&shape.radius, config.pixel_dimension, &spline)?;
    let area_pixels = grid.area();

    let boundary =
        compute_discrete_boundary_with(&grid, config.pixel_dimension, config.edge_mode)?;
    let boundary_pixels = boundary.counts();

    let shape_index_discrete =
        boundary_pixels.map(|count| discrete_shape_index(count, area_pixels));
    let ratio = shape_index_discrete.map(|discrete| index / discrete);

    Ok(Trial {
        shape,
        grid,
        boundary: boundary.mask,
        measurement: TrialMeasurement {
            area,
            perimeter,
            area_pixels,
            boundary_pixels,
            shape_index: index,
            shape_index_discrete,
            ratio,
        },
    })
}

/// Measure a single trial
///
/// # Arguments
///
/// * `rng` - Random number generator used for the shape
/// * `config` - Experiment settings (sample count and seed are ignored)
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use perimetry_core::config::RatioConfig;
/// use perimetry_core::mp::measure_trial;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let config = RatioConfig { pixel_dimension: 32, ..RatioConfig::default() };
///
/// let measurement = measure_trial(&mut rng, &config).unwrap();
/// assert!(measurement.area > 0.0);
/// ```
pub fn measure_trial<R: Rng + ?Sized>(
    rng: &mut R,
    config: &RatioConfig,
) -> Result<TrialMeasurement, PerimetryError> {
    run_trial(rng, config).map(|trial| trial.measurement)
}

/// Compute conversion ratios across independent random shapes
///
/// Trials run sequentially and draw from `rng` in order. Degenerate trials
/// (e.g. an empty raster) produce non-finite ratios, which are kept.
///
/// # Arguments
///
/// * `rng` - Random number generator shared by all trials
/// * `fourier_series_order` - Number of Fourier coefficients per shape
/// * `points_per_shape` - Angular samples per shape
/// * `spikeyness_coefficient` - Radius lift coefficient (higher is rounder)
/// * `pixel_dimension` - Side length of the raster
/// * `samples` - Number of trials
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use perimetry_core::mp::compute_conversion_ratios;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let ratios = compute_conversion_ratios(&mut rng, 6, 100, 1.5, 32, 4).unwrap();
///
/// assert_eq!(ratios.order0.len(), 4);
/// assert_eq!(ratios.order2.len(), 4);
/// ```
pub fn compute_conversion_ratios<R: Rng + ?Sized>(
    rng: &mut R,
    fourier_series_order: usize,
    points_per_shape: usize,
    spikeyness_coefficient: f64,
    pixel_dimension: usize,
    samples: usize,
) -> Result<ConversionRatios, PerimetryError> {
    let config = RatioConfig {
        fourier_series_order,
        points_per_shape,
        spikeyness_coefficient,
        pixel_dimension,
        samples,
        seed: None,
        edge_mode: EdgeMode::Toroidal,
    };

    let mut ratios = ConversionRatios::with_capacity(samples);

    for _ in 0..samples {
        ratios.push(&measure_trial(rng, &config)?);
    }

    Ok(ratios)
}

/// Seed of the generator owned by trial `index`
#[inline]
pub fn trial_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Measure independent trials on the rayon thread pool
///
/// Trial `i` draws from its own generator seeded with `trial_seed(seed, i)`,
/// so measurements depend only on the seed and not on the thread count.
///
/// # Arguments
///
/// * `config` - Experiment settings (`config.seed` is ignored)
/// * `seed` - Base seed for every trial generator
/// * `verbose` - Show a progress bar
pub fn measure_trials_parallel(
    config: &RatioConfig,
    seed: u64,
    verbose: bool,
) -> Result<Vec<TrialMeasurement>, PerimetryError> {
    let pb = ut::track::progress_bar(config.samples, "Measuring shapes", verbose);

    let mut measurements: Vec<(usize, Result<TrialMeasurement, PerimetryError>)> =
        (0..config.samples)
            .into_par_iter()
            .tqdm_with_bar(pb)
            .map(|idx| {
                let mut rng = StdRng::seed_from_u64(trial_seed(seed, idx));
                (idx, measure_trial(&mut rng, config))
            })
            .collect();

    if verbose {
        eprintln!();
    }

    measurements.sort_by_key(|(idx, _)| *idx);
    measurements.into_iter().map(|(_, result)| result).collect()
}

/// Compute conversion ratios with one seeded generator per trial
///
/// # Examples
///
/// ```
/// use perimetry_core::config::RatioConfig;
/// use perimetry_core::mp::compute_conversion_ratios_parallel;
///
/// let config = RatioConfig { pixel_dimension: 32, samples: 8, ..RatioConfig::default() };
///
/// let a = compute_conversion_ratios_parallel(&config, 11).unwrap();
/// let b = compute_conversion_ratios_parallel(&config, 11).unwrap();
///
/// assert_eq!(a.len(), 8);
/// assert_eq!(format!("{:?}", a), format!("{:?}", b));
/// ```
pub fn compute_conversion_ratios_parallel(
    config: &RatioConfig,
    seed: u64,
) -> Result<ConversionRatios, PerimetryError> {
    let measurements = measure_trials_parallel(config, seed, false)?;
    Ok(ConversionRatios::from_measurements(&measurements))
}

#[cfg(test)]
mod test {
    use super::*;

    fn small_config() -> RatioConfig {
        RatioConfig {
            pixel_dimension: 48,
            samples: 12,
            ..RatioConfig::default()
        }
    }

    fn mean_distance_from_one(ratios: &[f64]) -> f64 {
        let finite: Vec<f64> = ratios.iter().copied().filter(|r| r.is_finite()).collect();
        finite.iter().map(|r| (r - 1.0).abs()).sum::<f64>() / finite.len() as f64
    }

    #[test]
    fn test_conversion_ratios_end_to_end() {
        let mut rng = StdRng::seed_from_u64(2025);
        let ratios = compute_conversion_ratios(&mut rng, 6, 200, 1.5, 128, 50).unwrap();

        assert_eq!(ratios.order0.len(), 50);
        assert_eq!(ratios.order1.len(), 50);
        assert_eq!(ratios.order2.len(), 50);

        for sequence in [&ratios.order0, &ratios.order1, &ratios.order2] {
            let non_finite = sequence.iter().filter(|r| !r.is_finite()).count();
            assert!(non_finite <= 3);
        }

        // Wider neighbourhoods count more boundary pixels per unit length
        let [s0, s1, s2] = ratios.summary();
        assert!(s0.mean > 0.7 && s0.mean < 0.9);
        assert!(s1.mean > 0.28 && s1.mean < 0.37);
        assert!(s2.mean > 0.07 && s2.mean < 0.11);

        assert!(mean_distance_from_one(&ratios.order0) < mean_distance_from_one(&ratios.order1));
        assert!(mean_distance_from_one(&ratios.order1) < mean_distance_from_one(&ratios.order2));
    }

    #[test]
    fn test_ratios_ordered_per_trial() {
        let mut rng = StdRng::seed_from_u64(31);
        let ratios = compute_conversion_ratios(&mut rng, 6, 150, 1.5, 64, 10).unwrap();

        for i in 0..ratios.len() {
            if ratios.order0[i].is_finite() {
                assert!(ratios.order0[i] >= ratios.order1[i]);
                assert!(ratios.order1[i] >= ratios.order2[i]);
            }
        }
    }

    #[test]
    fn test_trial_consistency() {
        let mut rng = StdRng::seed_from_u64(8);
        let trial = run_trial(&mut rng, &small_config()).unwrap();
        let m = &trial.measurement;

        assert_eq!(m.area_pixels, trial.grid.area());
        assert_eq!(m.boundary_pixels[0], trial.boundary.area());
        assert!(m.boundary_pixels[0] <= m.boundary_pixels[1]);
        assert!(m.boundary_pixels[1] <= m.boundary_pixels[2]);

        for k in 0..3 {
            let discrete = m.boundary_pixels[k] as f64 / (m.area_pixels as f64).sqrt();
            assert_eq!(m.shape_index_discrete[k], discrete);
            assert_eq!(m.ratio[k], m.shape_index / discrete);
        }
    }

    #[test]
    fn test_degenerate_point_shape_propagates_nan() {
        let config = RatioConfig {
            fourier_series_order: 1,
            ..small_config()
        };

        let mut rng = StdRng::seed_from_u64(0);
        let m = measure_trial(&mut rng, &config).unwrap();

        assert_eq!(m.area_pixels, 0);
        assert_eq!(m.boundary_pixels, [0, 0, 0]);
        assert!(m.ratio.iter().all(|r| r.is_nan()));
    }

    #[test]
    fn test_sequential_matches_measurements() {
        let config = small_config();

        let mut rng = StdRng::seed_from_u64(4);
        let ratios = compute_conversion_ratios(
            &mut rng,
            config.fourier_series_order,
            config.points_per_shape,
            config.spikeyness_coefficient,
            config.pixel_dimension,
            3,
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let measurements: Vec<TrialMeasurement> = (0..3)
            .map(|_| measure_trial(&mut rng, &config).unwrap())
            .collect();

        let expected = ConversionRatios::from_measurements(&measurements);
        assert_eq!(format!("{:?}", ratios), format!("{:?}", expected));
    }

    #[test]
    fn test_parallel_matches_seeded_trials() {
        let config = small_config();
        let parallel = measure_trials_parallel(&config, 99, false).unwrap();

        assert_eq!(parallel.len(), config.samples);

        for (idx, measurement) in parallel.iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(trial_seed(99, idx));
            let expected = measure_trial(&mut rng, &config).unwrap();
            assert_eq!(format!("{:?}", measurement), format!("{:?}", expected));
        }
    }

    #[test]
    fn test_parallel_thread_count_independent() {
        let config = small_config();

        let single = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap()
            .install(|| compute_conversion_ratios_parallel(&config, 7).unwrap());

        let multi = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap()
            .install(|| compute_conversion_ratios_parallel(&config, 7).unwrap());

        assert_eq!(format!("{:?}", single), format!("{:?}", multi));
    }

    #[test]
    fn test_ratio_summary() {
        let summary = RatioSummary::new(&[1.0, 3.0, f64::NAN, f64::INFINITY]);

        assert_eq!(summary.finite, 2);
        assert_eq!(summary.non_finite, 2);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.std, 1.0);

        let empty = RatioSummary::new(&[f64::NAN]);
        assert_eq!(empty.finite, 0);
        assert!(empty.mean.is_nan());
    }

    #[test]
    fn test_invalid_parameters_fail_fast() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(compute_conversion_ratios(&mut rng, 6, 1, 1.5, 32, 2).is_err());
        assert!(compute_conversion_ratios(&mut rng, 6, 100, 1.5, 0, 2).is_err());
    }
}
