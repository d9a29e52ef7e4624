pub mod form;
pub mod ratio;

pub use form::{compute_spline_boundary, discrete_shape_index, shape_index};
pub use ratio::{
    ConversionRatios, RatioSummary, Trial, TrialMeasurement, compute_conversion_ratios,
    compute_conversion_ratios_parallel, measure_trial, measure_trials_parallel, run_trial,
};
