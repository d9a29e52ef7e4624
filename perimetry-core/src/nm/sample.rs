// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

/// Evenly spaced samples over a closed interval
///
/// Both `start` and `stop` are included when `n > 1`. A single sample
/// returns `start` and zero samples return an empty vector.
///
/// # Arguments
///
/// * `start` - First sample
/// * `stop` - Last sample
/// * `n` - Number of samples
///
/// # Examples
///
/// ```
/// use perimetry_core::nm::linspace;
///
/// let samples = linspace(-1.0, 1.0, 5);
/// assert_eq!(samples, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}
