// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use crate::error::PerimetryError;

/// A piecewise cubic interpolant with not-a-knot end conditions
///
/// The interpolant passes through every knot and has continuous value,
/// first derivative, and second derivative at interior knots. The third
/// derivative is additionally continuous across the second and the
/// second-to-last knots. Two knots produce the interpolating line and three
/// knots produce the interpolating parabola.
///
/// Evaluation outside the knot range extrapolates the first or last
/// polynomial piece.
///
/// # Examples
///
/// ```
/// use perimetry_core::nm::CubicSpline;
///
/// let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
/// let y: Vec<f64> = x.iter().map(|v| v * v * v).collect();
/// let spline = CubicSpline::new(&x, &y).unwrap();
///
/// assert!((spline.evaluate(1.5) - 3.375).abs() < 1e-12);
/// assert!((spline.derivative(1.5) - 6.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    coefficients: Vec<[f64; 4]>,
}

impl CubicSpline {
    /// Fit a not-a-knot cubic spline through `(x, y)`
    ///
    /// # Arguments
    ///
    /// * `x` - Strictly increasing knots
    /// * `y` - Values at each knot
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, PerimetryError> {
        if x.len() != y.len() {
            return Err(PerimetryError::SplineError(
                "Knots and values must have equal length.",
            ));
        }

        if x.len() < 2 {
            return Err(PerimetryError::SplineError(
                "At least two knots are required.",
            ));
        }

        if !x.windows(2).all(|w| w[1] > w[0]) {
            return Err(PerimetryError::SplineError(
                "Knots must be strictly increasing.",
            ));
        }

        let n = x.len();
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let slope: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

        let m = match n {
            2 => vec![0.0; 2],
            3 => vec![2.0 * (slope[1] - slope[0]) / (h[0] + h[1]); 3],
            _ => not_a_knot_curvature(&h, &slope),
        };

        let coefficients = (0..n - 1)
            .map(|i| {
                [
                    y[i],
                    slope[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0,
                    m[i] / 2.0,
                    (m[i + 1] - m[i]) / (6.0 * h[i]),
                ]
            })
            .collect();

        Ok(CubicSpline {
            knots: x.to_vec(),
            coefficients,
        })
    }

    /// Knots the spline was fitted through
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Interpolated value at `x`
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.evaluate_order(x, 0)
    }

    /// First derivative with respect to `x`
    #[inline]
    pub fn derivative(&self, x: f64) -> f64 {
        self.evaluate_order(x, 1)
    }

    /// Value (`nu = 0`) or `nu`-th derivative at `x`
    ///
    /// Derivatives above the third are identically zero.
    pub fn evaluate_order(&self, x: f64, nu: usize) -> f64 {
        let i = self.interval(x);
        let t = x - self.knots[i];
        let [a, b, c, d] = self.coefficients[i];

        match nu {
            0 => a + t * (b + t * (c + t * d)),
            1 => b + t * (2.0 * c + 3.0 * d * t),
            2 => 2.0 * c + 6.0 * d * t,
            3 => 6.0 * d,
            _ => 0.0,
        }
    }

    /// Index of the polynomial piece used for `x`
    #[inline]
    fn interval(&self, x: f64) -> usize {
        let last = self.coefficients.len() - 1;
        self.knots
            .partition_point(|&k| k <= x)
            .saturating_sub(1)
            .min(last)
    }
}

/// Knot second derivatives for four or more knots
///
/// The two not-a-knot rows are folded into the first and last interior
/// equations so the remaining system is tridiagonal in `m[1..n-1]`.
fn not_a_knot_curvature(h: &[f64], slope: &[f64]) -> Vec<f64> {
    let n = h.len() + 1;
    let k = n - 2;

    let mut lower = vec![0.0; k];
    let mut diag = vec![0.0; k];
    let mut upper = vec![0.0; k];
    let mut rhs = vec![0.0; k];

    for row in 0..k {
        let i = row + 1;
        lower[row] = h[i - 1];
        diag[row] = 2.0 * (h[i - 1] + h[i]);
        upper[row] = h[i];
        rhs[row] = 6.0 * (slope[i] - slope[i - 1]);
    }

    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 * (h0 + h1) / h1;
    upper[0] -= h0 * h0 / h1;

    let (p, q) = (h[n - 3], h[n - 2]);
    diag[k - 1] += q * (p + q) / p;
    lower[k - 1] -= q * q / p;

    let interior = solve_tridiagonal(&lower, &diag, &upper, &rhs);

    let mut m = vec![0.0; n];
    m[1..n - 1].copy_from_slice(&interior);
    m[0] = ((h0 + h1) * m[1] - h0 * m[2]) / h1;
    m[n - 1] = ((p + q) * m[n - 2] - q * m[n - 3]) / p;

    m
}

/// Thomas algorithm for a tridiagonal system
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> Vec<f64> {
    let k = diag.len();
    let mut c = vec![0.0; k];
    let mut d = vec![0.0; k];

    c[0] = upper[0] / diag[0];
    d[0] = rhs[0] / diag[0];

    for i in 1..k {
        let denom = diag[i] - lower[i] * c[i - 1];
        c[i] = upper[i] / denom;
        d[i] = (rhs[i] - lower[i] * d[i - 1]) / denom;
    }

    let mut solution = vec![0.0; k];
    solution[k - 1] = d[k - 1];

    for i in (0..k - 1).rev() {
        solution[i] = d[i] - c[i] * solution[i + 1];
    }

    solution
}
