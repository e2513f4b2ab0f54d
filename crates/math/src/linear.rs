//! Closed-form least squares line fit.

use crate::MathError;

/// Straight line fitted by ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope.
    pub slope: f64,
    /// Intercept.
    pub intercept: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y = slope * x + intercept` by least squares.
///
/// Solves the normal equations in closed form from the running sums of
/// `x`, `y`, `x²`, `y²` and `xy`.
///
/// # Errors
/// * `MathError::LengthMismatch` if `x` and `y` differ in length
/// * `MathError::InsufficientData` if fewer than two samples are given
/// * `MathError::ZeroVariance` if all `x` are equal
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit, MathError> {
    if x.len() != y.len() {
        return Err(MathError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(MathError::InsufficientData { required: 2, actual: x.len() });
    }

    let n = x.len() as f64;
    let (mut sx, mut sy, mut sx2, mut sy2, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        sx += xi;
        sy += yi;
        sx2 += xi * xi;
        sy2 += yi * yi;
        sxy += xi * yi;
    }

    let sxx = n * sx2 - sx * sx;
    if sxx == 0.0 {
        return Err(MathError::ZeroVariance);
    }
    let sxy = n * sxy - sx * sy;
    let syy = n * sy2 - sy * sy;

    let slope = sxy / sxx;
    let intercept = (sy - slope * sx) / n;
    let r_squared = if syy > 0.0 { sxy * sxy / (sxx * syy) } else { 0.0 };

    tracing::trace!(slope, intercept, r_squared, "fitted line");

    Ok(LinearFit { slope, intercept, r_squared })
}
