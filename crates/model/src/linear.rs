//! Linear least squares regression.

use baryfit_math::fit_line;
use baryfit_traits::{Regression, RegressionError};

use crate::{FittedCurve, error::regression_error};

/// Ordinary least squares straight-line regression.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRegression;

impl LinearRegression {
    /// Create a new linear regression.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Regression for LinearRegression {
    type Fitted = FittedCurve;

    fn name(&self) -> &str {
        "linear"
    }

    fn fit(&self, x: &[f64], y: &[f64]) -> Result<Self::Fitted, RegressionError> {
        fit_line(x, y).map(FittedCurve::Linear).map_err(regression_error)
    }
}
