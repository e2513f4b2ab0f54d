//! Regression trait definitions.

use crate::Interpolant;

/// Errors that can occur while fitting a regression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegressionError {
    /// Nodes and values have different lengths.
    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch {
        /// Number of nodes.
        x_len: usize,
        /// Number of values.
        y_len: usize,
    },

    /// Too few samples to fit.
    #[error("insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData {
        /// Required number of samples.
        required: usize,
        /// Actual number of samples.
        actual: usize,
    },

    /// Interpolation degree outside `(0, n)`.
    #[error("degree {degree} out of range: must satisfy 0 < d < {n}")]
    DegreeOutOfRange {
        /// Resolved degree.
        degree: usize,
        /// Number of samples.
        n: usize,
    },

    /// Samples that admit no unique fit (e.g. all nodes equal for a line).
    #[error("degenerate samples: {0}")]
    Degenerate(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RegressionError {
    /// Returns whether the error was caused by an invalid argument.
    ///
    /// Every variant except `Degenerate` rejects the caller's input shape or
    /// parameters before any computation is attempted.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Degenerate(_))
    }
}

/// Trait for fitting a continuous function to scattered samples.
pub trait Regression: Send + Sync {
    /// Fitted function produced by this regression.
    type Fitted: Interpolant;

    /// Returns the name of this regression.
    fn name(&self) -> &str;

    /// Fit a function through the samples `(x[i], y[i])`.
    ///
    /// # Arguments
    /// * `x` - Sample nodes (n,)
    /// * `y` - Sample values (n,)
    ///
    /// # Errors
    /// Returns `RegressionError` if the lengths differ or the samples cannot
    /// support the fit.
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<Self::Fitted, RegressionError>;
}
