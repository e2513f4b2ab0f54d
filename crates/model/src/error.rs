//! Error types for regression fitting.

use baryfit_math::MathError;
use baryfit_primitives::PrimitiveError;
use baryfit_traits::RegressionError;

/// Errors that can occur when configuring or running a regression.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Regression error.
    #[error("regression error: {0}")]
    Regression(#[from] RegressionError),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Sample buffer error.
    #[error("sample error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Unrecognised regression name.
    #[error("unknown regression: {0}")]
    UnknownRegression(String),
}

impl ModelError {
    /// Returns whether the error was caused by an invalid argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Regression(err) => err.is_invalid_argument(),
            Self::Math(err) => err.is_invalid_argument(),
            Self::Primitive(_) | Self::UnknownRegression(_) => true,
        }
    }
}

/// Carry a math error into the regression layer, keeping its kind.
pub(crate) fn regression_error(err: MathError) -> RegressionError {
    match err {
        MathError::LengthMismatch { x_len, y_len } => {
            RegressionError::LengthMismatch { x_len, y_len }
        }
        MathError::InsufficientData { required, actual } => {
            RegressionError::InsufficientData { required, actual }
        }
        MathError::DegreeOutOfRange { degree, n } => {
            RegressionError::DegreeOutOfRange { degree, n }
        }
        MathError::ZeroVariance => RegressionError::Degenerate(err.to_string()),
    }
}

/// Carry a sample buffer error into the regression layer.
pub(crate) const fn sample_error(err: PrimitiveError) -> RegressionError {
    match err {
        PrimitiveError::LengthMismatch { expected, actual } => {
            RegressionError::LengthMismatch { x_len: expected, y_len: actual }
        }
    }
}
