//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// Nodes and values have different lengths.
    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch {
        /// Number of nodes.
        x_len: usize,
        /// Number of values.
        y_len: usize,
    },

    /// Too few samples.
    #[error("insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData {
        /// Required number of samples.
        required: usize,
        /// Actual number of samples.
        actual: usize,
    },

    /// Blend degree outside `(0, n)` after default resolution.
    #[error("degree {degree} out of range: must satisfy 0 < d < {n}")]
    DegreeOutOfRange {
        /// Resolved degree.
        degree: usize,
        /// Number of samples.
        n: usize,
    },

    /// All nodes are equal, so no line through them is unique.
    #[error("zero variance in x")]
    ZeroVariance,
}

impl MathError {
    /// Returns whether the error was caused by an invalid argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::ZeroVariance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::DegreeOutOfRange { degree: 7, n: 5 };
        assert!(err.to_string().contains('7') && err.to_string().contains('5'));

        let err = MathError::LengthMismatch { x_len: 10, y_len: 5 };
        assert!(err.to_string().contains("10") && err.to_string().contains('5'));
    }

    #[test]
    fn error_classification() {
        assert!(MathError::InsufficientData { required: 2, actual: 1 }.is_invalid_argument());
        assert!(!MathError::ZeroVariance.is_invalid_argument());
    }
}
