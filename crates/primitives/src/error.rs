//! Error types for sample buffers.

/// Errors that can occur when combining sample buffers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// Two sequences that must be parallel have different lengths.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
}
