//! Error types for utility functions.

use baryfit_primitives::PrimitiveError;

/// Errors that can occur during utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Sample buffer error.
    #[error("sample error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),
}
