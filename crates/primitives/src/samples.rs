//! Paired node/value sample buffer.

use crate::{PrimitiveError, Vector};

/// Ordered samples: node `x[i]` carries the value `y[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    x: Vector,
    y: Vector,
}

impl Samples {
    /// Pair nodes with values.
    ///
    /// # Errors
    /// Returns `PrimitiveError::LengthMismatch` if `x` and `y` differ in length.
    pub fn new(x: Vector, y: Vector) -> Result<Self, PrimitiveError> {
        if x.len() != y.len() {
            return Err(PrimitiveError::LengthMismatch { expected: x.len(), actual: y.len() });
        }
        Ok(Self { x, y })
    }

    /// Use `0, 1, ..., n - 1` as nodes for the given values.
    #[must_use]
    pub fn from_values(y: Vector) -> Self {
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self { x, y }
    }

    /// Number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The nodes.
    #[must_use]
    pub const fn x(&self) -> &Vector {
        &self.x
    }

    /// The values.
    #[must_use]
    pub const fn y(&self) -> &Vector {
        &self.y
    }

    /// Split back into `(x, y)`.
    #[must_use]
    pub fn into_parts(self) -> (Vector, Vector) {
        (self.x, self.y)
    }
}
