//! One-dimensional numeric vector.

use std::ops::Index;

use derive_more::{Display, From, Into};
use ndarray::Array1;

use crate::PrimitiveError;

/// An owned, growable sequence of `f64` values.
///
/// Reductions over an empty vector follow IEEE conventions: [`Vector::sum`]
/// is `0.0`, while [`Vector::avg`], [`Vector::min`] and [`Vector::max`] are NaN.
#[derive(Debug, Clone, Default, PartialEq, Display, From, Into)]
#[display("{_0:?}")]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Create a vector of `size` elements, each set to `fill`.
    #[must_use]
    pub fn new(size: usize, fill: f64) -> Self {
        Self(vec![fill; size])
    }

    /// Create `count` evenly spaced values from `start` to `end` inclusive.
    ///
    /// The last element is set to `end` exactly rather than computed, so the
    /// upper bound never drifts. A single-element range is `[end]`.
    #[must_use]
    pub fn range(start: f64, end: f64, count: usize) -> Self {
        let Some(last) = count.checked_sub(1) else {
            return Self::default();
        };

        let mut values: Vec<f64> =
            (0..last).map(|i| start + i as f64 / last as f64 * (end - start)).collect();
        values.push(end);
        Self(values)
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Get the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the values.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Copy the values into an ndarray.
    #[must_use]
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_vec(self.0.clone())
    }

    /// Append a value to the end.
    pub fn push(&mut self, x: f64) {
        self.0.push(x);
    }

    /// Remove and return the last value.
    pub fn pop(&mut self) -> Option<f64> {
        self.0.pop()
    }

    /// Remove and return the first value.
    pub fn shift(&mut self) -> Option<f64> {
        if self.0.is_empty() { None } else { Some(self.0.remove(0)) }
    }

    /// Insert a value at the beginning.
    pub fn unshift(&mut self, x: f64) {
        self.0.insert(0, x);
    }

    /// Apply `f` to every element, returning a new vector.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        self.0.iter().map(|&x| f(x)).collect()
    }

    /// Add `other` element-wise into this vector.
    ///
    /// # Errors
    /// Returns `PrimitiveError::LengthMismatch` if the lengths differ; the
    /// vector is left untouched in that case.
    pub fn add(&mut self, other: &Self) -> Result<(), PrimitiveError> {
        if self.len() != other.len() {
            return Err(PrimitiveError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        for (a, b) in self.0.iter_mut().zip(&other.0) {
            *a += b;
        }
        Ok(())
    }

    /// Sum of all values.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Arithmetic mean.
    #[must_use]
    pub fn avg(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        self.sum() / self.len() as f64
    }

    /// Smallest value.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.0.iter().copied().reduce(f64::min).unwrap_or(f64::NAN)
    }

    /// Largest value.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
    }

    /// Sample standard deviation (n - 1 denominator).
    ///
    /// NaN when fewer than two values are present.
    #[must_use]
    pub fn stddev(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return f64::NAN;
        }
        let mean = self.avg();
        let variance: f64 =
            self.0.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Array1<f64>> for Vector {
    fn from(array: Array1<f64>) -> Self {
        array.into_iter().collect()
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
