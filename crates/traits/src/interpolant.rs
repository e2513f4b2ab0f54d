//! Fitted function trait definitions.

use ndarray::Array1;

/// A fitted function of one real variable.
///
/// Implementors are immutable once built, so a single instance can be shared
/// between threads and evaluated concurrently.
pub trait Interpolant: Send + Sync {
    /// Evaluate the function at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Evaluate the function at every point of `xs`.
    fn eval_many(&self, xs: &[f64]) -> Array1<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}
