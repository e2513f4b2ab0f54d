//! Floater–Hormann barycentric rational interpolation.
//!
//! The interpolant blends all local polynomial interpolants of degree `d`
//! through consecutive runs of `d + 1` nodes. In barycentric form it reads
//!
//! ```text
//! r(x) = Σ w_k y_k / (x - x_k)  /  Σ w_k / (x - x_k)
//! ```
//!
//! where the weights depend only on the nodes and `d`. It has no real poles,
//! reproduces the samples exactly, and does not suffer from the oscillation of
//! high-degree polynomial interpolation.
//!
//! See Floater & Hormann, "Barycentric rational interpolation with no poles
//! and high rates of approximation", Numer. Math. 107 (2007).

use ndarray::Array1;

use crate::MathError;

/// Upper bound applied by [`default_degree`].
const MAX_DEFAULT_DEGREE: usize = 7;

/// Default blend degree for `n` samples: `min(7, (4n - 1) / 9, n - 1)`.
#[must_use]
pub const fn default_degree(n: usize) -> usize {
    let d = (4 * n).saturating_sub(1) / 9;
    let d = if d > MAX_DEFAULT_DEGREE { MAX_DEFAULT_DEGREE } else { d };
    let max = n.saturating_sub(1);
    if d > max { max } else { d }
}

/// Compute Floater–Hormann weights for `nodes` with blend degree `degree`.
///
/// Runs the divided-difference recurrence from `degree` down to 1 over a
/// single buffer. The sign state is shared across all passes and flips after
/// every element written.
///
/// The nodes must be strictly increasing and `0 < degree < nodes.len()`.
/// Neither is checked: repeated nodes yield infinite or NaN weights.
#[must_use]
pub fn fh_weights(nodes: &[f64], degree: usize) -> Array1<f64> {
    let n = nodes.len();
    let mut weights = Array1::from_shape_fn(n, |i| if i + degree < n { 1.0 } else { 0.0 });

    let mut sign = 1.0;
    for j in (1..=degree).rev() {
        // weight of the left neighbour as it was before this pass
        let mut prev: f64 = 0.0;
        for i in 0..(n + 1).saturating_sub(j) {
            let old: f64 = weights[i];
            let mut w = 0.0;
            if i > 0 {
                w += prev.abs() / (nodes[i] - nodes[i - 1]);
            }
            if i + 1 < n {
                w += old.abs() / (nodes[i + 1] - nodes[i]);
            }
            prev = old;
            sign = -sign;
            weights[i] = w * sign;
        }
    }

    weights
}

/// Floater–Hormann rational interpolant.
///
/// Owns its nodes, values and weights; none of them change after
/// construction, so evaluation takes `&self` and is safe to share.
#[derive(Debug, Clone, PartialEq)]
pub struct FloaterHormann {
    nodes: Array1<f64>,
    values: Array1<f64>,
    weights: Array1<f64>,
    degree: usize,
}

impl FloaterHormann {
    /// Build an interpolant through `(nodes[i], values[i])`.
    ///
    /// # Arguments
    /// * `nodes` - Strictly increasing nodes, or `None` for `0, 1, ..., n - 1`
    /// * `values` - Sample values (n,)
    /// * `degree` - Blend degree; `0` selects [`default_degree`]
    ///
    /// # Errors
    /// * `MathError::LengthMismatch` if `nodes` and `values` differ in length
    /// * `MathError::InsufficientData` if fewer than two samples are given
    /// * `MathError::DegreeOutOfRange` if the resolved degree is not in `(0, n)`
    pub fn new(nodes: Option<&[f64]>, values: &[f64], degree: usize) -> Result<Self, MathError> {
        let n = values.len();
        let nodes = match nodes {
            Some(x) if x.len() != n => {
                return Err(MathError::LengthMismatch { x_len: x.len(), y_len: n });
            }
            Some(x) => x.to_vec(),
            None => (0..n).map(|i| i as f64).collect(),
        };

        if n < 2 {
            return Err(MathError::InsufficientData { required: 2, actual: n });
        }

        let degree = if degree == 0 { default_degree(n) } else { degree };
        if degree == 0 || degree >= n {
            return Err(MathError::DegreeOutOfRange { degree, n });
        }

        let weights = fh_weights(&nodes, degree);
        tracing::debug!(n, degree, "built Floater-Hormann interpolant");

        Ok(Self {
            nodes: Array1::from_vec(nodes),
            values: Array1::from_vec(values.to_vec()),
            weights,
            degree,
        })
    }

    /// Evaluate the interpolant at `x`.
    ///
    /// Returns the sample value exactly when `x` equals a node. Elsewhere the
    /// barycentric quotient is returned unguarded; degenerate node sets show
    /// up as NaN or infinity.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let mut sx = 0.0;
        let mut sy = 0.0;
        for ((&xk, &yk), &wk) in self.nodes.iter().zip(&self.values).zip(&self.weights) {
            let dx = x - xk;
            if dx == 0.0 {
                return yk;
            }
            let v = wk / dx;
            sx += v;
            sy += v * yk;
        }
        sy / sx
    }

    /// Evaluate the interpolant at every point of `xs`.
    #[must_use]
    pub fn eval_many(&self, xs: &[f64]) -> Array1<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Convert into a plain function.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 + Send + Sync + Clone {
        move |x| self.eval(x)
    }

    /// The interpolation nodes.
    #[must_use]
    pub const fn nodes(&self) -> &Array1<f64> {
        &self.nodes
    }

    /// The sample values.
    #[must_use]
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// The barycentric weights.
    #[must_use]
    pub const fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// The resolved blend degree.
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if empty.
    ///
    /// Always `false`: construction requires at least two samples. Provided
    /// to pair with [`FloaterHormann::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build a Floater–Hormann interpolant and return it as a function.
///
/// Shorthand for [`FloaterHormann::new`] followed by [`FloaterHormann::into_fn`].
///
/// # Errors
/// Same as [`FloaterHormann::new`].
pub fn interpolate(
    nodes: Option<&[f64]>,
    values: &[f64],
    degree: usize,
) -> Result<impl Fn(f64) -> f64 + Send + Sync + Clone, MathError> {
    FloaterHormann::new(nodes, values, degree).map(FloaterHormann::into_fn)
}
