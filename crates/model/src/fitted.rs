//! Fitted regression functions.

use baryfit_math::{FloaterHormann, LinearFit};
use baryfit_traits::Interpolant;

/// A function produced by one of the regressions in this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum FittedCurve {
    /// Least squares line.
    Linear(LinearFit),
    /// Floater–Hormann interpolant through the (possibly bucketed) samples.
    Interpolation(FloaterHormann),
}

impl Interpolant for FittedCurve {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Linear(fit) => fit.eval(x),
            Self::Interpolation(fh) => fh.eval(x),
        }
    }
}

impl From<LinearFit> for FittedCurve {
    fn from(fit: LinearFit) -> Self {
        Self::Linear(fit)
    }
}

impl From<FloaterHormann> for FittedCurve {
    fn from(fh: FloaterHormann) -> Self {
        Self::Interpolation(fh)
    }
}
