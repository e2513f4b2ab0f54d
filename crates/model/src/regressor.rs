//! Regression factory.

use std::str::FromStr;

use baryfit_primitives::Samples;
use baryfit_traits::{Regression, RegressionError};

use crate::{FittedCurve, InterpolationConfig, InterpolationRegression, LinearRegression, ModelError};

/// The kind of regression to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionKind {
    /// Closed-form least squares line.
    Linear,
    /// Floater–Hormann interpolation of bucket centroids.
    Interpolation(InterpolationConfig),
}

impl Default for RegressionKind {
    fn default() -> Self {
        Self::Interpolation(InterpolationConfig::default())
    }
}

impl std::fmt::Display for RegressionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Interpolation(_) => write!(f, "interpolation"),
        }
    }
}

impl FromStr for RegressionKind {
    type Err = ModelError;

    /// Parse `"linear"` or `"interpolation"` (case-insensitive). The
    /// interpolation kind uses the default configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "interpolation" => Ok(Self::Interpolation(InterpolationConfig::default())),
            _ => Err(ModelError::UnknownRegression(s.to_string())),
        }
    }
}

/// A regression selected at runtime.
#[derive(Debug, Clone)]
pub enum Regressor {
    /// Linear regression.
    Linear(LinearRegression),
    /// Interpolation regression.
    Interpolation(InterpolationRegression),
}

impl Regressor {
    /// Get the kind of this regression.
    #[must_use]
    pub const fn kind(&self) -> RegressionKind {
        match self {
            Self::Linear(_) => RegressionKind::Linear,
            Self::Interpolation(r) => RegressionKind::Interpolation(*r.config()),
        }
    }

    /// Fit a sample buffer.
    ///
    /// # Errors
    /// Returns `ModelError::Regression` if the fit fails.
    pub fn fit_samples(&self, samples: &Samples) -> Result<FittedCurve, ModelError> {
        Ok(self.fit(samples.x().as_slice(), samples.y().as_slice())?)
    }
}

impl Regression for Regressor {
    type Fitted = FittedCurve;

    fn name(&self) -> &str {
        match self {
            Self::Linear(r) => r.name(),
            Self::Interpolation(r) => r.name(),
        }
    }

    fn fit(&self, x: &[f64], y: &[f64]) -> Result<Self::Fitted, RegressionError> {
        match self {
            Self::Linear(r) => r.fit(x, y),
            Self::Interpolation(r) => r.fit(x, y),
        }
    }
}

/// Build a regression of the given kind.
#[must_use]
pub const fn build_regression(kind: RegressionKind) -> Regressor {
    match kind {
        RegressionKind::Linear => Regressor::Linear(LinearRegression::new()),
        RegressionKind::Interpolation(config) => {
            Regressor::Interpolation(InterpolationRegression::with_config(config))
        }
    }
}
