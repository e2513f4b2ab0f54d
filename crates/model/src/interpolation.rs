//! Interpolation-based regression.
//!
//! Samples are averaged into at most `size` equal-width buckets over the
//! x-range and a Floater–Hormann interpolant is fitted through the bucket
//! centroids. Averaging removes most of the noise while the rational
//! interpolant follows non-linear trends that a straight line cannot.

use baryfit_math::FloaterHormann;
use baryfit_primitives::{Samples, Vector};
use baryfit_traits::{Regression, RegressionError};

use crate::{
    FittedCurve,
    error::{regression_error, sample_error},
};

/// Number of buckets used when none is configured.
pub const DEFAULT_BUCKETS: usize = 10;

/// Configuration for interpolation regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationConfig {
    /// Maximum number of bucket centroids (0 selects the default of 10).
    pub size: usize,
    /// Floater–Hormann blend degree (0 selects the automatic degree).
    pub degree: usize,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self { size: DEFAULT_BUCKETS, degree: 0 }
    }
}

/// Average samples into `size` equal-width buckets over `[min(x), max(x)]`.
///
/// Returns one `(mean x, mean y)` centroid per non-empty bucket, in
/// increasing bucket order. A sample on the upper edge joins the last bucket,
/// and when all nodes coincide every sample falls into the first one.
///
/// # Errors
/// Returns `RegressionError::InvalidConfig` if `size` is zero.
pub fn bucket_centroids(samples: &Samples, size: usize) -> Result<Samples, RegressionError> {
    if size == 0 {
        return Err(RegressionError::InvalidConfig("bucket count must be positive".to_string()));
    }

    let x0 = samples.x().min();
    let width = (samples.x().max() - x0) / size as f64;

    let mut counts = vec![0_usize; size];
    let mut sum_x = vec![0.0; size];
    let mut sum_y = vec![0.0; size];
    for (&x, &y) in samples.x().iter().zip(samples.y()) {
        let j = if width > 0.0 { ((x - x0) / width) as usize } else { 0 };
        let j = j.min(size - 1);
        counts[j] += 1;
        sum_x[j] += x;
        sum_y[j] += y;
    }

    let mut cx = Vector::default();
    let mut cy = Vector::default();
    for ((&count, sx), sy) in counts.iter().zip(sum_x).zip(sum_y) {
        if count > 0 {
            cx.push(sx / count as f64);
            cy.push(sy / count as f64);
        }
    }

    tracing::debug!(n = samples.len(), buckets = size, kept = cx.len(), "bucketed samples");

    Samples::new(cx, cy).map_err(sample_error)
}

/// Regression that interpolates bucket centroids.
#[derive(Debug, Clone, Default)]
pub struct InterpolationRegression {
    config: InterpolationConfig,
}

impl InterpolationRegression {
    /// Create a new regression with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InterpolationConfig::default())
    }

    /// Create a new regression with custom configuration.
    #[must_use]
    pub const fn with_config(config: InterpolationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    fn bucket_count(&self) -> usize {
        if self.config.size == 0 { DEFAULT_BUCKETS } else { self.config.size }
    }
}

impl Regression for InterpolationRegression {
    type Fitted = FittedCurve;

    fn name(&self) -> &str {
        "interpolation"
    }

    fn fit(&self, x: &[f64], y: &[f64]) -> Result<Self::Fitted, RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch { x_len: x.len(), y_len: y.len() });
        }

        let size = self.bucket_count();
        let fitted = if size >= x.len() {
            FloaterHormann::new(Some(x), y, self.config.degree)
        } else {
            let samples = Samples::new(Vector::from(x.to_vec()), Vector::from(y.to_vec()))
                .map_err(sample_error)?;
            let points = bucket_centroids(&samples, size)?;
            FloaterHormann::new(
                Some(points.x().as_slice()),
                points.y().as_slice(),
                self.config.degree,
            )
        };

        fitted.map(FittedCurve::Interpolation).map_err(regression_error)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use baryfit_traits::Interpolant;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;
    use crate::LinearRegression;

    const X0: f64 = 6.666;

    fn line(x: f64) -> f64 {
        3.0 * x + 2.0
    }

    fn quadratic(x: f64) -> f64 {
        x * x - 2.0 * x + 3.0
    }

    fn cubic(x: f64) -> f64 {
        x * x * x - 2.0 * x * x + 3.0 * x - 4.0
    }

    fn runge(x: f64) -> f64 {
        1.0 / (1.0 + x * x)
    }

    /// Relative error at `X0` of a regression fitted to `f` on [0, 10].
    fn relative_error<R: Regression>(regression: &R, f: fn(f64) -> f64, noise: Option<u64>) -> f64 {
        let x = Vector::range(0.0, 10.0, 100);
        let y = match noise {
            // ±3% uniform perturbation
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                x.iter()
                    .map(|&v| f(v) * (1.0 + 2.0 * (rng.gen_range(0.0..1.0) - 0.5) * 0.03))
                    .collect()
            }
            None => x.map(f),
        };
        let fitted = regression.fit(x.as_slice(), y.as_slice()).unwrap();
        (fitted.eval(X0) / f(X0) - 1.0).abs()
    }

    const NOISY_TRIALS: u64 = 200;

    fn mean_noisy_error<R: Regression>(regression: &R, f: fn(f64) -> f64) -> f64 {
        (0..NOISY_TRIALS).map(|seed| relative_error(regression, f, Some(seed))).sum::<f64>()
            / NOISY_TRIALS as f64
    }

    #[test]
    fn config_defaults() {
        let config = InterpolationConfig::default();
        assert_eq!(config.size, 10);
        assert_eq!(config.degree, 0);
    }

    #[test]
    fn bucket_centroids_average_each_bucket() {
        let x = Vector::from(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let y = x.map(|v| 10.0 * v);
        let samples = Samples::new(x, y).unwrap();

        let centroids = bucket_centroids(&samples, 2).unwrap();
        assert_eq!(centroids.len(), 2);
        assert_relative_eq!(centroids.x()[0], 1.0);
        assert_relative_eq!(centroids.y()[0], 10.0);
        assert_relative_eq!(centroids.x()[1], 4.0);
        assert_relative_eq!(centroids.y()[1], 40.0);
    }

    #[test]
    fn bucket_centroids_skip_empty_buckets() {
        let x = Vector::from(vec![0.0, 0.1, 9.9, 10.0]);
        let y = Vector::from(vec![1.0, 3.0, 5.0, 7.0]);
        let samples = Samples::new(x, y).unwrap();

        let centroids = bucket_centroids(&samples, 5).unwrap();
        assert_eq!(centroids.len(), 2);
        assert_relative_eq!(centroids.x()[0], 0.05);
        assert_relative_eq!(centroids.y()[0], 2.0);
        assert_relative_eq!(centroids.x()[1], 9.95);
        assert_relative_eq!(centroids.y()[1], 6.0);
    }

    #[test]
    fn bucket_centroids_zero_size() {
        let samples = Samples::from_values(Vector::new(4, 1.0));
        assert!(matches!(
            bucket_centroids(&samples, 0),
            Err(RegressionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn coincident_nodes_collapse_to_one_bucket() {
        let err = InterpolationRegression::with_config(InterpolationConfig { size: 2, degree: 0 })
            .fit(&[3.0; 5], &[1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap_err();
        assert_eq!(err, RegressionError::InsufficientData { required: 2, actual: 1 });
    }

    #[test]
    fn few_samples_are_interpolated_directly() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [1.0, 3.0, 2.0, 5.0, 4.0];
        let f = InterpolationRegression::new().fit(&x, &y).unwrap();
        for (xi, yi) in x.iter().zip(&y) {
            assert_eq!(f.eval(*xi), *yi);
        }
    }

    #[test]
    fn direct_interpolation_keeps_input_nodes() {
        let x = [0.0, 0.5, 2.0, 3.5];
        let y = [1.0, -1.0, 2.0, 0.0];
        let FittedCurve::Interpolation(fh) = InterpolationRegression::new().fit(&x, &y).unwrap()
        else {
            panic!("expected an interpolant");
        };
        assert_eq!(fh.nodes().to_vec(), x.to_vec());
        assert_eq!(fh.values().to_vec(), y.to_vec());

        let err = InterpolationRegression::new().fit(&x, &y[..3]).unwrap_err();
        assert_eq!(err, RegressionError::LengthMismatch { x_len: 4, y_len: 3 });
    }

    #[test]
    fn zero_size_uses_default_buckets() {
        let x = Vector::range(0.0, 10.0, 100);
        let y = x.map(cubic);
        let default = InterpolationRegression::new().fit(x.as_slice(), y.as_slice()).unwrap();
        let zero = InterpolationRegression::with_config(InterpolationConfig { size: 0, degree: 0 })
            .fit(x.as_slice(), y.as_slice())
            .unwrap();
        assert_eq!(default, zero);
    }

    #[test]
    fn length_mismatch_is_not_truncated() {
        let err = InterpolationRegression::new().fit(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, RegressionError::LengthMismatch { x_len: 3, y_len: 2 });

        let x = Vector::range(0.0, 1.0, 50);
        let err = InterpolationRegression::new().fit(x.as_slice(), &[0.0; 49]).unwrap_err();
        assert_eq!(err, RegressionError::LengthMismatch { x_len: 50, y_len: 49 });
    }

    #[test]
    fn degree_out_of_range_for_centroids() {
        let x = Vector::range(0.0, 1.0, 50);
        let y = x.map(f64::exp);
        let regression =
            InterpolationRegression::with_config(InterpolationConfig { size: 5, degree: 5 });
        let err = regression.fit(x.as_slice(), y.as_slice()).unwrap_err();
        assert_eq!(err, RegressionError::DegreeOutOfRange { degree: 5, n: 5 });
    }

    #[rstest]
    #[case(line)]
    #[case(quadratic)]
    #[case(cubic)]
    #[case(runge)]
    fn noiseless_targets_within_one_percent(#[case] f: fn(f64) -> f64) {
        assert!(relative_error(&InterpolationRegression::new(), f, None) < 0.01);
    }

    #[rstest]
    #[case(line)]
    #[case(quadratic)]
    #[case(cubic)]
    #[case(runge)]
    fn noisy_targets_within_one_percent(#[case] f: fn(f64) -> f64) {
        let err = mean_noisy_error(&InterpolationRegression::new(), f);
        assert!(err < 0.01, "mean relative error {err}");
    }

    #[rstest]
    #[case(quadratic)]
    #[case(cubic)]
    #[case(runge)]
    fn outperforms_linear_on_curved_targets(#[case] f: fn(f64) -> f64) {
        let interpolation = mean_noisy_error(&InterpolationRegression::new(), f);
        let linear = mean_noisy_error(&LinearRegression::new(), f);
        assert!(linear > 10.0 * interpolation, "linear {linear}, interpolation {interpolation}");
    }

    #[rstest]
    #[case(line, 0.0)]
    #[case(quadratic, 0.168)]
    #[case(cubic, 0.427)]
    #[case(runge, 1.176)]
    fn linear_regression_bias(#[case] f: fn(f64) -> f64, #[case] expected: f64) {
        let err = relative_error(&LinearRegression::new(), f, None);
        assert_relative_eq!(err, expected, epsilon = 0.01);
    }
}
