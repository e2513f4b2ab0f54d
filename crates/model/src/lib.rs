#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/baryfit/baryfit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod fitted;
pub use fitted::FittedCurve;

mod linear;
pub use linear::LinearRegression;

mod interpolation;
pub use interpolation::{
    DEFAULT_BUCKETS, InterpolationConfig, InterpolationRegression, bucket_centroids,
};

mod regressor;
pub use regressor::{RegressionKind, Regressor, build_regression};

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use baryfit_traits::{Interpolant, Regression, RegressionError};

    pub use super::{
        FittedCurve, InterpolationConfig, ModelError, RegressionKind, Regressor, build_regression,
    };
}
