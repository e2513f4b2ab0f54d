//! # baryfit
//!
//! Floater–Hormann barycentric rational interpolation and the regressions
//! built on it.
//!
//! This crate provides a unified interface to the baryfit workspace.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Sample buffers (`Vector`, `Samples`)
//! - `traits`: Trait abstractions (`Interpolant`, `Regression`)
//! - `math`: Weight generation, interpolant evaluation, line fitting
//! - `model`: Linear and interpolation regressions
//! - `utils`: Numeric coercion and polars helpers
//!
//! ## Example
//!
//! ```rust
//! use baryfit::{math::FloaterHormann, primitives::Vector};
//!
//! let x = Vector::range(-1.0, 1.0, 5);
//! let y = x.map(|v| 1.0 / (1.0 + v * v));
//! let f = FloaterHormann::new(Some(x.as_slice()), y.as_slice(), 0).unwrap();
//! assert_eq!(f.eval(0.0), 1.0);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use baryfit_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use baryfit_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use baryfit_math as math;
#[cfg(feature = "model")]
#[doc(inline)]
pub use baryfit_model as model;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use baryfit_utils as utils;
