#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/baryfit/baryfit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod floater_hormann;
pub use floater_hormann::{FloaterHormann, default_degree, fh_weights, interpolate};

mod linear;
pub use linear::{LinearFit, fit_line};

mod error;
pub use error::MathError;
