#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/baryfit/baryfit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod coerce;
pub use coerce::{AsF64, to_f64, to_vector};

mod frame;
pub use frame::{frame_samples, lazy_samples, series_to_vector};

mod error;
pub use error::UtilsError;
