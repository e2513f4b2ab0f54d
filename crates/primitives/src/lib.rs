#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/baryfit/baryfit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod vector;
pub use vector::Vector;

mod samples;
pub use samples::Samples;

mod error;
pub use error::PrimitiveError;
