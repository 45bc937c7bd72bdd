#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yarra-analytics/yarra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod funk_svd;
pub mod model;
pub mod ratings;

pub use content::similar_items;
pub use error::{RecommendError, Result};
pub use funk_svd::{FunkSvdConfig, train, train_with_rng};
pub use model::FactorModel;
pub use ratings::RatingsMatrix;
