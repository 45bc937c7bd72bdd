#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yarra-analytics/yarra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export the two independent cores
pub use yarra_cohort as cohort;
pub use yarra_recommend as recommend;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
