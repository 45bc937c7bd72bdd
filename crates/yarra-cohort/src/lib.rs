#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/yarra-analytics/yarra/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod schedule;
pub mod window;

pub use error::{CohortError, Result};
pub use schedule::{cut_off_dates, test_window, training_windows};
pub use window::{CohortConfig, DateWindow, compute_window};
