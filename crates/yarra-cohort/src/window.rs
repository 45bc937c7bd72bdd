//! Observation/label windows around a cut-off date.
//!
//! A month count is decomposed into whole years plus a remainder, then
//! approximated in days: 365 per year, 30 per remaining lookback month,
//! 28 per remaining label month. This is deliberately not exact month
//! arithmetic; derived dates can drift one to three days around month
//! boundaries and callers are expected to tolerate that.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Window lengths around a cut-off date, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortConfig {
    /// How many months back from the cut-off date are considered for
    /// feature observation
    pub lookback_months: u32,
    /// Outcomes within this many months after the cut-off date are used
    /// as labels
    pub label_months: u32,
}

/// Observation and label bounds derived from a single cut-off date.
///
/// `first_considered` always falls on the 1st of its month and
/// `last_label` on the last calendar day of its month. For
/// `label_months >= 1` the dates satisfy
/// `first_considered <= cut_off < last_label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// Date separating the observation period from the label period
    pub cut_off: NaiveDate,
    /// First day considered for feature observation
    pub first_considered: NaiveDate,
    /// Last day considered for the label
    pub last_label: NaiveDate,
}

/// Derive the observation/label window around `cut_off`.
///
/// Pure and total: identical inputs always yield the identical window,
/// and every valid date produces one.
pub fn compute_window(cut_off: NaiveDate, config: &CohortConfig) -> DateWindow {
    let lookback = Duration::days(approx_days(config.lookback_months, 30));
    let first_considered = month_start(cut_off - lookback);

    let label = Duration::days(approx_days(config.label_months, 28));
    let last_label = month_end(cut_off + label);

    DateWindow {
        cut_off,
        first_considered,
        last_label,
    }
}

/// 365 days per whole year, `days_per_month` per remaining month.
const fn approx_days(months: u32, days_per_month: i64) -> i64 {
    let years = (months / 12) as i64;
    let rem = (months % 12) as i64;
    365 * years + days_per_month * rem
}

/// First calendar day of the month containing `date`.
pub(crate) fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Last calendar day of the month containing `date`.
pub(crate) fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .expect("month boundaries are valid dates")
}
