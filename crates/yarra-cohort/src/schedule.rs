//! Monthly cut-off schedules for stacked training sets.
//!
//! A training set is stacked from one snapshot per calendar month: each
//! month between a first and last cut-off date contributes the last day
//! of that month present in the range. The test window is anchored at
//! the last label date of the final training window, so test labels
//! never overlap the training label period.

use chrono::{Duration, NaiveDate};

use crate::error::{CohortError, Result};
use crate::window::{CohortConfig, DateWindow, compute_window, month_end, month_start};

/// Enumerate the monthly cut-off dates inside `[start_inclusive, end_inclusive]`.
///
/// Every calendar month with at least one day in the range contributes
/// exactly one date: the last day of that month that lies inside the
/// range. Boundary months are therefore clipped to the bounds rather
/// than extended to the calendar month end, and a single-day range
/// yields that day itself.
///
/// # Errors
/// Returns [`CohortError::InvalidRange`] when `start_inclusive` is after
/// `end_inclusive`.
pub fn cut_off_dates(
    start_inclusive: NaiveDate,
    end_inclusive: NaiveDate,
) -> Result<Vec<NaiveDate>> {
    if start_inclusive > end_inclusive {
        return Err(CohortError::InvalidRange {
            start: start_inclusive,
            end: end_inclusive,
        });
    }

    let mut cut_offs = Vec::new();
    let mut month = month_start(start_inclusive);
    while month <= end_inclusive {
        let month_last = month_end(month);
        cut_offs.push(month_last.min(end_inclusive));
        month = month_last + Duration::days(1);
    }
    Ok(cut_offs)
}

/// Build one [`DateWindow`] per monthly cut-off date between
/// `first_cut_off` and `last_cut_off`, in chronological order.
///
/// # Errors
/// Returns [`CohortError::InvalidRange`] when `first_cut_off` is after
/// `last_cut_off`.
pub fn training_windows(
    first_cut_off: NaiveDate,
    last_cut_off: NaiveDate,
    config: &CohortConfig,
) -> Result<Vec<DateWindow>> {
    let cut_offs = cut_off_dates(first_cut_off, last_cut_off)?;
    Ok(cut_offs
        .into_iter()
        .map(|cut_off| compute_window(cut_off, config))
        .collect())
}

/// Derive the test window from a training schedule.
///
/// The test cut-off is the last label date of the final training
/// window, which keeps the test label period disjoint from every
/// training label period.
///
/// # Errors
/// Returns [`CohortError::EmptyTrainingSet`] when `windows` is empty.
pub fn test_window(windows: &[DateWindow], config: &CohortConfig) -> Result<DateWindow> {
    let last = windows.last().ok_or(CohortError::EmptyTrainingSet)?;
    Ok(compute_window(last.last_label, config))
}
