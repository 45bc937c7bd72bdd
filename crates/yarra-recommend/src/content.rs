//! Content-based item similarity.
//!
//! No training involved: items are compared by the raw dot product of
//! their content-feature rows. This is dot-product similarity, not
//! cosine similarity; rows are deliberately not normalized, so items
//! with more features set score higher across the board.

use ndarray::Array2;

use crate::error::{RecommendError, Result};

/// Items most similar to `item`, by dot product of content features.
///
/// Scores every row of `item_features` against the row for `item` and
/// selects **all** items whose similarity ties the maximum, in
/// ascending index order, truncated to `top_n`. The queried item itself
/// is not excluded (its self-similarity usually is the maximum), which
/// matches the upstream behavior.
///
/// # Errors
/// Returns [`RecommendError::IndexOutOfRange`] when `item` is not a row
/// of `item_features`.
pub fn similar_items(item_features: &Array2<f64>, item: usize, top_n: usize) -> Result<Vec<usize>> {
    let n_items = item_features.nrows();
    if item >= n_items {
        return Err(RecommendError::IndexOutOfRange {
            axis: "item",
            index: item,
            len: n_items,
        });
    }

    let target = item_features.row(item);
    let similarities: Vec<f64> = (0..n_items)
        .map(|other| target.dot(&item_features.row(other)))
        .collect();

    let best = similarities
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let mut tied: Vec<usize> = similarities
        .iter()
        .enumerate()
        .filter(|&(_, &similarity)| similarity == best)
        .map(|(index, _)| index)
        .collect();
    tied.truncate(top_n);
    Ok(tied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // Binary genre-style features: items 0 and 1 share every feature,
    // item 2 shares one, item 3 shares none.
    fn features() -> Array2<f64> {
        array![
            [1.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]
    }

    #[test]
    fn test_all_tied_for_best_are_returned() {
        // Items 0 and 1 both score 2 against item 0.
        assert_eq!(similar_items(&features(), 0, 10).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_tied_set_is_truncated_to_top_n() {
        assert_eq!(similar_items(&features(), 0, 1).unwrap(), vec![0]);
    }

    #[test]
    fn test_queried_item_shares_the_tie() {
        // Item 2's own row scores 1, but items 0 and 1 score 1 too:
        // the tied set keeps ascending index order.
        assert_eq!(similar_items(&features(), 2, 10).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_index_out_of_range() {
        assert_eq!(
            similar_items(&features(), 4, 3).unwrap_err(),
            RecommendError::IndexOutOfRange {
                axis: "item",
                index: 4,
                len: 4,
            }
        );
    }
}
