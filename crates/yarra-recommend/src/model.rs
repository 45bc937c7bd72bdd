//! Trained factor model: prediction and top-N recommendation.

use std::cmp::Ordering;

use ndarray::{Array1, Array2};

use crate::error::{RecommendError, Result};

/// A trained pair of factor matrices.
///
/// `user_factors` is n_users × k and `item_factors` is k × n_items. A
/// value of this type only exists after training has completed; it is
/// immutable from then on, and a fresh training run produces a fresh
/// model.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorModel {
    user_factors: Array2<f64>,
    item_factors: Array2<f64>,
}

impl FactorModel {
    pub(crate) fn from_factors(user_factors: Array2<f64>, item_factors: Array2<f64>) -> Self {
        debug_assert_eq!(user_factors.ncols(), item_factors.nrows());
        Self {
            user_factors,
            item_factors,
        }
    }

    /// Number of users the model was trained on.
    pub fn n_users(&self) -> usize {
        self.user_factors.nrows()
    }

    /// Number of items the model was trained on.
    pub fn n_items(&self) -> usize {
        self.item_factors.ncols()
    }

    /// Number of latent features.
    pub fn latent_features(&self) -> usize {
        self.user_factors.ncols()
    }

    /// Predicted rating for a (user, item) index pair.
    ///
    /// The raw dot product of the user's factor row and the item's
    /// factor column; not clipped to any rating scale, so callers whose
    /// domain bounds ratings (say 1 to 5) clip themselves.
    ///
    /// # Errors
    /// Returns [`RecommendError::IndexOutOfRange`] for either index.
    pub fn predict(&self, user: usize, item: usize) -> Result<f64> {
        if user >= self.n_users() {
            return Err(RecommendError::IndexOutOfRange {
                axis: "user",
                index: user,
                len: self.n_users(),
            });
        }
        if item >= self.n_items() {
            return Err(RecommendError::IndexOutOfRange {
                axis: "item",
                index: item,
                len: self.n_items(),
            });
        }
        Ok(self.user_factors.row(user).dot(&self.item_factors.column(item)))
    }

    /// Top-N item indices for a user, best first.
    ///
    /// Scores every item by dot product and returns exactly
    /// `min(top_n, n_items)` indices ordered by descending predicted
    /// rating, ties broken by ascending item index so the output is
    /// deterministic.
    ///
    /// # Errors
    /// Returns [`RecommendError::UnknownUser`] for a user index outside
    /// the trained index space. Falling back to a popularity ranking
    /// for such users is the caller's policy, not this model's.
    pub fn recommend(&self, user: usize, top_n: usize) -> Result<Vec<usize>> {
        if user >= self.n_users() {
            return Err(RecommendError::UnknownUser(user));
        }

        let scores: Array1<f64> = self.user_factors.row(user).dot(&self.item_factors);
        let mut ranked: Vec<usize> = (0..self.n_items()).collect();
        ranked.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });
        ranked.truncate(top_n);
        Ok(ranked)
    }
}
