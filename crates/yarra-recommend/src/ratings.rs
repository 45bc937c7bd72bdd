//! Sparse user-by-item ratings with dense index mapping.

use std::collections::HashMap;

/// Sparse user-by-item ratings matrix.
///
/// Built from raw `(user_id, item_id, rating)` triples. Raw ids are
/// mapped to dense 0-based indices in order of first appearance, so the
/// matrix dimensions equal the number of distinct users and items seen.
/// A duplicate (user, item) pair keeps the maximum rating.
///
/// A stored rating greater than zero counts as observed; a rating of
/// exactly zero (or below) is treated as missing. This convention is
/// preserved from the upstream dataset handling and means a genuine
/// zero rating cannot be represented.
#[derive(Debug, Clone, Default)]
pub struct RatingsMatrix {
    entries: HashMap<(usize, usize), f64>,
    user_ids: Vec<u64>,
    item_ids: Vec<u64>,
    user_lookup: HashMap<u64, usize>,
    item_lookup: HashMap<u64, usize>,
}

impl RatingsMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from raw rating triples.
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (u64, u64, f64)>,
    {
        let mut matrix = Self::new();
        for (user_id, item_id, rating) in triples {
            matrix.add(user_id, item_id, rating);
        }
        matrix
    }

    /// Record one rating, keeping the maximum for duplicate pairs.
    pub fn add(&mut self, user_id: u64, item_id: u64, rating: f64) {
        let user = intern(&mut self.user_lookup, &mut self.user_ids, user_id);
        let item = intern(&mut self.item_lookup, &mut self.item_ids, item_id);
        self.entries
            .entry((user, item))
            .and_modify(|existing| *existing = existing.max(rating))
            .or_insert(rating);
    }

    /// Number of distinct users.
    pub fn n_users(&self) -> usize {
        self.user_ids.len()
    }

    /// Number of distinct items.
    pub fn n_items(&self) -> usize {
        self.item_ids.len()
    }

    /// Stored rating for a (user, item) index pair, observed or not.
    pub fn get(&self, user: usize, item: usize) -> Option<f64> {
        self.entries.get(&(user, item)).copied()
    }

    /// Dense index for a raw user id.
    pub fn user_index(&self, user_id: u64) -> Option<usize> {
        self.user_lookup.get(&user_id).copied()
    }

    /// Raw user id for a dense index.
    pub fn user_id(&self, user: usize) -> Option<u64> {
        self.user_ids.get(user).copied()
    }

    /// Dense index for a raw item id.
    pub fn item_index(&self, item_id: u64) -> Option<usize> {
        self.item_lookup.get(&item_id).copied()
    }

    /// Raw item id for a dense index.
    pub fn item_id(&self, item: usize) -> Option<u64> {
        self.item_ids.get(item).copied()
    }

    /// Number of observed (rating > 0) entries.
    pub fn observed_count(&self) -> usize {
        self.entries.values().filter(|&&r| r > 0.0).count()
    }

    /// Observed entries as `(user, item, rating)`, sorted by (user, item).
    ///
    /// Sorting makes training passes deterministic for a given matrix.
    pub fn observed(&self) -> Vec<(usize, usize, f64)> {
        let mut observed: Vec<(usize, usize, f64)> = self
            .entries
            .iter()
            .filter(|&(_, &rating)| rating > 0.0)
            .map(|(&(user, item), &rating)| (user, item, rating))
            .collect();
        observed.sort_by_key(|&(user, item, _)| (user, item));
        observed
    }
}

fn intern(lookup: &mut HashMap<u64, usize>, ids: &mut Vec<u64>, id: u64) -> usize {
    *lookup.entry(id).or_insert_with(|| {
        ids.push(id);
        ids.len() - 1
    })
}
