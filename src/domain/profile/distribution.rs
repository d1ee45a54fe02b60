//! Score distribution over a fixed category catalogue.

use serde::{Deserialize, Serialize};

/// A mapping from category key to non-negative score, kept in catalogue
/// order so that every tie-break is stable and reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreDistribution<K> {
    entries: Vec<(K, f64)>,
}

impl<K: Copy + PartialEq> ScoreDistribution<K> {
    /// Creates a zero distribution over the given catalogue order.
    pub fn from_keys(keys: &[K]) -> Self {
        Self {
            entries: keys.iter().map(|k| (*k, 0.0)).collect(),
        }
    }

    /// Adds weight to a category.
    pub fn add(&mut self, key: K, weight: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 += weight;
        }
    }

    /// Returns the score for a category (0 for unknown keys).
    pub fn get(&self, key: K) -> f64 {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, score)| *score)
            .unwrap_or(0.0)
    }

    /// Returns the sum of all scores.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, score)| score).sum()
    }

    /// True when no category holds any score.
    pub fn is_zero(&self) -> bool {
        self.total() == 0.0
    }

    /// Scales all scores so they sum to 1.
    ///
    /// When the raw total is 0 the zero vector is preserved untouched;
    /// normalization never produces NaN.
    pub fn normalize(&mut self) {
        let total = self.total();
        if total == 0.0 {
            return;
        }
        for entry in &mut self.entries {
            entry.1 /= total;
        }
    }

    /// Returns the two highest-scoring categories, descending.
    ///
    /// The sort is stable, so equal scores resolve to catalogue order.
    /// This is the only tie-break rule in the system.
    pub fn top2(&self) -> [(K, f64); 2] {
        debug_assert!(self.entries.len() >= 2);
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        [sorted[0], sorted[1]]
    }

    /// Returns the count of categories holding a nonzero score.
    pub fn nonzero_count(&self) -> usize {
        self.entries.iter().filter(|(_, score)| *score > 0.0).count()
    }

    /// Iterates entries in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.entries.iter().copied()
    }
}
