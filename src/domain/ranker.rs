//! Stable tag-match ranking shared by the profession and income-offer
//! catalogues.

use serde::Serialize;

use super::profile::Motivation;

/// Score given to a candidate whose tag-set contains the primary
/// motivation.
const TAG_HIT_SCORE: u8 = 2;

/// Score given to every other candidate.
const TAG_MISS_SCORE: u8 = 1;

/// A static catalogue candidate: a recommendation with its motivation
/// tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    pub name: &'static str,
    pub tags: &'static [Motivation],
}

impl CatalogueEntry {
    /// True when the entry is tagged with the given motivation.
    pub fn has_tag(&self, motivation: Motivation) -> bool {
        self.tags.contains(&motivation)
    }
}

/// Orders catalogue entries by motivation fit, truncated to `limit`.
///
/// Candidates tagged with the primary motivation score 2, the rest score
/// 1. The descending sort is stable, so inside each score bucket the
/// catalogue order is preserved; identical inputs always produce
/// identical output.
pub fn rank_entries(
    entries: &[CatalogueEntry],
    primary: Motivation,
    limit: usize,
) -> Vec<CatalogueEntry> {
    let mut ranked: Vec<CatalogueEntry> = entries.to_vec();
    ranked.sort_by_key(|entry| {
        let score = if entry.has_tag(primary) {
            TAG_HIT_SCORE
        } else {
            TAG_MISS_SCORE
        };
        std::cmp::Reverse(score)
    });
    ranked.truncate(limit);
    ranked
}
