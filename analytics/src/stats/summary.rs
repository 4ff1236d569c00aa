//! Headline numbers for a catalog snapshot

use crate::stats::combinations::tally_combinations;
use crate::types::{Creature, TypeRecord};

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total_creatures: usize,
    pub total_types: usize,

    /// Distinct multi-type combinations (not capped)
    pub combination_count: usize,

    /// Mean base experience rounded to the nearest integer; 0 for an empty catalog
    pub average_base_experience: u32,
}

pub fn compute_summary(creatures: &[Creature], types: &[TypeRecord]) -> CatalogSummary {
    CatalogSummary {
        total_creatures: creatures.len(),
        total_types: types.len(),
        combination_count: tally_combinations(creatures).len(),
        average_base_experience: average_base_experience(creatures),
    }
}

fn average_base_experience(creatures: &[Creature]) -> u32 {
    if creatures.is_empty() {
        return 0;
    }
    let total: u64 = creatures.iter().map(|c| u64::from(c.base_experience)).sum();
    (total as f64 / creatures.len() as f64).round() as u32
}
