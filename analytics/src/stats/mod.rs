//! Aggregation engine
//!
//! Pure functions from catalog slices to freshly built statistics. Nothing
//! here performs I/O or keeps state between calls, and every function is
//! total: empty input gives empty or zeroed output.

mod combinations;
mod distribution;
mod matrix;
mod rankings;
mod summary;

pub use combinations::{COMBINATION_LIMIT, TypeCombination, combination_key, compute_type_combinations};
pub use distribution::{TypeShare, compute_type_distribution};
pub use matrix::{EffectivenessMatrix, build_effectiveness_matrix, effectiveness_against};
pub use rankings::{TypeRanking, TypeRankings, compute_type_rankings};
pub use summary::{CatalogSummary, compute_summary};

use crate::types::{Creature, TypeRecord};

/// Every derived statistic for one catalog snapshot
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStatistics {
    pub type_distribution: Vec<TypeShare>,
    pub type_combinations: Vec<TypeCombination>,
    pub effectiveness_matrix: EffectivenessMatrix,
    pub type_rankings: TypeRankings,
    pub summary: CatalogSummary,
}

impl DerivedStatistics {
    /// Rebuild everything from scratch
    pub fn compute(creatures: &[Creature], types: &[TypeRecord]) -> Self {
        Self {
            type_distribution: compute_type_distribution(creatures),
            type_combinations: compute_type_combinations(creatures),
            effectiveness_matrix: build_effectiveness_matrix(types),
            type_rankings: compute_type_rankings(types),
            summary: compute_summary(creatures, types),
        }
    }
}
