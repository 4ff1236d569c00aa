//! Creature catalog domain types and type-effectiveness aggregation.
//!
//! # Overview
//!
//! `typedex-analytics` sits between `typedex-protocol` (wire payloads) and the
//! consumers that fetch and display a catalog:
//!
//! ```text
//! typedex-protocol (PokeAPI payloads)
//!        │
//!        ▼
//! typedex-analytics (domain types + aggregation) ← THIS CRATE
//!        │
//!        ├─> typedex-client (fetches catalogs as domain types)
//!        └─> typedex-cli (renders statistics)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Creature`] - One catalog entry with its type names
//! - [`TypeRecord`] - A type and its six [`DamageRelations`] sets
//! - [`Effectiveness`] - Single-hit multiplier (0, 0.5, 1, 2)
//!
//! ## Aggregation
//! - [`compute_type_distribution`] - Creatures per type, with percentages
//! - [`compute_type_combinations`] - Top multi-type combinations
//! - [`build_effectiveness_matrix`] - Complete attacker × defender grid
//! - [`compute_type_rankings`] - Offensive/defensive scores with sorted views
//! - [`DerivedStatistics`] - All of the above for one snapshot
//!
//! The aggregation functions are pure and synchronous. Their outputs depend
//! only on the input values, not on the order of the input slices.
//!
//! # Example Usage
//!
//! ```
//! use typedex_analytics::{Creature, Effectiveness, TypeRecord};
//! use typedex_analytics::{build_effectiveness_matrix, compute_type_distribution};
//!
//! let creatures = vec![
//!     Creature::new(1, "bulbasaur", ["grass", "poison"]),
//!     Creature::new(4, "charmander", ["fire"]),
//! ];
//! let shares = compute_type_distribution(&creatures);
//! assert_eq!(shares[0].type_name, "fire");
//!
//! let types = vec![
//!     TypeRecord::new(10, "fire").with_double_damage_to("grass"),
//!     TypeRecord::new(12, "grass").with_half_damage_to("fire"),
//! ];
//! let matrix = build_effectiveness_matrix(&types);
//! assert_eq!(matrix.get("fire", "grass"), Some(Effectiveness::SuperEffective));
//! ```

pub mod query;
pub mod stats;
pub mod types;

// Re-export main types at crate root for convenience
pub use stats::{
    COMBINATION_LIMIT, CatalogSummary, DerivedStatistics, EffectivenessMatrix, TypeCombination,
    TypeRanking, TypeRankings, TypeShare, build_effectiveness_matrix, compute_summary,
    compute_type_combinations, compute_type_distribution, compute_type_rankings,
};
pub use types::{Creature, DamageRelations, Effectiveness, PLACEHOLDER_SPRITE, TypeRecord};
