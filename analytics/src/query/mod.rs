//! Query helpers for display
//!
//! Matchup lookups over an effectiveness matrix and the search/sort/page
//! view over the raw creature catalog.

mod catalog;
mod matchup;

pub use catalog::{CatalogPage, CatalogQuery, DEFAULT_PAGE_SIZE, SortColumn};
pub use matchup::{
    effectiveness_multi,
    immunities,
    resistances,
    super_effective_targets,
    weaknesses,
};
