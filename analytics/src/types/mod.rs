//! Domain types for the creature and type catalogs

mod creature;
mod effectiveness;
mod type_record;

pub use creature::{Creature, PLACEHOLDER_SPRITE};
pub use effectiveness::Effectiveness;
pub use type_record::{DamageRelations, TypeRecord, canonical_order};
