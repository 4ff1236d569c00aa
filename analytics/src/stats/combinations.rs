//! Frequency of multi-type combinations

use std::collections::BTreeMap;

use crate::types::Creature;

/// Number of combinations kept by [`compute_type_combinations`]
pub const COMBINATION_LIMIT: usize = 10;

/// One multi-type combination and how many creatures have it
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCombination {
    /// Distinct type names sorted ascending and joined with `/`
    pub key: String,
    pub count: usize,
}

/// Canonical combination key of a creature, or `None` when it has fewer
/// than two distinct types
pub fn combination_key(creature: &Creature) -> Option<String> {
    let names = creature.distinct_types();
    (names.len() > 1).then(|| names.join("/"))
}

/// Tally every distinct combination key, sorted by key
pub(crate) fn tally_combinations(creatures: &[Creature]) -> BTreeMap<String, usize> {
    creatures
        .iter()
        .filter_map(combination_key)
        .fold(BTreeMap::new(), |mut acc, key| {
            *acc.entry(key).or_default() += 1;
            acc
        })
}

/// The most common multi-type combinations.
///
/// Single-type creatures are skipped. Ordered by count descending, then key
/// ascending, and capped at [`COMBINATION_LIMIT`] entries.
pub fn compute_type_combinations(creatures: &[Creature]) -> Vec<TypeCombination> {
    let mut combinations: Vec<TypeCombination> = tally_combinations(creatures)
        .into_iter()
        .map(|(key, count)| TypeCombination { key, count })
        .collect();

    combinations.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    combinations.truncate(COMBINATION_LIMIT);
    combinations
}
