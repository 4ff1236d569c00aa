//! How often each type appears across the creature catalog

use std::collections::BTreeMap;

use crate::types::Creature;

/// Share of the catalog carrying one type
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShare {
    pub type_name: String,

    /// Number of creatures listing this type
    pub count: usize,

    /// `count / catalog size * 100`, in `[0, 100]`
    pub percentage: f64,
}

/// Count creatures per type.
///
/// A creature counts once per distinct type it lists, so every `count` is at
/// most `creatures.len()`. Creatures with no types contribute nothing.
/// Ordered by count descending, then type name ascending. An empty catalog
/// yields an empty table.
pub fn compute_type_distribution(creatures: &[Creature]) -> Vec<TypeShare> {
    let counts = creatures
        .iter()
        .flat_map(Creature::distinct_types)
        .fold(BTreeMap::<&str, usize>::new(), |mut acc, name| {
            *acc.entry(name).or_default() += 1;
            acc
        });

    let mut shares: Vec<TypeShare> = counts
        .into_iter()
        .map(|(name, count)| TypeShare {
            type_name: name.to_string(),
            count,
            percentage: percentage(count, creatures.len()),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.type_name.cmp(&b.type_name))
    });
    shares
}

/// `count` as a percentage of `total`; a zero total is 0%, never NaN
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
