//! Per-type offensive and defensive scores

use crate::types::{TypeRecord, canonical_order};

/// Offensive/defensive profile of one type, counted from its relation sets
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRanking {
    pub type_name: String,

    /// `|double_damage_to| - |half_damage_to| - |no_damage_to|`
    pub offensive_score: i32,

    /// `|half_damage_from| + |no_damage_from| - |double_damage_from|`
    pub defensive_score: i32,

    /// `|double_damage_to|`
    pub super_effective_count: usize,

    /// `|double_damage_from|`
    pub weak_to_count: usize,
}

impl TypeRanking {
    pub fn from_record(record: &TypeRecord) -> Self {
        let r = &record.damage_relations;
        let count = |len: usize| len as i32;

        Self {
            type_name: record.name.clone(),
            offensive_score: count(r.double_damage_to.len())
                - count(r.half_damage_to.len())
                - count(r.no_damage_to.len()),
            defensive_score: count(r.half_damage_from.len()) + count(r.no_damage_from.len())
                - count(r.double_damage_from.len()),
            super_effective_count: r.double_damage_to.len(),
            weak_to_count: r.double_damage_from.len(),
        }
    }
}

/// Rankings for a whole type catalog.
///
/// Scores are computed once; the sorted views only reorder references.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRankings {
    entries: Vec<TypeRanking>,
}

impl TypeRankings {
    /// Entries in catalog order (ascending id, then name)
    pub fn entries(&self) -> &[TypeRanking] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeRanking> {
        self.entries.iter().find(|e| e.type_name == type_name)
    }

    /// Best attackers first; equal scores keep catalog order
    pub fn by_offense(&self) -> Vec<&TypeRanking> {
        self.sorted_desc(|e| i64::from(e.offensive_score))
    }

    /// Most vulnerable (most 2× weaknesses) first; equal counts keep catalog order
    pub fn by_vulnerability(&self) -> Vec<&TypeRanking> {
        self.sorted_desc(|e| e.weak_to_count as i64)
    }

    /// Sturdiest defenders first; equal scores keep catalog order
    pub fn by_defense(&self) -> Vec<&TypeRanking> {
        self.sorted_desc(|e| i64::from(e.defensive_score))
    }

    fn sorted_desc<F>(&self, key: F) -> Vec<&TypeRanking>
    where
        F: Fn(&TypeRanking) -> i64,
    {
        let mut view: Vec<&TypeRanking> = self.entries.iter().collect();
        // sort_by is stable
        view.sort_by(|a, b| key(b).cmp(&key(a)));
        view
    }
}

/// Score every type in `types`
pub fn compute_type_rankings(types: &[TypeRecord]) -> TypeRankings {
    TypeRankings {
        entries: canonical_order(types)
            .into_iter()
            .map(TypeRanking::from_record)
            .collect(),
    }
}
