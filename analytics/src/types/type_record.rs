//! Type records and their damage relations

use std::cmp::Ordering;
use std::collections::BTreeSet;

use typedex_protocol::{DamageRelationsPayload, NamedResource, TypePayload};

/// The six damage-relation sets of a type, keyed by type name.
///
/// Names are not resolved against the type catalog; a relation may name a
/// type that was never fetched.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageRelations {
    /// Types this type deals 2× damage to
    pub double_damage_to: BTreeSet<String>,
    /// Types that deal 2× damage to this type
    pub double_damage_from: BTreeSet<String>,
    /// Types this type deals 0.5× damage to
    pub half_damage_to: BTreeSet<String>,
    /// Types that deal 0.5× damage to this type
    pub half_damage_from: BTreeSet<String>,
    /// Types this type deals no damage to
    pub no_damage_to: BTreeSet<String>,
    /// Types that deal no damage to this type
    pub no_damage_from: BTreeSet<String>,
}

impl DamageRelations {
    /// Create from a provider payload; missing lists become empty sets
    pub fn from_protocol(payload: &DamageRelationsPayload) -> Self {
        Self {
            double_damage_to: names(&payload.double_damage_to),
            double_damage_from: names(&payload.double_damage_from),
            half_damage_to: names(&payload.half_damage_to),
            half_damage_from: names(&payload.half_damage_from),
            no_damage_to: names(&payload.no_damage_to),
            no_damage_from: names(&payload.no_damage_from),
        }
    }
}

fn names(list: &Option<Vec<NamedResource>>) -> BTreeSet<String> {
    list.iter()
        .flatten()
        .map(|resource| resource.name.clone())
        .collect()
}

/// One entry of the type catalog
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    /// Provider primary key
    pub id: u32,

    /// Type name, the join key against `Creature::types`
    pub name: String,

    pub damage_relations: DamageRelations,
}

impl TypeRecord {
    /// Create a type with no damage relations
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            damage_relations: DamageRelations::default(),
        }
    }

    /// Create from a provider payload
    pub fn from_protocol(payload: &TypePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.clone(),
            damage_relations: payload
                .damage_relations
                .as_ref()
                .map(DamageRelations::from_protocol)
                .unwrap_or_default(),
        }
    }

    /// Builder-style helper: add a 2× target
    pub fn with_double_damage_to(mut self, target: impl Into<String>) -> Self {
        self.damage_relations.double_damage_to.insert(target.into());
        self
    }

    /// Builder-style helper: add a 0.5× target
    pub fn with_half_damage_to(mut self, target: impl Into<String>) -> Self {
        self.damage_relations.half_damage_to.insert(target.into());
        self
    }

    /// Builder-style helper: add a 0× target
    pub fn with_no_damage_to(mut self, target: impl Into<String>) -> Self {
        self.damage_relations.no_damage_to.insert(target.into());
        self
    }

    /// Builder-style helper: add a type this one takes 2× from
    pub fn with_double_damage_from(mut self, source: impl Into<String>) -> Self {
        self.damage_relations.double_damage_from.insert(source.into());
        self
    }

    /// Builder-style helper: add a type this one takes 0.5× from
    pub fn with_half_damage_from(mut self, source: impl Into<String>) -> Self {
        self.damage_relations.half_damage_from.insert(source.into());
        self
    }

    /// Builder-style helper: add a type this one takes no damage from
    pub fn with_no_damage_from(mut self, source: impl Into<String>) -> Self {
        self.damage_relations.no_damage_from.insert(source.into());
        self
    }

    /// Catalog order: ascending id, ties broken by name
    pub fn canonical_cmp(&self, other: &TypeRecord) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Borrow a type slice in catalog order
pub fn canonical_order(types: &[TypeRecord]) -> Vec<&TypeRecord> {
    let mut ordered: Vec<&TypeRecord> = types.iter().collect();
    ordered.sort_by(|a, b| a.canonical_cmp(b));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_protocol::parse_type;

    #[test]
    fn test_from_protocol() {
        let payload = parse_type(
            r#"{
                "id": 13, "name": "electric",
                "damage_relations": {
                    "double_damage_to": [{ "name": "water" }, { "name": "flying" }, { "name": "water" }],
                    "no_damage_to": [{ "name": "ground" }],
                    "double_damage_from": [{ "name": "ground" }]
                }
            }"#,
        )
        .unwrap();
        let record = TypeRecord::from_protocol(&payload);
        let relations = &record.damage_relations;

        assert_eq!(record.id, 13);
        assert_eq!(record.name, "electric");
        // duplicates collapse
        assert_eq!(relations.double_damage_to.len(), 2);
        assert!(relations.no_damage_to.contains("ground"));
        assert!(relations.half_damage_to.is_empty());
        assert!(relations.half_damage_from.is_empty());
        assert!(relations.no_damage_from.is_empty());
    }

    #[test]
    fn test_from_protocol_without_relations() {
        let payload = parse_type(r#"{ "id": 10002, "name": "shadow" }"#).unwrap();
        let record = TypeRecord::from_protocol(&payload);

        assert_eq!(record.damage_relations, DamageRelations::default());
    }

    #[test]
    fn test_canonical_order() {
        let types = vec![
            TypeRecord::new(10, "fire"),
            TypeRecord::new(1, "normal"),
            TypeRecord::new(10, "blaze"),
        ];
        let ordered: Vec<&str> = canonical_order(&types)
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();

        assert_eq!(ordered, vec!["normal", "blaze", "fire"]);
    }
}
