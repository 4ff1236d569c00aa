//! Pairwise attacker × defender effectiveness grid

use std::collections::HashMap;

use crate::types::{DamageRelations, Effectiveness, TypeRecord, canonical_order};

/// Complete effectiveness grid over a type catalog.
///
/// Row = attacking type, column = defending type, both in catalog order
/// (ascending id, then name). Every cell is populated.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectivenessMatrix {
    type_names: Vec<String>,
    /// Row-major, `type_names.len()` squared cells
    cells: Vec<Effectiveness>,
    /// Name -> first row/column carrying that name
    index: HashMap<String, usize>,
}

impl EffectivenessMatrix {
    /// Type names labelling both rows and columns
    pub fn type_names(&self) -> &[String] {
        &self.type_names
    }

    /// Number of types on each axis
    pub fn dimension(&self) -> usize {
        self.type_names.len()
    }

    /// Total number of cells (`dimension²`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Effectiveness of `attacker` hitting `defender`, if both are in the grid
    pub fn get(&self, attacker: &str, defender: &str) -> Option<Effectiveness> {
        let row = *self.index.get(attacker)?;
        let col = *self.index.get(defender)?;
        Some(self.cells[row * self.dimension() + col])
    }

    /// One attacker's row, in column order
    pub fn row(&self, attacker: &str) -> Option<&[Effectiveness]> {
        let row = *self.index.get(attacker)?;
        let n = self.dimension();
        Some(&self.cells[row * n..(row + 1) * n])
    }

    /// Every `(attacker, defender, effectiveness)` cell, row-major
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Effectiveness)> + '_ {
        let n = self.dimension();
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            (
                self.type_names[i / n].as_str(),
                self.type_names[i % n].as_str(),
                cell,
            )
        })
    }
}

/// Nested map: `{ attacker: { defender: multiplier } }`, catalog order.
///
/// Duplicate type names produce duplicate object keys; most JSON readers
/// keep the last one, while [`EffectivenessMatrix::get`] resolves to the first.
#[cfg(feature = "serde")]
impl serde::Serialize for EffectivenessMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        struct Row<'a>(&'a [String], &'a [Effectiveness]);

        impl serde::Serialize for Row<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (name, cell) in self.0.iter().zip(self.1) {
                    map.serialize_entry(name, cell)?;
                }
                map.end()
            }
        }

        let n = self.dimension();
        let mut map = serializer.serialize_map(Some(n))?;
        for (row, name) in self.type_names.iter().enumerate() {
            map.serialize_entry(name, &Row(&self.type_names, &self.cells[row * n..(row + 1) * n]))?;
        }
        map.end()
    }
}

/// Effectiveness of an attacker's relations against one defending name.
///
/// Checks `double_damage_to`, then `half_damage_to`, then `no_damage_to`;
/// the first set containing the name wins, otherwise neutral.
pub fn effectiveness_against(relations: &DamageRelations, defender: &str) -> Effectiveness {
    if relations.double_damage_to.contains(defender) {
        Effectiveness::SuperEffective
    } else if relations.half_damage_to.contains(defender) {
        Effectiveness::NotVeryEffective
    } else if relations.no_damage_to.contains(defender) {
        Effectiveness::Immune
    } else {
        Effectiveness::Neutral
    }
}

/// Build the full K×K grid for `types`.
///
/// Relation entries naming a type outside `types` are never looked up.
pub fn build_effectiveness_matrix(types: &[TypeRecord]) -> EffectivenessMatrix {
    let ordered = canonical_order(types);

    let cells = ordered
        .iter()
        .flat_map(|attacker| {
            ordered
                .iter()
                .map(|defender| effectiveness_against(&attacker.damage_relations, &defender.name))
        })
        .collect();

    let type_names: Vec<String> = ordered.iter().map(|t| t.name.clone()).collect();
    let mut index = HashMap::with_capacity(type_names.len());
    for (i, name) in type_names.iter().enumerate() {
        index.entry(name.clone()).or_insert(i);
    }

    EffectivenessMatrix {
        type_names,
        cells,
        index,
    }
}
