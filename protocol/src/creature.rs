//! `GET /pokemon/{id}` payload

use serde::Deserialize;

use crate::type_record::NamedResource;
use crate::{ParseError, parse_body};

/// Raw creature record as served by the provider.
///
/// Only the fields the catalog uses are modelled; everything else in the
/// response is ignored. Optional fields stay optional here and are defaulted
/// when converted into a domain record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreaturePayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlotPayload>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Option<SpritesPayload>,
}

/// One entry of `types[]`: `{ "slot": 1, "type": { "name": "grass", ... } }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlotPayload {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpritesPayload {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl CreaturePayload {
    /// Type names ordered by `slot`; entries without a slot keep array order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        let mut slots: Vec<&TypeSlotPayload> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| slot.kind.name.as_str())
    }

    /// Front sprite URI, if the provider sent one
    pub fn front_sprite(&self) -> Option<&str> {
        self.sprites.as_ref()?.front_default.as_deref()
    }
}

/// Parse a `/pokemon/{id}` response body
pub fn parse_creature(body: &str) -> Result<CreaturePayload, ParseError> {
    parse_body(body)
}
