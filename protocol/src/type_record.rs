//! `GET /type/{id}` payload

use serde::Deserialize;

use crate::{ParseError, parse_body};

/// `{ "name": ..., "url": ... }` reference used throughout the provider's API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Raw type record as served by the provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypePayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub damage_relations: Option<DamageRelationsPayload>,
}

/// The six damage-relation lists.
///
/// Each list may be missing or `null` upstream; both cases deserialize to
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DamageRelationsPayload {
    #[serde(default)]
    pub double_damage_to: Option<Vec<NamedResource>>,
    #[serde(default)]
    pub double_damage_from: Option<Vec<NamedResource>>,
    #[serde(default)]
    pub half_damage_to: Option<Vec<NamedResource>>,
    #[serde(default)]
    pub half_damage_from: Option<Vec<NamedResource>>,
    #[serde(default)]
    pub no_damage_to: Option<Vec<NamedResource>>,
    #[serde(default)]
    pub no_damage_from: Option<Vec<NamedResource>>,
}

/// Parse a `/type/{id}` response body
pub fn parse_type(body: &str) -> Result<TypePayload, ParseError> {
    parse_body(body)
}
