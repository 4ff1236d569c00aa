use thiserror::Error;

pub mod creature;
pub mod type_record;

pub use creature::{CreaturePayload, SpritesPayload, TypeSlotPayload, parse_creature};
pub use type_record::{DamageRelationsPayload, NamedResource, TypePayload, parse_type};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty response body")]
    EmptyBody,
}

/// Deserialize a response body, rejecting blank bodies up front
fn parse_body<'a, T: serde::Deserialize<'a>>(body: &'a str) -> Result<T, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }
    Ok(serde_json::from_str(body)?)
}
