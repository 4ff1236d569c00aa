//! Creature catalog entries

use typedex_protocol::CreaturePayload;

/// Sprite used when the provider has no front sprite for a creature
pub const PLACEHOLDER_SPRITE: &str = "/placeholder.svg?height=96&width=96&query=pokemon";

/// One catalog entry
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    /// Provider primary key
    pub id: u32,

    /// Display name (lowercase API name, e.g. "bulbasaur")
    pub name: String,

    /// Type names in slot order
    pub types: Vec<String>,

    /// Height in decimeters
    pub height: u32,

    /// Weight in hectograms
    pub weight: u32,

    /// Base experience yield (0 when the provider has none)
    pub base_experience: u32,

    /// Front sprite URI (placeholder when the provider has none)
    pub sprite: String,
}

impl Creature {
    /// Create a creature with the given types and zeroed display attributes
    pub fn new<I, S>(id: u32, name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            height: 0,
            weight: 0,
            base_experience: 0,
            sprite: PLACEHOLDER_SPRITE.to_string(),
        }
    }

    /// Create from a provider payload, applying the optional-field defaults
    pub fn from_protocol(payload: &CreaturePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.clone(),
            types: payload.type_names().map(str::to_string).collect(),
            height: payload.height,
            weight: payload.weight,
            base_experience: payload.base_experience.unwrap_or(0),
            sprite: payload
                .front_sprite()
                .unwrap_or(PLACEHOLDER_SPRITE)
                .to_string(),
        }
    }

    /// Height in meters
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Whether this creature lists the given type
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Distinct type names, sorted ascending
    pub fn distinct_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_protocol::parse_creature;

    #[test]
    fn test_from_protocol() {
        let payload = parse_creature(
            r#"{
                "id": 6, "name": "charizard", "height": 17, "weight": 905,
                "base_experience": 267,
                "types": [
                    { "slot": 1, "type": { "name": "fire", "url": "" } },
                    { "slot": 2, "type": { "name": "flying", "url": "" } }
                ],
                "sprites": { "front_default": "https://example.test/6.png" }
            }"#,
        )
        .unwrap();
        let creature = Creature::from_protocol(&payload);

        assert_eq!(creature.id, 6);
        assert_eq!(creature.name, "charizard");
        assert_eq!(creature.types, vec!["fire", "flying"]);
        assert_eq!(creature.base_experience, 267);
        assert_eq!(creature.sprite, "https://example.test/6.png");
    }

    #[test]
    fn test_from_protocol_defaults() {
        let payload = parse_creature(
            r#"{ "id": 7, "name": "squirtle", "height": 5, "weight": 90,
                 "base_experience": null, "sprites": { "front_default": null } }"#,
        )
        .unwrap();
        let creature = Creature::from_protocol(&payload);

        assert_eq!(creature.base_experience, 0);
        assert_eq!(creature.sprite, PLACEHOLDER_SPRITE);
        assert!(creature.types.is_empty());
    }

    #[test]
    fn test_unit_conversions() {
        let mut creature = Creature::new(25, "pikachu", ["electric"]);
        creature.height = 4;
        creature.weight = 60;

        assert_eq!(creature.height_m(), 0.4);
        assert_eq!(creature.weight_kg(), 6.0);
    }

    #[test]
    fn test_distinct_types() {
        let creature = Creature::new(1, "odd", ["poison", "grass", "poison"]);

        assert_eq!(creature.distinct_types(), vec!["grass", "poison"]);
        assert!(creature.has_type("grass"));
        assert!(!creature.has_type("fire"));
    }
}
