//! Single-hit type effectiveness multiplier

/// Damage multiplier of one attacking type against one defending type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Effectiveness {
    /// 0×
    Immune,
    /// 0.5×
    NotVeryEffective,
    /// 1×
    #[default]
    Neutral,
    /// 2×
    SuperEffective,
}

impl Effectiveness {
    /// All multipliers, weakest first
    pub const ALL: [Effectiveness; 4] = [
        Effectiveness::Immune,
        Effectiveness::NotVeryEffective,
        Effectiveness::Neutral,
        Effectiveness::SuperEffective,
    ];

    /// Numeric damage multiplier
    pub fn multiplier(&self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::NotVeryEffective => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::SuperEffective => 2.0,
        }
    }

    /// Compact grid symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Effectiveness::Immune => "0×",
            Effectiveness::NotVeryEffective => "½×",
            Effectiveness::Neutral => "1×",
            Effectiveness::SuperEffective => "2×",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Effectiveness::Immune => "No Effect",
            Effectiveness::NotVeryEffective => "Not Very Effective",
            Effectiveness::Neutral => "Normal Damage",
            Effectiveness::SuperEffective => "Super Effective",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Serialized as the bare multiplier (`0`, `0.5`, `1`, `2`)
#[cfg(feature = "serde")]
impl serde::Serialize for Effectiveness {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Effectiveness::Immune => serializer.serialize_u8(0),
            Effectiveness::NotVeryEffective => serializer.serialize_f32(0.5),
            Effectiveness::Neutral => serializer.serialize_u8(1),
            Effectiveness::SuperEffective => serializer.serialize_u8(2),
        }
    }
}
