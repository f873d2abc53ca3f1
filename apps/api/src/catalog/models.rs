use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::preferences::PreferenceError;

/// Kit construction. Electronic kits are the quiet-capable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitType {
    Acoustic,
    Electronic,
}

/// Where the kit will be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    Apartment,
    House,
    Studio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single catalog entry. Compiled into the binary and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrumKit {
    pub id: &'static str,
    pub name: &'static str,
    pub kit_type: KitType,
    pub price_min: u32,
    pub price_max: u32,
    pub space: Space,
    pub genres: &'static [&'static str],
    pub skill: SkillLevel,
    pub notes: &'static str,
}

impl DrumKit {
    pub fn supports_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| *g == genre)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// String forms
// ────────────────────────────────────────────────────────────────────────────

impl KitType {
    pub const ALL: [KitType; 2] = [KitType::Acoustic, KitType::Electronic];

    pub fn as_str(self) -> &'static str {
        match self {
            KitType::Acoustic => "acoustic",
            KitType::Electronic => "electronic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KitType::Acoustic => "Acoustic",
            KitType::Electronic => "Electronic",
        }
    }
}

impl Space {
    pub const ALL: [Space; 3] = [Space::Apartment, Space::House, Space::Studio];

    pub fn as_str(self) -> &'static str {
        match self {
            Space::Apartment => "apartment",
            Space::House => "house",
            Space::Studio => "studio",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Space::Apartment => "Apartment",
            Space::House => "House",
            Space::Studio => "Studio / Practice Space",
        }
    }
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

/// Case-insensitive lookup against a closed set of variants.
fn parse_variant<T: Copy>(
    field: &'static str,
    raw: &str,
    variants: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, PreferenceError> {
    let wanted = raw.trim().to_ascii_lowercase();
    variants
        .iter()
        .copied()
        .find(|v| as_str(*v) == wanted)
        .ok_or_else(|| PreferenceError::UnknownValue {
            field,
            value: raw.trim().to_string(),
            expected: variants
                .iter()
                .map(|v| as_str(*v))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

impl FromStr for KitType {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("kit_type", s, &KitType::ALL, KitType::as_str)
    }
}

impl FromStr for Space {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("space", s, &Space::ALL, Space::as_str)
    }
}

impl FromStr for SkillLevel {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("skill", s, &SkillLevel::ALL, SkillLevel::as_str)
    }
}

impl fmt::Display for KitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" Electronic ".parse::<KitType>().unwrap(), KitType::Electronic);
        assert_eq!("STUDIO".parse::<Space>().unwrap(), Space::Studio);
        assert_eq!("beginner".parse::<SkillLevel>().unwrap(), SkillLevel::Beginner);
    }

    #[test]
    fn test_unknown_value_lists_expected_variants() {
        let err = "hybrid".parse::<KitType>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("kit_type"), "{msg}");
        assert!(msg.contains("hybrid"), "{msg}");
        assert!(msg.contains("acoustic, electronic"), "{msg}");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Space::Apartment).unwrap(), "\"apartment\"");
        let skill: SkillLevel = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(skill, SkillLevel::Advanced);
    }

    #[test]
    fn test_display_matches_wire_name() {
        for kit_type in KitType::ALL {
            assert_eq!(kit_type.to_string(), kit_type.as_str());
        }
    }
}
