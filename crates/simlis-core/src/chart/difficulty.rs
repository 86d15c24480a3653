use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// The recognized difficulty-name vocabulary of a chart.
///
/// StepMania writes these names into the `#DIFFICULTY` tag. `Edit` is part of
/// the vocabulary but is never assigned an output tier; any other string is a
/// classification failure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Challenge,
    Edit,
}

impl Difficulty {
    /// Map to the output tier. Total on the five non-Edit names; `Edit` has
    /// no tier and is skipped by the aggregator.
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Self::Beginner => Some(Tier::B),
            Self::Easy => Some(Tier::E),
            Self::Medium => Some(Tier::M),
            Self::Hard => Some(Tier::H),
            Self::Challenge => Some(Tier::X),
            Self::Edit => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Single-letter difficulty tier used as output columns.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Tier {
    B = 0,
    E = 1,
    M = 2,
    H = 3,
    X = 4,
}

impl Tier {
    pub const COUNT: usize = 5;

    /// All tiers in output-column order.
    pub const ALL: [Tier; Self::COUNT] = [Tier::B, Tier::E, Tier::M, Tier::H, Tier::X];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_from_tag_text() {
        assert_eq!(Difficulty::from_str("Beginner"), Ok(Difficulty::Beginner));
        assert_eq!(Difficulty::from_str("Challenge"), Ok(Difficulty::Challenge));
        // StepMania tags are not case-normalized in the wild
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("edit"), Ok(Difficulty::Edit));
        assert!(Difficulty::from_str("Expert").is_err());
        assert!(Difficulty::from_str("").is_err());
    }

    #[test]
    fn test_tier_mapping_is_total_on_non_edit_names() {
        assert_eq!(Difficulty::Beginner.tier(), Some(Tier::B));
        assert_eq!(Difficulty::Easy.tier(), Some(Tier::E));
        assert_eq!(Difficulty::Medium.tier(), Some(Tier::M));
        assert_eq!(Difficulty::Hard.tier(), Some(Tier::H));
        assert_eq!(Difficulty::Challenge.tier(), Some(Tier::X));
        assert_eq!(Difficulty::Edit.tier(), None);
    }

    #[test]
    fn test_tier_from_u8() {
        assert_eq!(Tier::from_u8(0), Some(Tier::B));
        assert_eq!(Tier::from_u8(4), Some(Tier::X));
        assert_eq!(Tier::from_u8(5), None);
    }

    #[test]
    fn test_tier_order_matches_columns() {
        let names: Vec<&str> = Tier::ALL.iter().map(|t| t.short_name()).collect();
        assert_eq!(names, ["B", "E", "M", "H", "X"]);
    }
}
