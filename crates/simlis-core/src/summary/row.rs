use serde::{Deserialize, Serialize};

use crate::chart::Tier;

/// Per-tier output fields. Both stay empty when the song has no chart at
/// the tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCell {
    pub meter: String,
    pub tech: String,
}

/// One output row: a song plus its consolidated per-tier metadata.
///
/// Built fully populated in one pass by the summarizer and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub charter: String,
    pub title: String,
    pub artist: String,
    /// Indexed by `Tier as usize`, in column order B, E, M, H, X.
    pub tiers: [TierCell; Tier::COUNT],
}

impl SummaryRow {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            charter: String::new(),
            title: title.to_string(),
            artist: artist.to_string(),
            tiers: Default::default(),
        }
    }

    pub fn tier(&self, tier: Tier) -> &TierCell {
        &self.tiers[tier as usize]
    }
}

/// Join chart name and description into the tech column, omitting either
/// side when empty.
pub fn tech_display(chart_name: &str, description: &str) -> String {
    match (chart_name.is_empty(), description.is_empty()) {
        (false, false) => format!("{}, {}", chart_name, description),
        (false, true) => chart_name.to_string(),
        (true, false) => description.to_string(),
        (true, true) => String::new(),
    }
}
