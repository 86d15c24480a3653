use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Simfile format variant, derived from the file extension.
///
/// Legacy (`.sm`) songs are excluded from aggregation; only their header
/// tags are ever read. Modern (`.ssc`) songs carry per-chart metadata
/// blocks and are fully processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatVariant {
    Legacy,
    Modern,
}

/// One playable difficulty of a song.
///
/// `difficulty` is the raw `#DIFFICULTY` tag text; classification into the
/// recognized vocabulary happens at aggregation time so that an unknown name
/// fails there, not during parsing. All other fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub difficulty: String,
    pub meter: String,
    pub credit: String,
    pub chart_name: String,
    pub description: String,
}

/// A song plus its charts, as parsed from one simfile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub format: FormatVariant,
    pub charts: Vec<Chart>,
    pub simfile_path: PathBuf,
}

impl Song {
    /// "Artist - Title" label used by operator diagnostics.
    pub fn label(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
