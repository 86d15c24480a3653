//! Chart-related types and data structures.
//!
//! This module contains the read-only data model the summarizer consumes:
//! - `Difficulty`, `Tier` - the recognized difficulty vocabulary and the
//!   five single-letter output tiers
//! - `FormatVariant` - legacy (`.sm`) vs modern (`.ssc`) simfiles
//! - `Chart`, `Song` - per-chart and per-song metadata

mod difficulty;
mod song;

pub use difficulty::*;
pub use song::*;
