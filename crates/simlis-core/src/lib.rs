//! Inventory the songs and charts of a StepMania pack and summarize them
//! into one CSV table for charter review.

pub mod chart;
pub mod error;
pub mod export;
pub mod pack;
pub mod summary;

pub use chart::{Chart, Difficulty, FormatVariant, Song, Tier};
pub use error::{Error, Result};
pub use export::{csv_header, export_csv, write_csv};
pub use pack::{Pack, parse_simfile};
pub use summary::{
    DiagnosticSink, LogSink, SummaryRow, TierCell, should_process, summarize_pack, summarize_song,
};
