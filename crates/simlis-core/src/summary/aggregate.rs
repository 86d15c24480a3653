use std::collections::HashSet;
use std::str::FromStr;

use tracing::{info, warn};

use crate::chart::{Difficulty, FormatVariant, Song, Tier};
use crate::error::{Error, Result};
use crate::pack::Pack;
use crate::summary::row::{SummaryRow, tech_display};

/// Operator-visible side channel for expected, non-fatal skips.
///
/// Injected so the summarizer stays a pure function of its inputs; the
/// production sink logs, tests collect.
pub trait DiagnosticSink {
    fn skipped_song(&mut self, artist: &str, title: &str);
    fn skipped_edit_chart(&mut self, artist: &str, title: &str);
}

/// Production sink: routes diagnostics through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn skipped_song(&mut self, artist: &str, title: &str) {
        warn!("{} - {}: Skipping SM file", artist, title);
    }

    fn skipped_edit_chart(&mut self, artist: &str, title: &str) {
        info!("{} - {}: skipping Edit chart", artist, title);
    }
}

/// Song Filter: legacy-format songs are excluded from aggregation.
/// Skipping is an expected outcome, reported but never an error.
pub fn should_process(song: &Song, sink: &mut dyn DiagnosticSink) -> bool {
    match song.format {
        FormatVariant::Modern => true,
        FormatVariant::Legacy => {
            sink.skipped_song(&song.artist, &song.title);
            false
        }
    }
}

/// Chart Aggregator: fold one retained song's charts into a summary row.
///
/// Charts are visited in file order. Edit charts are reported and skipped;
/// an unrecognized difficulty name is fatal and no partial row is emitted.
/// If two charts land on the same tier the later one wins.
pub fn summarize_song(song: &Song, sink: &mut dyn DiagnosticSink) -> Result<SummaryRow> {
    let mut row = SummaryRow::new(&song.title, &song.artist);
    let mut credits: Vec<(Tier, String)> = Vec::new();

    for chart in &song.charts {
        let difficulty = Difficulty::from_str(&chart.difficulty).map_err(|_| {
            Error::UnrecognizedDifficulty {
                difficulty: chart.difficulty.clone(),
                title: song.title.clone(),
                artist: song.artist.clone(),
            }
        })?;

        let Some(tier) = difficulty.tier() else {
            sink.skipped_edit_chart(&song.artist, &song.title);
            continue;
        };

        credits.push((tier, chart.credit.clone()));
        let cell = &mut row.tiers[tier as usize];
        cell.meter = chart.meter.clone();
        cell.tech = tech_display(&chart.chart_name, &chart.description);
    }

    row.charter = consolidate_charters(&credits);
    Ok(row)
}

/// Walk the whole pack: filter, then aggregate, in pack order. The first
/// classification failure aborts the run.
pub fn summarize_pack(pack: &Pack, sink: &mut dyn DiagnosticSink) -> Result<Vec<SummaryRow>> {
    let mut rows = Vec::new();
    for song in pack.songs() {
        if !should_process(song, sink) {
            continue;
        }
        rows.push(summarize_song(song, sink)?);
    }
    Ok(rows)
}

/// Collapse the (tier, credit) accumulation into the charter column.
///
/// A single distinct credit (even the empty string) is shown verbatim;
/// anything else becomes a tier-qualified list in accumulation order.
fn consolidate_charters(credits: &[(Tier, String)]) -> String {
    let distinct: HashSet<&str> = credits.iter().map(|(_, c)| c.as_str()).collect();
    if distinct.len() == 1 {
        return credits[0].1.clone();
    }

    credits
        .iter()
        .map(|(tier, credit)| format!("{}: {}", tier, credit))
        .collect::<Vec<_>>()
        .join(", ")
}
