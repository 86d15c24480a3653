//! Pack summarization.
//!
//! The decision logic of the tool lives here: the Song Filter gates which
//! songs are aggregated, and the Chart Aggregator folds each retained
//! song's charts into one `SummaryRow`. Everything is a deterministic,
//! order-preserving pass over preloaded data; diagnostics go through an
//! injected `DiagnosticSink` rather than a global stream.

mod aggregate;
mod row;

pub use aggregate::*;
pub use row::*;
