//! CSV export of the summary table.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::chart::Tier;
use crate::error::Result;
use crate::summary::SummaryRow;

/// Column names, in output order. One meter and one tech column per tier.
pub fn csv_header() -> Vec<String> {
    let mut columns = vec![
        "Charter".to_string(),
        "Song Title".to_string(),
        "Song Artist".to_string(),
    ];
    for tier in Tier::ALL {
        columns.push(tier.short_name().to_string());
        columns.push(format!("{} Tech", tier));
    }
    columns
}

/// Write the header and one record per row to any sink. Quoting and
/// escaping are the csv crate's standard rules.
pub fn write_csv<W: io::Write>(writer: W, rows: &[SummaryRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(csv_header())?;
    for row in rows {
        let mut record = vec![row.charter.clone(), row.title.clone(), row.artist.clone()];
        for tier in Tier::ALL {
            let cell = row.tier(tier);
            record.push(cell.meter.clone());
            record.push(cell.tech.clone());
        }
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the summary table to a file.
pub fn export_csv<P: AsRef<Path>>(path: P, rows: &[SummaryRow]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, rows)
}
