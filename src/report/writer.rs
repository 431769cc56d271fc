// src/report/writer.rs
// =============================================================================
// Writes the collected records as a delimited text file.
//
// Layout:
//   title;price;rating;availability;url
//   A Light in the Attic;51.77;3;In stock;https://books.toscrape.com/...
//
// UTF-8 throughout. Fields containing the delimiter, quotes or newlines are
// quoted by the csv crate. The target file is truncated if it exists.
// =============================================================================

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::BookRecord;

pub const HEADER: [&str; 5] = ["title", "price", "rating", "availability", "url"];

/// Writes `records` to `path`, replacing whatever was there.
pub fn write_records(path: &Path, records: &[BookRecord], delimiter: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create output file {}", path.display()))?;
    write_to(file, records, delimiter)
        .with_context(|| format!("write output file {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = records.len(), "output written");
    Ok(())
}

/// Writes the header and one row per record to any writer.
pub fn write_to<W: Write>(sink: W, records: &[BookRecord], delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(sink);

    writer.write_record(HEADER).context("write header row")?;
    for record in records {
        writer
            .write_record(row(record))
            .with_context(|| format!("write row for {}", record.url))?;
    }
    writer.flush().context("flush output")?;
    Ok(())
}

fn row(record: &BookRecord) -> [String; 5] {
    [
        record.title.clone(),
        format!("{:.2}", record.price),
        record.rating.stars().to_string(),
        record.availability().to_string(),
        record.url.to_string(),
    ]
}
