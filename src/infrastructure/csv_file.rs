// src/infrastructure/csv_file.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::application::ImportRow;
use crate::constants::CSV_HEADER;

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i)).map(String::from)
}

/// Read raw quote rows from a CSV file with a `Quote,Author,Category,Rating` header.
///
/// Columns are looked up by exact header name. Missing columns read as empty
/// (no rating), extra columns are ignored and short rows are tolerated.
/// Cleanup and rating parsing happen in the store.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_import_rows(path: &Path) -> Result<Vec<ImportRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header from {}", path.display()))?
        .clone();
    let [quote_idx, author_idx, category_idx, rating_idx] =
        CSV_HEADER.map(|name| header_index(&headers, name));
    debug!(?headers, "Read CSV header");

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to read CSV row {} of {}", line + 1, path.display()))?;
        rows.push(ImportRow {
            text: get_string(&record, quote_idx).unwrap_or_default(),
            author: get_string(&record, author_idx).unwrap_or_default(),
            category: get_string(&record, category_idx).unwrap_or_default(),
            rating: get_string(&record, rating_idx),
        });
    }

    info!(count = rows.len(), "Read CSV rows");
    Ok(rows)
}

/// Write the header row followed by `rows` to `path`, replacing it.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_export_rows(path: &Path, rows: &[[String; 4]]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;
    wtr.write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;
    for row in rows {
        wtr.write_record(row).context("Failed to write CSV row")?;
    }
    wtr.flush().context("Failed to flush CSV file")?;
    info!(count = rows.len(), "Exported quotes to CSV");
    Ok(())
}
