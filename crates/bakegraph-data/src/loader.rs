//! CSV ingestion for the point-of-sale export
//!
//! The loader is strict: a missing required column, a malformed row or an
//! empty value fails the whole load. Downstream aggregates are never
//! computed against partial data.

use crate::record::SaleRecord;
use bakegraph_common::{BakegraphError, Result};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Columns the export must contain.
const REQUIRED_COLUMNS: [&str; 5] = ["TransactionNo", "Items", "DateTime", "Daypart", "DayType"];

/// Read all raw records from a delimited export file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        BakegraphError::parse_with_source(format!("Failed to open '{}'", path.display()), e)
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| {
            BakegraphError::parse_with_source(
                format!("Failed to read headers of '{}'", path.display()),
                e,
            )
        })?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BakegraphError::parse(format!(
                "Missing required column '{}' in '{}'",
                column,
                path.display()
            )));
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<SaleRecord>().enumerate() {
        // header occupies line 1
        let line = index + 2;
        let record = row.map_err(|e| {
            BakegraphError::parse_with_source(
                format!("Malformed row at line {} in '{}'", line, path.display()),
                e,
            )
        })?;
        if has_missing_value(&record) {
            return Err(BakegraphError::parse(format!(
                "Missing value at line {} in '{}'",
                line,
                path.display()
            )));
        }
        records.push(record);
    }

    info!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

fn has_missing_value(record: &SaleRecord) -> bool {
    record.transaction_no.is_empty()
        || record.items.is_empty()
        || record.date_time.is_empty()
        || record.daypart.is_empty()
        || record.day_type.is_empty()
}
