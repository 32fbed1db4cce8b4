//! Calendar feature derivation

use crate::record::{EnrichedRecord, SaleRecord};
use bakegraph_common::{BakegraphError, Result, WEEKDAY_NAMES};
use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

/// Timestamp formats accepted in the export.
const TIMESTAMP_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Compute the calendar-derived fields for every record.
///
/// Output ordering matches input ordering. Any unparseable timestamp fails
/// the whole pass; no partially-enriched output is ever produced.
pub fn derive_features(records: Vec<SaleRecord>) -> Result<Vec<EnrichedRecord>> {
    let mut enriched = Vec::with_capacity(records.len());

    for record in records {
        let timestamp = parse_timestamp(&record.date_time).ok_or_else(|| {
            BakegraphError::parse(format!(
                "Unparseable timestamp '{}' for transaction {}",
                record.date_time, record.transaction_no
            ))
        })?;

        let day_of_week = timestamp.weekday().num_days_from_monday();

        enriched.push(EnrichedRecord {
            transaction_no: record.transaction_no,
            items: record.items,
            daypart: record.daypart,
            day_type: record.day_type,
            timestamp,
            year: timestamp.year(),
            month: timestamp.month(),
            day: timestamp.day(),
            hour: timestamp.hour(),
            day_of_week,
            day_name: WEEKDAY_NAMES[day_of_week as usize],
            date: timestamp.date(),
        });
    }

    debug!("Derived calendar features for {} rows", enriched.len());
    Ok(enriched)
}
