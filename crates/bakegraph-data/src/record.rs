//! Raw and enriched transaction record types

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One raw line item as it appears in the point-of-sale CSV export.
///
/// `transaction_no` groups items purchased together and is not unique per
/// row. The timestamp is kept as text here; parsing happens during feature
/// derivation so a bad value fails the whole load, not a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "TransactionNo")]
    pub transaction_no: String,

    #[serde(rename = "Items")]
    pub items: String,

    #[serde(rename = "DateTime")]
    pub date_time: String,

    #[serde(rename = "Daypart")]
    pub daypart: String,

    #[serde(rename = "DayType")]
    pub day_type: String,
}

/// A sale record augmented with the calendar-derived fields.
///
/// Every derived field is a pure function of the parsed timestamp;
/// `day_name` always points into the fixed weekday table, so no other
/// spelling can occur.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub transaction_no: String,
    pub items: String,
    pub daypart: String,
    pub day_type: String,

    pub timestamp: NaiveDateTime,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    /// Monday = 0 .. Sunday = 6
    pub day_of_week: u32,
    pub day_name: &'static str,
    pub date: NaiveDate,
}
