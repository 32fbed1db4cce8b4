//! Dataset ingestion, calendar feature derivation and aggregation

pub mod aggregate;
pub mod derive;
pub mod loader;
pub mod record;
pub mod store;
pub mod summary;

pub use aggregate::{count_by, hourly_daily_transactions, top_n_items, CategoryCount, HourlyDailyPoint};
pub use derive::derive_features;
pub use loader::read_records;
pub use record::{EnrichedRecord, SaleRecord};
pub use store::{dataset, Dataset};
pub use summary::{describe, DimensionCounts, NumericSummary, SummaryReport};
