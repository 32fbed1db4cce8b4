//! Pure aggregation queries over the enriched dataset

use crate::record::EnrichedRecord;
use crate::store::Dataset;
use bakegraph_common::{BakegraphError, Dimension, Result, WEEKDAY_NAMES};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// One `(category, count)` row of a value-count table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// One observed `(day_of_week, hour)` bucket of the transaction matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyDailyPoint {
    /// Monday = 0 .. Sunday = 6
    pub day_of_week: u32,
    pub hour: u32,
    /// Count of distinct transaction identifiers in the bucket.
    pub transactions: u64,
    pub day_name: &'static str,
}

fn dimension_value(record: &EnrichedRecord, dimension: Dimension) -> String {
    match dimension {
        Dimension::Items => record.items.clone(),
        Dimension::Daypart => record.daypart.clone(),
        Dimension::DayType => record.day_type.clone(),
        Dimension::DayName => record.day_name.to_string(),
        Dimension::Hour => record.hour.to_string(),
    }
}

/// Value counts for one categorical dimension, sorted by count descending.
///
/// Ties keep the order in which the category first appeared in the dataset,
/// never hash order, so repeated runs produce identical tables.
pub fn count_by(dataset: &Dataset, dimension: Dimension) -> Result<Vec<CategoryCount>> {
    if dataset.is_empty() {
        return Err(BakegraphError::EmptyDataset);
    }

    let mut tallies: HashMap<String, (usize, u64)> = HashMap::new();
    for (index, record) in dataset.records().iter().enumerate() {
        let entry = tallies
            .entry(dimension_value(record, dimension))
            .or_insert((index, 0));
        entry.1 += 1;
    }

    let mut keyed: Vec<(usize, CategoryCount)> = tallies
        .into_iter()
        .map(|(category, (first_seen, count))| (first_seen, CategoryCount { category, count }))
        .collect();
    keyed.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.0.cmp(&b.0)));

    let result: Vec<CategoryCount> = keyed.into_iter().map(|(_, row)| row).collect();
    debug!("Aggregated {} categories for {}", result.len(), dimension);
    Ok(result)
}

/// The first `n` entries of the item value-count ordering.
///
/// `n` must satisfy `1 <= n <= distinct_item_count`.
pub fn top_n_items(dataset: &Dataset, n: usize) -> Result<Vec<CategoryCount>> {
    if dataset.is_empty() {
        return Err(BakegraphError::EmptyDataset);
    }

    let distinct = dataset.distinct_item_count();
    if n < 1 || n > distinct {
        return Err(BakegraphError::top_n_out_of_range(n, distinct));
    }

    let mut counts = count_by(dataset, Dimension::Items)?;
    counts.truncate(n);
    Ok(counts)
}

/// Distinct-transaction counts per observed `(day_of_week, hour)` bucket.
///
/// Two line items sharing a transaction identifier in the same bucket count
/// once. Buckets with no observed transactions are omitted, not zero-filled.
pub fn hourly_daily_transactions(dataset: &Dataset) -> Result<Vec<HourlyDailyPoint>> {
    if dataset.is_empty() {
        return Err(BakegraphError::EmptyDataset);
    }

    let mut buckets: HashMap<(u32, u32), HashSet<&str>> = HashMap::new();
    for record in dataset.records() {
        buckets
            .entry((record.day_of_week, record.hour))
            .or_default()
            .insert(record.transaction_no.as_str());
    }

    let mut result: Vec<HourlyDailyPoint> = buckets
        .into_iter()
        .map(|((day_of_week, hour), transactions)| HourlyDailyPoint {
            day_of_week,
            hour,
            transactions: transactions.len() as u64,
            day_name: WEEKDAY_NAMES[day_of_week as usize],
        })
        .collect();
    result.sort_by_key(|point| (point.day_of_week, point.hour));

    debug!("Aggregated {} hour/day buckets", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_features;
    use crate::record::SaleRecord;

    fn raw(transaction_no: &str, items: &str, date_time: &str, day_type: &str) -> SaleRecord {
        SaleRecord {
            transaction_no: transaction_no.to_string(),
            items: items.to_string(),
            date_time: date_time.to_string(),
            daypart: "Morning".to_string(),
            day_type: day_type.to_string(),
        }
    }

    fn spec_example_dataset() -> Dataset {
        let records = vec![
            raw("T1", "Bread", "2023-01-02 08:15:00", "Weekday"),
            raw("T1", "Coffee", "2023-01-02 08:15:00", "Weekday"),
            raw("T2", "Bread", "2023-01-03 09:00:00", "Weekend"),
        ];
        Dataset::new(derive_features(records).unwrap())
    }

    #[test]
    fn test_count_by_items() {
        let dataset = spec_example_dataset();
        let counts = count_by(&dataset, Dimension::Items).unwrap();

        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "Bread".to_string(), count: 2 },
                CategoryCount { category: "Coffee".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_count_by_sums_to_row_count() {
        let dataset = spec_example_dataset();
        for dimension in Dimension::ALL {
            let counts = count_by(&dataset, dimension).unwrap();
            let total: u64 = counts.iter().map(|row| row.count).sum();
            assert_eq!(total as usize, dataset.len());

            // sorted non-increasing by count
            for pair in counts.windows(2) {
                assert!(pair[0].count >= pair[1].count);
            }
        }
    }

    #[test]
    fn test_count_by_ties_keep_first_seen_order() {
        let records = vec![
            raw("1", "Scone", "2023-01-02 08:00:00", "Weekday"),
            raw("2", "Muffin", "2023-01-02 09:00:00", "Weekday"),
            raw("3", "Bagel", "2023-01-02 10:00:00", "Weekday"),
        ];
        let dataset = Dataset::new(derive_features(records).unwrap());

        let counts = count_by(&dataset, Dimension::Items).unwrap();
        let names: Vec<&str> = counts.iter().map(|row| row.category.as_str()).collect();
        assert_eq!(names, vec!["Scone", "Muffin", "Bagel"]);
    }

    #[test]
    fn test_count_by_hour_uses_hour_values() {
        let dataset = spec_example_dataset();
        let counts = count_by(&dataset, Dimension::Hour).unwrap();

        assert_eq!(counts[0].category, "8");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].category, "9");
    }

    #[test]
    fn test_count_by_empty_dataset() {
        let dataset = Dataset::new(Vec::new());
        let err = count_by(&dataset, Dimension::Items).unwrap_err();
        assert!(matches!(err, BakegraphError::EmptyDataset));
    }

    #[test]
    fn test_top_n_items_is_prefix_of_count_by() {
        let dataset = spec_example_dataset();
        let all = count_by(&dataset, Dimension::Items).unwrap();
        let top = top_n_items(&dataset, 1).unwrap();

        assert_eq!(top.len(), 1);
        assert_eq!(top[0], all[0]);
    }

    #[test]
    fn test_top_n_bounds() {
        let dataset = spec_example_dataset();

        assert!(matches!(
            top_n_items(&dataset, 0).unwrap_err(),
            BakegraphError::TopNOutOfRange { requested: 0, distinct: 2 }
        ));
        assert!(matches!(
            top_n_items(&dataset, 3).unwrap_err(),
            BakegraphError::TopNOutOfRange { requested: 3, distinct: 2 }
        ));
        assert_eq!(top_n_items(&dataset, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_hourly_daily_matrix_spec_example() {
        let dataset = spec_example_dataset();
        let matrix = hourly_daily_transactions(&dataset).unwrap();

        assert_eq!(
            matrix,
            vec![
                HourlyDailyPoint { day_of_week: 0, hour: 8, transactions: 1, day_name: "Monday" },
                HourlyDailyPoint { day_of_week: 1, hour: 9, transactions: 1, day_name: "Tuesday" },
            ]
        );
    }

    #[test]
    fn test_shared_transaction_counts_once_per_bucket() {
        let records = vec![
            raw("T9", "Bread", "2023-01-02 08:05:00", "Weekday"),
            raw("T9", "Coffee", "2023-01-02 08:10:00", "Weekday"),
            raw("T9", "Scone", "2023-01-02 08:20:00", "Weekday"),
        ];
        let dataset = Dataset::new(derive_features(records).unwrap());

        let matrix = hourly_daily_transactions(&dataset).unwrap();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0].transactions, 1);
    }

    #[test]
    fn test_matrix_is_sparse() {
        let dataset = spec_example_dataset();
        let matrix = hourly_daily_transactions(&dataset).unwrap();

        // only the two observed buckets, nothing zero-filled
        assert_eq!(matrix.len(), 2);
    }
}
