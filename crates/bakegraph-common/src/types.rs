//! Shared domain types for the bakery dataset

use crate::{BakegraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed weekday name table, indexed by day-of-week with Monday = 0.
///
/// Exposed so the rendering layer orders and labels axes with exactly the
/// same spellings that `day_name` carries.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Look up the weekday name for a Monday-based day-of-week index.
pub fn weekday_name(day_of_week: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(day_of_week as usize).copied()
}

/// The categorical dimensions recognized by the aggregation layer.
///
/// These correspond to the selectable columns of the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Items,
    Daypart,
    DayType,
    DayName,
    Hour,
}

impl Dimension {
    /// All recognized dimensions, in sidebar order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Items,
        Dimension::Daypart,
        Dimension::DayType,
        Dimension::DayName,
        Dimension::Hour,
    ];

    /// Column name as it appears in the input file / UI controls.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Items => "Items",
            Dimension::Daypart => "Daypart",
            Dimension::DayType => "DayType",
            Dimension::DayName => "DayName",
            Dimension::Hour => "Hour",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = BakegraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Items" => Ok(Dimension::Items),
            "Daypart" => Ok(Dimension::Daypart),
            "DayType" => Ok(Dimension::DayType),
            "DayName" => Ok(Dimension::DayName),
            "Hour" => Ok(Dimension::Hour),
            other => Err(BakegraphError::unknown_column(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_table_is_monday_based() {
        assert_eq!(WEEKDAY_NAMES[0], "Monday");
        assert_eq!(WEEKDAY_NAMES[6], "Sunday");
        assert_eq!(weekday_name(2), Some("Wednesday"));
        assert_eq!(weekday_name(7), None);
    }

    #[test]
    fn test_dimension_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(dim.as_str().parse::<Dimension>().unwrap(), dim);
        }
    }

    #[test]
    fn test_unknown_dimension_is_rejected() {
        let err = "Flavor".parse::<Dimension>().unwrap_err();
        assert!(matches!(err, BakegraphError::UnknownColumn { column } if column == "Flavor"));
    }
}
