//! Local calendar dates
//!
//! Every date in the system is a plain calendar date (`chrono::NaiveDate`)
//! with no time-of-day and no timezone. Date strings are always parsed as
//! local calendar dates — never through a UTC-interpreting parser, which
//! would shift the displayed day in negative-offset zones.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Invalid range: start {start} must not be after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Parses a `YYYY-MM-DD` string as a local calendar date.
///
/// A trailing `T...` time component is ignored, so full ISO timestamps from
/// older records parse to their date part without any UTC reinterpretation.
pub fn parse_local_date(input: &str) -> Result<NaiveDate, TemporalError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TemporalError::InvalidDate(input.to_string()));
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| TemporalError::InvalidDate(input.to_string()))
}

/// Renders a date in the localized short form `DD/MM/YYYY`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Adds whole calendar years to a date.
///
/// Feb 29 rolls over to Mar 1 when the target year is not a leap year,
/// matching how the production data has always been interpreted.
pub fn add_calendar_years(date: NaiveDate, years: u32) -> NaiveDate {
    let target_year = date.year() + years as i32;
    NaiveDate::from_ymd_opt(target_year, date.month(), date.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(target_year, 3, 1).expect("Mar 1 is always a valid date")
    })
}

/// Whole calendar days from `from` to `to`; negative when `to` is in the past
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive)
    pub start: NaiveDate,
    /// Last day of the range (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range; `start` must not be after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The calendar month containing `date`, first day through last day
    pub fn month_of(date: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .expect("first of month is always valid");
        let next_month = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
        }
        .expect("first of month is always valid");
        Self {
            start,
            end: next_month - Duration::days(1),
        }
    }

    /// The calendar month before the one containing `date`
    pub fn previous_month_of(date: NaiveDate) -> Self {
        let first_of_current = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .expect("first of month is always valid");
        Self::month_of(first_of_current - Duration::days(1))
    }

    /// Returns true if `date` falls within the range, boundaries included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, boundaries included
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Serde helpers for date fields stored as local-date strings.
///
/// Serializes as `YYYY-MM-DD`; deserializes through [`parse_local_date`] so
/// older documents holding full ISO timestamps keep their calendar day.
pub mod serde_local_date {
    use super::parse_local_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_local_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// [`serde_local_date`] for optional fields
pub mod serde_local_date_opt {
    use super::parse_local_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) => parse_local_date(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_local_date() {
        assert_eq!(parse_local_date("2024-03-15").unwrap(), d(2024, 3, 15));
        assert_eq!(parse_local_date(" 2024-01-01 ").unwrap(), d(2024, 1, 1));
    }

    #[test]
    fn test_parse_ignores_time_component() {
        // ISO timestamps stored by older records keep their calendar day
        assert_eq!(
            parse_local_date("2024-03-15T05:00:00.000Z").unwrap(),
            d(2024, 3, 15)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_local_date("").is_err());
        assert!(parse_local_date("not-a-date").is_err());
        assert!(parse_local_date("2024-02-30").is_err());
        assert!(parse_local_date("2024-13-01").is_err());
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date(d(2024, 3, 5)), "05/03/2024");
    }

    #[test]
    fn test_add_calendar_years() {
        assert_eq!(add_calendar_years(d(2024, 1, 10), 1), d(2025, 1, 10));
        assert_eq!(add_calendar_years(d(2024, 6, 30), 3), d(2027, 6, 30));
    }

    #[test]
    fn test_add_years_rolls_feb_29_to_mar_1() {
        assert_eq!(add_calendar_years(d(2024, 2, 29), 1), d(2025, 3, 1));
        // leap year to leap year keeps Feb 29
        assert_eq!(add_calendar_years(d(2024, 2, 29), 4), d(2028, 2, 29));
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(d(2024, 12, 27), d(2025, 1, 10)), 14);
        assert_eq!(days_between(d(2025, 1, 11), d(2025, 1, 10)), -1);
        assert_eq!(days_between(d(2025, 1, 10), d(2025, 1, 10)), 0);
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 6, 30)).unwrap();
        assert!(range.contains(d(2024, 1, 1)));
        assert!(range.contains(d(2024, 6, 30)));
        assert!(!range.contains(d(2024, 7, 1)));
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(DateRange::new(d(2024, 2, 1), d(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_month_windows() {
        let m = DateRange::month_of(d(2024, 2, 15));
        assert_eq!(m.start, d(2024, 2, 1));
        assert_eq!(m.end, d(2024, 2, 29));

        let dec = DateRange::month_of(d(2023, 12, 31));
        assert_eq!(dec.end, d(2023, 12, 31));

        let prev = DateRange::previous_month_of(d(2024, 1, 20));
        assert_eq!(prev.start, d(2023, 12, 1));
        assert_eq!(prev.end, d(2023, 12, 31));
    }
}
