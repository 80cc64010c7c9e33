//! Month buckets and grouping-key extraction.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::repository::Value;

/// The first day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

/// Renders a month bucket as `YYYY-MM`.
///
/// # Examples
///
/// ```
/// use workforce_analytics::aggregation::month_label;
/// use chrono::NaiveDate;
///
/// assert_eq!(month_label(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()), "2024-03");
/// ```
pub fn month_label(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}

/// Every month bucket from the month of `from` to the month of `to`, inclusive.
///
/// Returns an empty list if `from` is after `to`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let last = month_start(to);
    let mut current = month_start(from);
    let mut months = Vec::new();

    while current <= last {
        months.push(current);
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    months
}

/// Reads a month or date grouping key.
pub(crate) fn date_key(key: &Value, section: &str) -> EngineResult<NaiveDate> {
    match key {
        Value::Date(date) => Ok(*date),
        other => Err(unexpected_key(section, "date", other)),
    }
}

/// Reads an id grouping key.
pub(crate) fn id_key(key: &Value, section: &str) -> EngineResult<u64> {
    match key {
        Value::Id(id) => Ok(*id),
        other => Err(unexpected_key(section, "id", other)),
    }
}

/// Reads a text grouping key.
pub(crate) fn text_key(key: &Value, section: &str) -> EngineResult<String> {
    match key {
        Value::Text(text) => Ok(text.clone()),
        other => Err(unexpected_key(section, "text", other)),
    }
}

fn unexpected_key(section: &str, expected: &str, found: &Value) -> EngineError {
    EngineError::computation(
        section,
        format!("expected a {} grouping key, found '{}'", expected, found),
    )
}
