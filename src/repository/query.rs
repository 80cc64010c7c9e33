//! Query vocabulary shared by the engine and repository implementations.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::AttendanceStatus;

/// The four record kinds a repository serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Department records.
    Department,
    /// Employee records.
    Employee,
    /// Performance review records.
    PerformanceReview,
    /// Attendance records.
    Attendance,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Department => "department",
            RecordKind::Employee => "employee",
            RecordKind::PerformanceReview => "performance_review",
            RecordKind::Attendance => "attendance",
        };
        f.write_str(name)
    }
}

/// Addressable fields across record kinds.
///
/// `DepartmentId` is available on employees directly and on reviews and
/// attendance through their owning employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Storage identifier of the record itself.
    Id,
    /// Department name.
    Name,
    /// Department code.
    Code,
    /// Department budget.
    Budget,
    /// Department location.
    Location,
    /// Owning (or the owning employee's) department id.
    DepartmentId,
    /// Owning employee id.
    EmployeeId,
    /// Employee staff number.
    StaffNumber,
    /// Employee full name.
    FullName,
    /// Employee email.
    Email,
    /// Employee job title.
    Position,
    /// Employee salary.
    Salary,
    /// Employee hire date.
    HireDate,
    /// Review period label.
    ReviewPeriod,
    /// Review overall score.
    OverallScore,
    /// Review technical score.
    TechnicalScore,
    /// Review communication score.
    CommunicationScore,
    /// Review teamwork score.
    TeamworkScore,
    /// Review date.
    ReviewDate,
    /// Attendance date.
    Date,
    /// Attendance status.
    Status,
    /// Attendance hours.
    TotalHours,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A typed field value used in filters and grouping keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A storage identifier.
    Id(u64),
    /// Free text.
    Text(String),
    /// A decimal quantity.
    Decimal(Decimal),
    /// A calendar date.
    Date(NaiveDate),
    /// An attendance status.
    Status(AttendanceStatus),
}

impl Value {
    /// Compares two values of the same variant; mixed variants are unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Id(a), Value::Id(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Status(a), Value::Status(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Returns the decimal payload, if any.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Id(id) => write!(f, "{}", id),
            Value::Text(text) => f.write_str(text),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Date(date) => write!(f, "{}", date),
            Value::Status(status) => f.write_str(status.as_str()),
        }
    }
}

/// A row filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Field equals value.
    Eq(Field, Value),
    /// Field lies within an inclusive range; either bound may be open.
    Range {
        /// The field being bounded.
        field: Field,
        /// Inclusive lower bound.
        from: Option<Value>,
        /// Inclusive upper bound.
        to: Option<Value>,
    },
    /// Text field contains the needle, ignoring case.
    Contains(Field, String),
}

impl Filter {
    /// Shorthand for an equality filter.
    pub fn eq(field: Field, value: Value) -> Self {
        Filter::Eq(field, value)
    }

    /// Shorthand for a lower-bounded date range (`field >= date`).
    pub fn on_or_after(field: Field, date: NaiveDate) -> Self {
        Filter::Range {
            field,
            from: Some(Value::Date(date)),
            to: None,
        }
    }

    /// Returns the field this filter reads.
    pub fn field(&self) -> Field {
        match self {
            Filter::Eq(field, _) | Filter::Contains(field, _) => *field,
            Filter::Range { field, .. } => *field,
        }
    }
}

/// Aggregate functions over decimal fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFn {
    /// Arithmetic mean.
    Avg,
    /// Minimum.
    Min,
    /// Maximum.
    Max,
    /// Sum.
    Sum,
}

/// How rows are bucketed by `group_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// One bucket per distinct field value.
    Field(Field),
    /// One bucket per calendar month of a date field, keyed by the first of the month.
    Month(Field),
}

impl GroupKey {
    /// Returns the field the key is derived from.
    pub fn field(&self) -> Field {
        match self {
            GroupKey::Field(field) | GroupKey::Month(field) => *field,
        }
    }
}

/// One bucket produced by `group_by`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    /// The bucket key.
    pub key: Value,
    /// Number of rows in the bucket.
    pub count: u64,
    /// The requested aggregate, `None` if not requested or no row had a value.
    pub aggregate: Option<Decimal>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// One ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to sort on.
    pub field: Field,
    /// The direction to sort in.
    pub direction: Direction,
}

impl OrderBy {
    /// Ascending order on `field`.
    pub fn asc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    /// Descending order on `field`.
    pub fn desc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_same_variant() {
        assert_eq!(Value::Id(1).compare(&Value::Id(2)), Some(Ordering::Less));
        assert_eq!(
            Value::Text("b".to_string()).compare(&Value::Text("a".to_string())),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_compare_mixed_variants_is_unordered() {
        assert_eq!(Value::Id(1).compare(&Value::Text("1".to_string())), None);
    }

    #[test]
    fn test_on_or_after_builds_open_range() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let filter = Filter::on_or_after(Field::Date, date);
        assert_eq!(
            filter,
            Filter::Range {
                field: Field::Date,
                from: Some(Value::Date(date)),
                to: None,
            }
        );
        assert_eq!(filter.field(), Field::Date);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Status(AttendanceStatus::Late).to_string(), "LATE");
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()).to_string(),
            "2026-03-01"
        );
    }
}
