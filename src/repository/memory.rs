//! In-memory repository.
//!
//! Holds the four record collections in insertion order (the "storage order"
//! ties fall back to) and answers every query by scanning them.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{AttendanceRecord, Department, Employee, PerformanceReview};

use super::Repository;
use super::query::{
    AggregateFn, Direction, Field, Filter, GroupKey, GroupRow, OrderBy, RecordKind, Value,
};

/// A [`Repository`] over owned vectors of records.
///
/// # Example
///
/// ```
/// use workforce_analytics::models::Department;
/// use workforce_analytics::repository::{InMemoryRepository, RecordKind, Repository};
/// use rust_decimal::Decimal;
///
/// let repository = InMemoryRepository::new().with_department(Department {
///     id: 1,
///     name: "Engineering".to_string(),
///     code: "ENG".to_string(),
///     budget: Decimal::new(10000000, 2),
///     location: "Brisbane".to_string(),
/// });
/// assert_eq!(repository.count(RecordKind::Department, &[]).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    departments: Vec<Department>,
    employees: Vec<Employee>,
    reviews: Vec<PerformanceReview>,
    attendance: Vec<AttendanceRecord>,
}

#[derive(Clone, Copy)]
enum Row<'a> {
    Department(&'a Department),
    Employee(&'a Employee),
    Review(&'a PerformanceReview),
    Attendance(&'a AttendanceRecord),
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository from complete record collections.
    pub fn from_records(
        departments: Vec<Department>,
        employees: Vec<Employee>,
        reviews: Vec<PerformanceReview>,
        attendance: Vec<AttendanceRecord>,
    ) -> Self {
        Self {
            departments,
            employees,
            reviews,
            attendance,
        }
    }

    /// Adds a department.
    pub fn with_department(mut self, department: Department) -> Self {
        self.departments.push(department);
        self
    }

    /// Adds an employee.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds a performance review.
    pub fn with_review(mut self, review: PerformanceReview) -> Self {
        self.reviews.push(review);
        self
    }

    /// Adds an attendance record.
    pub fn with_attendance(mut self, record: AttendanceRecord) -> Self {
        self.attendance.push(record);
        self
    }

    fn rows(&self, kind: RecordKind) -> Vec<Row<'_>> {
        match kind {
            RecordKind::Department => self.departments.iter().map(Row::Department).collect(),
            RecordKind::Employee => self.employees.iter().map(Row::Employee).collect(),
            RecordKind::PerformanceReview => self.reviews.iter().map(Row::Review).collect(),
            RecordKind::Attendance => self.attendance.iter().map(Row::Attendance).collect(),
        }
    }

    fn department_of(&self, employee: u64) -> RepositoryResult<u64> {
        self.employees
            .iter()
            .find(|e| e.id == employee)
            .map(|e| e.department)
            .ok_or_else(|| RepositoryError::MalformedData {
                message: format!("row references missing employee {}", employee),
            })
    }

    fn value(&self, row: Row<'_>, field: Field) -> RepositoryResult<Value> {
        let value = match (row, field) {
            (Row::Department(d), Field::Id) => Value::Id(d.id),
            (Row::Department(d), Field::DepartmentId) => Value::Id(d.id),
            (Row::Department(d), Field::Name) => Value::Text(d.name.clone()),
            (Row::Department(d), Field::Code) => Value::Text(d.code.clone()),
            (Row::Department(d), Field::Budget) => Value::Decimal(d.budget),
            (Row::Department(d), Field::Location) => Value::Text(d.location.clone()),

            (Row::Employee(e), Field::Id) => Value::Id(e.id),
            (Row::Employee(e), Field::EmployeeId) => Value::Id(e.id),
            (Row::Employee(e), Field::DepartmentId) => Value::Id(e.department),
            (Row::Employee(e), Field::StaffNumber) => Value::Text(e.employee_id.clone()),
            (Row::Employee(e), Field::FullName) => Value::Text(e.full_name.clone()),
            (Row::Employee(e), Field::Email) => Value::Text(e.email.clone()),
            (Row::Employee(e), Field::Position) => Value::Text(e.position.clone()),
            (Row::Employee(e), Field::Salary) => Value::Decimal(e.salary),
            (Row::Employee(e), Field::HireDate) => Value::Date(e.hire_date),

            (Row::Review(r), Field::Id) => Value::Id(r.id),
            (Row::Review(r), Field::EmployeeId) => Value::Id(r.employee),
            (Row::Review(r), Field::DepartmentId) => Value::Id(self.department_of(r.employee)?),
            (Row::Review(r), Field::ReviewPeriod) => Value::Text(r.review_period.clone()),
            (Row::Review(r), Field::OverallScore) => Value::Decimal(r.overall_score),
            (Row::Review(r), Field::TechnicalScore) => Value::Decimal(r.technical_score),
            (Row::Review(r), Field::CommunicationScore) => {
                Value::Decimal(r.communication_score)
            }
            (Row::Review(r), Field::TeamworkScore) => Value::Decimal(r.teamwork_score),
            (Row::Review(r), Field::ReviewDate) => Value::Date(r.review_date),

            (Row::Attendance(a), Field::Id) => Value::Id(a.id),
            (Row::Attendance(a), Field::EmployeeId) => Value::Id(a.employee),
            (Row::Attendance(a), Field::DepartmentId) => {
                Value::Id(self.department_of(a.employee)?)
            }
            (Row::Attendance(a), Field::Date) => Value::Date(a.date),
            (Row::Attendance(a), Field::Status) => Value::Status(a.status),
            (Row::Attendance(a), Field::TotalHours) => Value::Decimal(a.total_hours),

            (row, field) => {
                return Err(RepositoryError::Query {
                    message: format!("field {} is not available on {}", field, row.kind()),
                });
            }
        };
        Ok(value)
    }

    fn matches(&self, row: Row<'_>, filters: &[Filter]) -> RepositoryResult<bool> {
        for filter in filters {
            let value = self.value(row, filter.field())?;
            let keep = match filter {
                Filter::Eq(field, expected) => {
                    compare(&value, expected, *field)? == Ordering::Equal
                }
                Filter::Range { field, from, to } => {
                    let above = match from {
                        Some(bound) => compare(&value, bound, *field)? != Ordering::Less,
                        None => true,
                    };
                    let below = match to {
                        Some(bound) => compare(&value, bound, *field)? != Ordering::Greater,
                        None => true,
                    };
                    above && below
                }
                Filter::Contains(field, needle) => match &value {
                    Value::Text(text) => text.to_lowercase().contains(&needle.to_lowercase()),
                    _ => {
                        return Err(RepositoryError::Query {
                            message: format!("substring filter on non-text field {}", field),
                        });
                    }
                },
            };
            if !keep {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn filtered(&self, kind: RecordKind, filters: &[Filter]) -> RepositoryResult<Vec<Row<'_>>> {
        let mut kept = Vec::new();
        for row in self.rows(kind) {
            if self.matches(row, filters)? {
                kept.push(row);
            }
        }
        Ok(kept)
    }

    fn decimal(&self, row: Row<'_>, field: Field) -> RepositoryResult<Decimal> {
        self.value(row, field)?
            .as_decimal()
            .ok_or_else(|| RepositoryError::Query {
                message: format!("field {} is not numeric", field),
            })
    }

    fn group_key(&self, row: Row<'_>, key: GroupKey) -> RepositoryResult<Value> {
        match key {
            GroupKey::Field(field) => self.value(row, field),
            GroupKey::Month(field) => match self.value(row, field)? {
                Value::Date(date) => date.with_day(1).map(Value::Date).ok_or_else(|| {
                    RepositoryError::MalformedData {
                        message: format!("cannot derive month bucket from {}", date),
                    }
                }),
                _ => Err(RepositoryError::Query {
                    message: format!("month bucket on non-date field {}", field),
                }),
            },
        }
    }

    fn sorted<'a>(&self, rows: Vec<Row<'a>>, order: &[OrderBy]) -> RepositoryResult<Vec<Row<'a>>> {
        if order.is_empty() {
            return Ok(rows);
        }

        let mut keyed = Vec::with_capacity(rows.len());
        for row in rows {
            let keys = order
                .iter()
                .map(|term| self.value(row, term.field))
                .collect::<RepositoryResult<Vec<_>>>()?;
            keyed.push((keys, row));
        }

        // Vec::sort_by is stable, so equal keys keep storage order.
        keyed.sort_by(|(a, _), (b, _)| {
            for (position, term) in order.iter().enumerate() {
                let ordering = a[position]
                    .compare(&b[position])
                    .unwrap_or(Ordering::Equal);
                let ordering = match term.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });

        Ok(keyed.into_iter().map(|(_, row)| row).collect())
    }
}

impl Row<'_> {
    fn kind(&self) -> RecordKind {
        match self {
            Row::Department(_) => RecordKind::Department,
            Row::Employee(_) => RecordKind::Employee,
            Row::Review(_) => RecordKind::PerformanceReview,
            Row::Attendance(_) => RecordKind::Attendance,
        }
    }
}

fn compare(value: &Value, expected: &Value, field: Field) -> RepositoryResult<Ordering> {
    value.compare(expected).ok_or_else(|| RepositoryError::Query {
        message: format!("value {} has the wrong type for field {}", expected, field),
    })
}

fn fold(function: AggregateFn, values: &[Decimal]) -> RepositoryResult<Option<Decimal>> {
    if values.is_empty() {
        return Ok(None);
    }

    let overflow = || RepositoryError::MalformedData {
        message: format!("{:?} aggregate overflowed", function),
    };

    let result = match function {
        AggregateFn::Min => values.iter().min().copied(),
        AggregateFn::Max => values.iter().max().copied(),
        AggregateFn::Sum | AggregateFn::Avg => {
            let mut sum = Decimal::ZERO;
            for value in values {
                sum = sum.checked_add(*value).ok_or_else(overflow)?;
            }
            if function == AggregateFn::Avg {
                Some(
                    sum.checked_div(Decimal::from(values.len()))
                        .ok_or_else(overflow)?,
                )
            } else {
                Some(sum)
            }
        }
    };
    Ok(result)
}

impl Repository for InMemoryRepository {
    fn count(&self, kind: RecordKind, filters: &[Filter]) -> RepositoryResult<u64> {
        Ok(self.filtered(kind, filters)?.len() as u64)
    }

    fn aggregate(
        &self,
        kind: RecordKind,
        function: AggregateFn,
        field: Field,
        filters: &[Filter],
    ) -> RepositoryResult<Option<Decimal>> {
        let values = self
            .filtered(kind, filters)?
            .into_iter()
            .map(|row| self.decimal(row, field))
            .collect::<RepositoryResult<Vec<_>>>()?;
        fold(function, &values)
    }

    fn group_by(
        &self,
        kind: RecordKind,
        key: GroupKey,
        aggregate: Option<(AggregateFn, Field)>,
        filters: &[Filter],
    ) -> RepositoryResult<Vec<GroupRow>> {
        let mut buckets: Vec<(Value, u64, Vec<Decimal>)> = Vec::new();
        let mut positions: HashMap<Value, usize> = HashMap::new();

        for row in self.filtered(kind, filters)? {
            let bucket_key = self.group_key(row, key)?;
            let position = match positions.get(&bucket_key) {
                Some(position) => *position,
                None => {
                    positions.insert(bucket_key.clone(), buckets.len());
                    buckets.push((bucket_key, 0, Vec::new()));
                    buckets.len() - 1
                }
            };

            let bucket = &mut buckets[position];
            bucket.1 += 1;
            if let Some((_, field)) = aggregate {
                bucket.2.push(self.decimal(row, field)?);
            }
        }

        let mut rows = Vec::with_capacity(buckets.len());
        for (bucket_key, count, values) in buckets {
            let aggregate = match aggregate {
                Some((function, _)) => fold(function, &values)?,
                None => None,
            };
            rows.push(GroupRow {
                key: bucket_key,
                count,
                aggregate,
            });
        }
        rows.sort_by(|a, b| a.key.compare(&b.key).unwrap_or(Ordering::Equal));
        Ok(rows)
    }

    fn departments(&self, order: &[OrderBy]) -> RepositoryResult<Vec<Department>> {
        let rows = self.sorted(self.rows(RecordKind::Department), order)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match row {
                Row::Department(d) => Some(d.clone()),
                _ => None,
            })
            .collect())
    }

    fn employees(
        &self,
        filters: &[Filter],
        order: &[OrderBy],
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Employee>> {
        let rows = self.sorted(self.filtered(RecordKind::Employee, filters)?, order)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match row {
                Row::Employee(e) => Some(e.clone()),
                _ => None,
            })
            .take(limit.unwrap_or(usize::MAX))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_department(id: u64, name: &str) -> Department {
        Department {
            id,
            name: name.to_string(),
            code: name[..2].to_uppercase(),
            budget: dec("100000.00"),
            location: "Adelaide".to_string(),
        }
    }

    fn create_test_employee(id: u64, department: u64, salary: &str, hired: NaiveDate) -> Employee {
        Employee {
            id,
            employee_id: format!("EMP-{:04}", id),
            full_name: format!("Employee {}", id),
            email: format!("employee{}@example.com", id),
            department,
            position: "Analyst".to_string(),
            salary: dec(salary),
            hire_date: hired,
        }
    }

    fn create_test_attendance(
        id: u64,
        employee: u64,
        day: NaiveDate,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee,
            date: day,
            check_in: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            check_out: None,
            total_hours: dec("8.00"),
            status,
        }
    }

    fn create_test_repository() -> InMemoryRepository {
        InMemoryRepository::new()
            .with_department(create_test_department(1, "Engineering"))
            .with_department(create_test_department(2, "Finance"))
            .with_employee(create_test_employee(1, 1, "75000.00", date(2024, 1, 10)))
            .with_employee(create_test_employee(2, 1, "90000.00", date(2024, 3, 5)))
            .with_employee(create_test_employee(3, 2, "60000.00", date(2024, 3, 20)))
    }

    #[test]
    fn test_count_with_equality_filter() {
        let repository = create_test_repository();
        let count = repository
            .count(
                RecordKind::Employee,
                &[Filter::eq(Field::DepartmentId, Value::Id(1))],
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_average_of_no_rows_is_none() {
        let repository = InMemoryRepository::new();
        let average = repository
            .average(RecordKind::Employee, Field::Salary, &[])
            .unwrap();
        assert_eq!(average, None);
    }

    #[test]
    fn test_min_max_and_average() {
        let repository = create_test_repository();
        let avg = repository
            .average(RecordKind::Employee, Field::Salary, &[])
            .unwrap();
        let min = repository
            .aggregate(RecordKind::Employee, AggregateFn::Min, Field::Salary, &[])
            .unwrap();
        let max = repository
            .aggregate(RecordKind::Employee, AggregateFn::Max, Field::Salary, &[])
            .unwrap();

        assert_eq!(avg, Some(dec("75000")));
        assert_eq!(min, Some(dec("60000.00")));
        assert_eq!(max, Some(dec("90000.00")));
    }

    #[test]
    fn test_group_by_month_keys_first_of_month() {
        let repository = create_test_repository();
        let rows = repository
            .group_by(RecordKind::Employee, GroupKey::Month(Field::HireDate), None, &[])
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, Value::Date(date(2024, 1, 1)));
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[1].key, Value::Date(date(2024, 3, 1)));
        assert_eq!(rows[1].count, 2);
    }

    #[test]
    fn test_group_by_department_with_average() {
        let repository = create_test_repository();
        let rows = repository
            .group_by(
                RecordKind::Employee,
                GroupKey::Field(Field::DepartmentId),
                Some((AggregateFn::Avg, Field::Salary)),
                &[],
            )
            .unwrap();

        assert_eq!(rows[0].key, Value::Id(1));
        assert_eq!(rows[0].aggregate, Some(dec("82500")));
        assert_eq!(rows[1].key, Value::Id(2));
        assert_eq!(rows[1].count, 1);
    }

    #[test]
    fn test_range_filter_is_inclusive() {
        let repository = create_test_repository();
        let filters = [Filter::Range {
            field: Field::HireDate,
            from: Some(Value::Date(date(2024, 3, 5))),
            to: Some(Value::Date(date(2024, 3, 20))),
        }];
        assert_eq!(repository.count(RecordKind::Employee, &filters).unwrap(), 2);
    }

    #[test]
    fn test_contains_ignores_case() {
        let repository = create_test_repository();
        let filters = [Filter::Contains(Field::Name, "ENGIN".to_string())];
        assert_eq!(repository.count(RecordKind::Department, &filters).unwrap(), 1);
    }

    #[test]
    fn test_top_n_by_hire_date_descending() {
        let repository = create_test_repository();
        let latest = repository
            .employees(&[], &[OrderBy::desc(Field::HireDate)], Some(2))
            .unwrap();

        let ids: Vec<u64> = latest.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_ordering_ties_keep_storage_order() {
        let repository = InMemoryRepository::new()
            .with_employee(create_test_employee(5, 1, "50000.00", date(2024, 1, 1)))
            .with_employee(create_test_employee(6, 1, "50000.00", date(2024, 1, 1)));
        let listed = repository
            .employees(&[], &[OrderBy::desc(Field::Salary)], None)
            .unwrap();
        assert_eq!(listed[0].id, 5);
        assert_eq!(listed[1].id, 6);
    }

    #[test]
    fn test_unknown_field_for_kind_is_query_error() {
        let repository = create_test_repository();
        let result = repository.average(RecordKind::Department, Field::Salary, &[]);
        assert!(matches!(result, Err(RepositoryError::Query { .. })));
    }

    #[test]
    fn test_attendance_department_resolves_through_employee() {
        let repository = create_test_repository()
            .with_attendance(create_test_attendance(
                1,
                3,
                date(2024, 5, 1),
                AttendanceStatus::Present,
            ))
            .with_attendance(create_test_attendance(
                2,
                1,
                date(2024, 5, 1),
                AttendanceStatus::Late,
            ));
        let count = repository
            .count(
                RecordKind::Attendance,
                &[Filter::eq(Field::DepartmentId, Value::Id(2))],
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_orphan_row_is_malformed_data() {
        let repository = InMemoryRepository::new().with_attendance(create_test_attendance(
            1,
            99,
            date(2024, 5, 1),
            AttendanceStatus::Present,
        ));
        let result = repository.group_by(
            RecordKind::Attendance,
            GroupKey::Field(Field::DepartmentId),
            None,
            &[],
        );
        assert!(matches!(result, Err(RepositoryError::MalformedData { .. })));
    }
}
