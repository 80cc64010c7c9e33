//! Detailed statistics for a single department.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DepartmentStatistics, PerformanceStats, SalaryRange};
use crate::repository::{AggregateFn, Field, Filter, GroupKey, RecordKind, Repository, Value};

use super::buckets::text_key;
use super::rounding::rounded_or_zero;

pub(crate) const SECTION: &str = "department_statistics";

/// Head count, salary figures, positions and review averages for one department.
///
/// Review averages are reported only when at least one of the department's
/// employees has a review.
pub(crate) fn department_statistics(
    repository: &dyn Repository,
    department_id: u64,
) -> EngineResult<DepartmentStatistics> {
    let department = repository
        .departments(&[])?
        .into_iter()
        .find(|d| d.id == department_id)
        .ok_or(EngineError::DepartmentNotFound { id: department_id })?;

    let members = [Filter::eq(Field::DepartmentId, Value::Id(department_id))];

    let employee_count = repository.count(RecordKind::Employee, &members)?;
    let average_salary =
        rounded_or_zero(repository.average(RecordKind::Employee, Field::Salary, &members)?);
    let salary_range = SalaryRange {
        min: repository
            .aggregate(RecordKind::Employee, AggregateFn::Min, Field::Salary, &members)?
            .unwrap_or(Decimal::ZERO),
        max: repository
            .aggregate(RecordKind::Employee, AggregateFn::Max, Field::Salary, &members)?
            .unwrap_or(Decimal::ZERO),
    };

    let positions = repository
        .group_by(
            RecordKind::Employee,
            GroupKey::Field(Field::Position),
            None,
            &members,
        )?
        .iter()
        .map(|row| text_key(&row.key, SECTION))
        .collect::<EngineResult<Vec<_>>>()?;

    let performance = if repository.count(RecordKind::PerformanceReview, &members)? > 0 {
        let average = |field| -> EngineResult<Decimal> {
            Ok(rounded_or_zero(repository.average(
                RecordKind::PerformanceReview,
                field,
                &members,
            )?))
        };
        Some(PerformanceStats {
            average_overall: average(Field::OverallScore)?,
            average_technical: average(Field::TechnicalScore)?,
            average_communication: average(Field::CommunicationScore)?,
            average_teamwork: average(Field::TeamworkScore)?,
        })
    } else {
        None
    };

    Ok(DepartmentStatistics {
        department,
        employee_count,
        average_salary,
        salary_range,
        positions,
        performance,
    })
}
