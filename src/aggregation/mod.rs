//! Aggregation logic for the reporting engine.
//!
//! This module contains the seven dashboard views (summary, department
//! distribution, salary distribution, performance trend, monthly attendance
//! rate, hire timeline and performance by department), the supplemental
//! department statistics lookup, and the [`AggregationEngine`] that runs
//! them under the right failure policy.

mod attendance_rate;
mod buckets;
mod department_distribution;
mod department_statistics;
mod engine;
mod hire_timeline;
mod performance_by_department;
mod performance_trend;
mod rounding;
mod salary_distribution;
mod summary;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::ReportingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::Department;
use crate::repository::{Field, GroupRow, OrderBy, Repository};
use crate::resilience::SectionPolicy;

pub use buckets::{month_label, month_start, months_between};
pub use engine::AggregationEngine;
pub use rounding::{REPORT_DECIMAL_PLACES, rate, round_half_up, rounded_or_zero};

/// Everything a view needs to compute itself.
#[derive(Clone, Copy)]
pub(crate) struct ViewContext<'a> {
    pub repository: &'a dyn Repository,
    pub config: &'a ReportingConfig,
    /// The day trailing windows end on.
    pub today: NaiveDate,
    pub policy: SectionPolicy<'a>,
}

/// Pairs every department, in name order, with its group row from a
/// `GroupKey::Field(Field::DepartmentId)` query.
///
/// A group row keyed by a department that does not exist is a computation
/// fault of `section`.
pub(crate) fn join_departments(
    repository: &dyn Repository,
    groups: Vec<GroupRow>,
    section: &str,
) -> EngineResult<Vec<(Department, Option<GroupRow>)>> {
    let mut by_department: HashMap<u64, GroupRow> = HashMap::with_capacity(groups.len());
    for row in groups {
        by_department.insert(buckets::id_key(&row.key, section)?, row);
    }

    let joined: Vec<(Department, Option<GroupRow>)> = repository
        .departments(&[OrderBy::asc(Field::Name)])?
        .into_iter()
        .map(|department| {
            let row = by_department.remove(&department.id);
            (department, row)
        })
        .collect();

    if let Some(unknown) = by_department.keys().min() {
        return Err(EngineError::computation(
            section,
            format!("rows reference unknown department {}", unknown),
        ));
    }
    Ok(joined)
}
