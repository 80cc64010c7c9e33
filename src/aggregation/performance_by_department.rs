//! Average overall review score per department.

use crate::error::EngineResult;
use crate::models::{CategoryChart, PerformanceByDepartment};
use crate::repository::{AggregateFn, Field, GroupKey, RecordKind};
use crate::resilience::Section;

use super::rounding::round_half_up;
use super::{ViewContext, join_departments};

pub(crate) const SECTION: &str = "performance_by_department";

/// Average overall score per reviewed department, by department name.
///
/// A review counts toward the department its employee belongs to now.
pub(crate) fn performance_by_department(
    ctx: &ViewContext<'_>,
) -> EngineResult<PerformanceByDepartment> {
    Section::run(SECTION, || {
        let groups = ctx.repository.group_by(
            RecordKind::PerformanceReview,
            GroupKey::Field(Field::DepartmentId),
            Some((AggregateFn::Avg, Field::OverallScore)),
            &[],
        )?;

        let rows = join_departments(ctx.repository, groups, SECTION)?
            .into_iter()
            .filter_map(|(department, group)| {
                let average = group?.aggregate?;
                Some((department.name, round_half_up(average)))
            })
            .collect();

        Ok(CategoryChart::from_rows(
            rows,
            &ctx.config.palettes().performance_by_department,
        ))
    })
    .resolve_or_default(ctx.policy)
}
