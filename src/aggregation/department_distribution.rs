//! Department head-count distribution.

use crate::error::EngineResult;
use crate::models::{CategoryChart, DepartmentDistribution};
use crate::repository::{Field, GroupKey, RecordKind};
use crate::resilience::Section;

use super::{ViewContext, join_departments};

pub(crate) const SECTION: &str = "department_distribution";

/// Employee count per department, largest first; equal counts list by name.
///
/// Departments without employees are included with a count of zero.
pub(crate) fn department_distribution(
    ctx: &ViewContext<'_>,
) -> EngineResult<DepartmentDistribution> {
    Section::run(SECTION, || {
        let groups = ctx.repository.group_by(
            RecordKind::Employee,
            GroupKey::Field(Field::DepartmentId),
            None,
            &[],
        )?;

        let mut rows: Vec<(String, u64)> = join_departments(ctx.repository, groups, SECTION)?
            .into_iter()
            .map(|(department, group)| (department.name, group.map_or(0, |g| g.count)))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(CategoryChart::from_rows(
            rows,
            &ctx.config.palettes().department_distribution,
        ))
    })
    .resolve_or_default(ctx.policy)
}
