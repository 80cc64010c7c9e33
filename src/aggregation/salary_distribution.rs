//! Average salary per department.

use crate::error::EngineResult;
use crate::models::{CategoryChart, SalaryDistribution};
use crate::repository::{AggregateFn, Field, GroupKey, RecordKind};
use crate::resilience::Section;

use super::rounding::round_half_up;
use super::{ViewContext, join_departments};

pub(crate) const SECTION: &str = "salary_distribution";

/// Average salary per staffed department, highest first; equal averages list by name.
pub(crate) fn salary_distribution(ctx: &ViewContext<'_>) -> EngineResult<SalaryDistribution> {
    Section::run(SECTION, || {
        let groups = ctx.repository.group_by(
            RecordKind::Employee,
            GroupKey::Field(Field::DepartmentId),
            Some((AggregateFn::Avg, Field::Salary)),
            &[],
        )?;

        let mut rows: Vec<_> = join_departments(ctx.repository, groups, SECTION)?
            .into_iter()
            .filter_map(|(department, group)| {
                let average = group?.aggregate?;
                Some((department.name, round_half_up(average)))
            })
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(CategoryChart::from_rows(
            rows,
            &ctx.config.palettes().salary_distribution,
        ))
    })
    .resolve_or_default(ctx.policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::test_support::*;
    use crate::config::ReportingConfig;
    use crate::repository::InMemoryRepository;
    use crate::resilience::MemoryFaultSink;

    #[test]
    fn test_single_department_average() {
        let repository = InMemoryRepository::new()
            .with_department(create_test_department(1, "Engineering", "ENG"))
            .with_employee(create_test_employee(1, 1, "75000.00", date(2024, 1, 1)))
            .with_employee(create_test_employee(2, 1, "90000.00", date(2024, 2, 1)));
        let config = ReportingConfig::default();
        let sink = MemoryFaultSink::new();
        let ctx = create_test_context(&repository, &config, &sink);

        let chart = salary_distribution(&ctx).unwrap();
        assert_eq!(chart.labels, vec!["Engineering"]);
        assert_eq!(chart.data, vec![dec("82500.00")]);
        assert_eq!(chart.colors, vec!["#36A2EB"]);
    }

    #[test]
    fn test_unstaffed_department_excluded_and_sorted_descending() {
        let repository = create_test_repository();
        let config = ReportingConfig::default();
        let sink = MemoryFaultSink::new();
        let ctx = create_test_context(&repository, &config, &sink);

        let chart = salary_distribution(&ctx).unwrap();
        assert_eq!(chart.labels, vec!["Engineering", "Finance"]);
        assert_eq!(chart.data, vec![dec("82500.00"), dec("60000.00")]);
    }

    #[test]
    fn test_average_rounded_half_up() {
        let repository = InMemoryRepository::new()
            .with_department(create_test_department(1, "Support", "SUP"))
            .with_employee(create_test_employee(1, 1, "100.00", date(2024, 1, 1)))
            .with_employee(create_test_employee(2, 1, "100.01", date(2024, 1, 1)));
        let config = ReportingConfig::default();
        let sink = MemoryFaultSink::new();
        let ctx = create_test_context(&repository, &config, &sink);

        // 100.005 rounds up, not to even.
        let chart = salary_distribution(&ctx).unwrap();
        assert_eq!(chart.data, vec![dec("100.01")]);
    }
}
