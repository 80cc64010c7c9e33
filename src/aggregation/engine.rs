//! The aggregation engine.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::config::ReportingConfig;
use crate::error::EngineResult;
use crate::export::{ExportFormat, ExportOutput, render_text};
use crate::models::{
    AnalyticsExport, AttendanceRates, DashboardSummary, DepartmentDistribution,
    DepartmentStatistics, HireTimeline, PerformanceByDepartment, PerformanceTrend,
    SalaryDistribution,
};
use crate::repository::Repository;
use crate::resilience::{FaultSink, SectionPolicy, TracingFaultSink};

use super::ViewContext;
use super::attendance_rate::attendance_rate_by_month;
use super::department_distribution::department_distribution;
use super::department_statistics::department_statistics;
use super::hire_timeline::hire_timeline;
use super::performance_by_department::performance_by_department;
use super::performance_trend::performance_trend;
use super::salary_distribution::salary_distribution;
use super::summary::dashboard_summary;

/// Computes dashboard views and exports from a [`Repository`].
///
/// Every view isolates computation faults per section: the fault is reported
/// to the configured [`FaultSink`] and the section falls back to its zero or
/// empty default. Repository connectivity and query failures are returned to
/// the caller. [`export`](Self::export) isolates nothing; any fault aborts it.
///
/// The engine holds no mutable state and may be shared between threads.
///
/// # Example
///
/// ```
/// use workforce_analytics::aggregation::AggregationEngine;
/// use workforce_analytics::config::ReportingConfig;
/// use workforce_analytics::models::{Department, Employee};
/// use workforce_analytics::repository::InMemoryRepository;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = |id: u64, salary: i64| Employee {
///     id,
///     employee_id: format!("EMP-{:04}", id),
///     full_name: format!("Employee {}", id),
///     email: format!("employee{}@example.com", id),
///     department: 1,
///     position: "Engineer".to_string(),
///     salary: Decimal::new(salary, 2),
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
/// };
///
/// let repository = InMemoryRepository::new()
///     .with_department(Department {
///         id: 1,
///         name: "Engineering".to_string(),
///         code: "ENG".to_string(),
///         budget: Decimal::new(50000000, 2),
///         location: "Melbourne".to_string(),
///     })
///     .with_employee(employee(1, 7500000))
///     .with_employee(employee(2, 9000000));
///
/// let engine = AggregationEngine::new(repository, ReportingConfig::default());
/// let salaries = engine.salary_distribution().unwrap();
///
/// assert_eq!(salaries.labels, vec!["Engineering"]);
/// assert_eq!(salaries.data, vec![Decimal::new(8250000, 2)]);
/// ```
pub struct AggregationEngine<R> {
    repository: R,
    config: ReportingConfig,
    faults: Arc<dyn FaultSink>,
    clock: Arc<dyn Clock>,
}

impl<R: Repository> AggregationEngine<R> {
    /// Creates an engine that logs isolated faults and reads the system clock.
    pub fn new(repository: R, config: ReportingConfig) -> Self {
        Self {
            repository,
            config,
            faults: Arc::new(TracingFaultSink),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the sink isolated faults are reported to.
    pub fn with_fault_sink(mut self, faults: Arc<dyn FaultSink>) -> Self {
        self.faults = faults;
        self
    }

    /// Replaces the clock trailing windows and export timestamps are read from.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the reporting configuration.
    pub fn config(&self) -> &ReportingConfig {
        &self.config
    }

    fn context<'a>(&'a self, policy: SectionPolicy<'a>) -> ViewContext<'a> {
        ViewContext {
            repository: &self.repository,
            config: &self.config,
            today: self.clock.today(),
            policy,
        }
    }

    fn isolated(&self) -> ViewContext<'_> {
        self.context(SectionPolicy::Isolate(self.faults.as_ref()))
    }

    /// Headline counts, averages, trailing attendance rate and latest hires.
    pub fn dashboard_summary(&self) -> EngineResult<DashboardSummary> {
        let summary = dashboard_summary(&self.isolated())?;
        debug!(
            total_employees = summary.total_employees,
            latest_hires = summary.latest_hires.len(),
            "Computed dashboard summary"
        );
        Ok(summary)
    }

    /// Employee count per department, largest first.
    pub fn department_distribution(&self) -> EngineResult<DepartmentDistribution> {
        let chart = department_distribution(&self.isolated())?;
        debug!(departments = chart.len(), "Computed department distribution");
        Ok(chart)
    }

    /// Average salary per staffed department, highest first.
    pub fn salary_distribution(&self) -> EngineResult<SalaryDistribution> {
        let chart = salary_distribution(&self.isolated())?;
        debug!(departments = chart.len(), "Computed salary distribution");
        Ok(chart)
    }

    /// Average overall score per review period, in period order.
    pub fn performance_trend(&self) -> EngineResult<PerformanceTrend> {
        let chart = performance_trend(&self.isolated())?;
        debug!(periods = chart.labels.len(), "Computed performance trend");
        Ok(chart)
    }

    /// Attendance rate per month over the trailing monthly window.
    pub fn attendance_rate_by_month(&self) -> EngineResult<AttendanceRates> {
        let chart = attendance_rate_by_month(&self.isolated())?;
        debug!(months = chart.len(), "Computed monthly attendance rates");
        Ok(chart)
    }

    /// Hires per calendar month, oldest first.
    pub fn hire_timeline(&self) -> EngineResult<HireTimeline> {
        let chart = hire_timeline(&self.isolated())?;
        debug!(months = chart.labels.len(), "Computed hire timeline");
        Ok(chart)
    }

    /// Average overall score per reviewed department.
    pub fn performance_by_department(&self) -> EngineResult<PerformanceByDepartment> {
        let chart = performance_by_department(&self.isolated())?;
        debug!(departments = chart.len(), "Computed performance by department");
        Ok(chart)
    }

    /// Detailed statistics for one department.
    ///
    /// Returns [`EngineError::DepartmentNotFound`](crate::error::EngineError::DepartmentNotFound)
    /// for an unknown id. This lookup is not part of the export.
    pub fn department_statistics(&self, department_id: u64) -> EngineResult<DepartmentStatistics> {
        let stats = department_statistics(&self.repository, department_id)?;
        debug!(
            department_id,
            employee_count = stats.employee_count,
            "Computed department statistics"
        );
        Ok(stats)
    }

    /// Composes all seven views into one export document.
    ///
    /// Nothing is isolated: the first faulting section aborts composition with
    /// [`EngineError::ExportComposition`](crate::error::EngineError::ExportComposition).
    pub fn compose_export(&self) -> EngineResult<AnalyticsExport> {
        let ctx = self.context(SectionPolicy::FailFast);

        Ok(AnalyticsExport {
            export_id: Uuid::new_v4(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: self.clock.now(),
            summary: dashboard_summary(&ctx)?,
            department_stats: department_distribution(&ctx)?,
            salary_distribution: salary_distribution(&ctx)?,
            performance_trends: performance_trend(&ctx)?,
            attendance_rates: attendance_rate_by_month(&ctx)?,
            hire_timeline: hire_timeline(&ctx)?,
            performance_by_department: performance_by_department(&ctx)?,
        })
    }

    /// Composes the export and renders it in `format`.
    ///
    /// Either the complete export is returned or the composition fault is.
    pub fn export(&self, format: ExportFormat) -> EngineResult<ExportOutput> {
        let start = Instant::now();
        let document = self.compose_export()?;
        let export_id = document.export_id;

        let output = match format {
            ExportFormat::Structured => ExportOutput::Structured(Box::new(document)),
            ExportFormat::Text => {
                ExportOutput::Text(render_text(&document, self.config.settings()))
            }
        };

        info!(
            export_id = %export_id,
            format = %format,
            duration_ms = start.elapsed().as_millis() as u64,
            "Export composed"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::test_support::*;
    use crate::clock::FixedClock;
    use crate::error::EngineError;
    use crate::models::AttendanceStatus;
    use crate::repository::InMemoryRepository;
    use crate::resilience::MemoryFaultSink;

    fn create_test_engine(
        repository: InMemoryRepository,
    ) -> (AggregationEngine<InMemoryRepository>, Arc<MemoryFaultSink>) {
        let sink = Arc::new(MemoryFaultSink::new());
        let engine = AggregationEngine::new(repository, ReportingConfig::default())
            .with_fault_sink(sink.clone())
            .with_clock(Arc::new(FixedClock::at_date(date(2026, 10, 19))));
        (engine, sink)
    }

    #[test]
    fn test_views_over_test_repository() {
        let repository = create_test_repository().with_attendance(create_test_attendance(
            1,
            1,
            date(2026, 10, 5),
            AttendanceStatus::Present,
        ));
        let (engine, sink) = create_test_engine(repository);

        assert_eq!(engine.dashboard_summary().unwrap().attendance_rate, dec("100"));
        assert_eq!(engine.department_distribution().unwrap().data, vec![2, 1, 0]);
        assert_eq!(engine.salary_distribution().unwrap().len(), 2);
        assert_eq!(engine.performance_trend().unwrap().labels.len(), 2);
        assert_eq!(engine.attendance_rate_by_month().unwrap().len(), 7);
        assert_eq!(engine.hire_timeline().unwrap().labels.len(), 2);
        assert_eq!(engine.performance_by_department().unwrap().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_views_are_idempotent() {
        let (engine, _) = create_test_engine(create_test_repository());

        assert_eq!(
            engine.dashboard_summary().unwrap(),
            engine.dashboard_summary().unwrap()
        );
        assert_eq!(
            engine.performance_trend().unwrap(),
            engine.performance_trend().unwrap()
        );
    }

    #[test]
    fn test_export_structured_carries_metadata() {
        let (engine, _) = create_test_engine(create_test_repository());

        let document = match engine.export(ExportFormat::Structured).unwrap() {
            ExportOutput::Structured(document) => document,
            ExportOutput::Text(_) => panic!("Expected structured export"),
        };
        assert_eq!(document.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(document.generated_at.to_rfc3339(), "2026-10-19T00:00:00+00:00");
        assert_eq!(document.summary.total_employees, 3);
        assert_eq!(document.department_stats.labels[0], "Engineering");
    }

    #[test]
    fn test_export_ids_are_unique() {
        let (engine, _) = create_test_engine(create_test_repository());
        let first = engine.compose_export().unwrap();
        let second = engine.compose_export().unwrap();
        assert_ne!(first.export_id, second.export_id);
    }

    #[test]
    fn test_export_fails_where_view_isolates() {
        let repository =
            create_test_repository().with_review(create_test_review(9, 77, "2024-Q3", "3.00"));
        let (engine, sink) = create_test_engine(repository);

        assert!(engine.performance_by_department().is_ok());
        assert_eq!(sink.sections(), vec!["performance_by_department"]);

        let result = engine.export(ExportFormat::Text);
        assert!(matches!(result, Err(EngineError::ExportComposition { .. })));
    }

    #[test]
    fn test_department_statistics_through_engine() {
        let (engine, _) = create_test_engine(create_test_repository());
        assert_eq!(engine.department_statistics(2).unwrap().employee_count, 1);
        assert!(matches!(
            engine.department_statistics(404),
            Err(EngineError::DepartmentNotFound { id: 404 })
        ));
    }
}
