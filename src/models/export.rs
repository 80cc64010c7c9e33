//! The composite analytics export record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AttendanceRates, DashboardSummary, DepartmentDistribution, HireTimeline,
    PerformanceByDepartment, PerformanceTrend, SalaryDistribution,
};

/// All seven views composed into one internally consistent document.
///
/// An export is either complete or not produced at all; there is no
/// partially composed variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsExport {
    /// Unique identifier for this export.
    pub export_id: Uuid,
    /// The version of the engine that produced the export.
    pub engine_version: String,
    /// When the export was generated.
    pub generated_at: DateTime<Utc>,
    /// Dashboard headline figures.
    pub summary: DashboardSummary,
    /// Head count per department.
    pub department_stats: DepartmentDistribution,
    /// Average salary per department.
    pub salary_distribution: SalaryDistribution,
    /// Average score per review period.
    pub performance_trends: PerformanceTrend,
    /// Attendance rate per month.
    pub attendance_rates: AttendanceRates,
    /// Hires per month.
    pub hire_timeline: HireTimeline,
    /// Average score per department.
    pub performance_by_department: PerformanceByDepartment,
}
