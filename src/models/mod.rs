//! Core data models for the reporting engine.
//!
//! Entity records mirror what the records service persists; view records are
//! the typed outputs of the aggregation engine.

mod attendance;
mod chart;
mod department;
mod employee;
mod export;
mod performance;
mod summary;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use chart::{
    AttendanceRates, CategoryChart, DepartmentDistribution, HireTimeline, LineStyle,
    PerformanceByDepartment, PerformanceTrend, SalaryDistribution, TrendChart,
};
pub use department::Department;
pub use employee::Employee;
pub use export::AnalyticsExport;
pub use performance::PerformanceReview;
pub use summary::{
    DashboardSummary, DepartmentStatistics, HireListing, PerformanceStats, SalaryRange,
};
