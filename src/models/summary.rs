//! Scalar summary records: dashboard summary, hire listings and department statistics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Department;

/// A recently hired employee as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireListing {
    /// Storage identifier of the employee.
    pub id: u64,
    /// Unique staff number.
    pub employee_id: String,
    /// The employee's full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Name of the owning department.
    pub department_name: String,
    /// Job title.
    pub position: String,
    /// Annual salary.
    pub salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

/// Headline figures for the dashboard.
///
/// Every figure has a zero/empty default, so a data set with no records
/// yields [`DashboardSummary::default`].
///
/// # Example
///
/// ```
/// use workforce_analytics::models::DashboardSummary;
/// use rust_decimal::Decimal;
///
/// let summary = DashboardSummary::default();
/// assert_eq!(summary.total_employees, 0);
/// assert_eq!(summary.attendance_rate, Decimal::ZERO);
/// assert!(summary.latest_hires.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of employees.
    pub total_employees: u64,
    /// Number of departments.
    pub total_departments: u64,
    /// Mean salary across all employees.
    pub average_salary: Decimal,
    /// Mean overall score across all reviews.
    pub average_performance: Decimal,
    /// Percentage of PRESENT rows over the trailing summary window.
    pub attendance_rate: Decimal,
    /// Most recent hires, newest first.
    pub latest_hires: Vec<HireListing>,
}

/// Lowest and highest salary in a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lowest salary.
    pub min: Decimal,
    /// Highest salary.
    pub max: Decimal,
}

/// Mean review scores across a department's reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Mean overall score.
    pub average_overall: Decimal,
    /// Mean technical score.
    pub average_technical: Decimal,
    /// Mean communication score.
    pub average_communication: Decimal,
    /// Mean teamwork score.
    pub average_teamwork: Decimal,
}

/// Detailed statistics for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStatistics {
    /// The department record.
    pub department: Department,
    /// Number of employees in the department.
    pub employee_count: u64,
    /// Mean salary, zero when the department has no employees.
    pub average_salary: Decimal,
    /// Salary bounds, zero when the department has no employees.
    pub salary_range: SalaryRange,
    /// Distinct job titles, ascending.
    pub positions: Vec<String>,
    /// Review averages; absent when no employee of the department has a review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceStats>,
}
