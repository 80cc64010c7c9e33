//! Dashboard summary view.
//!
//! Six independent sub-metrics, each computed in its own section so a fault in
//! one (say, the latest hires listing) leaves the other figures intact.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceStatus, DashboardSummary, HireListing};
use crate::repository::{Field, Filter, OrderBy, RecordKind, Value};
use crate::resilience::Section;

use super::ViewContext;
use super::rounding::{rate, rounded_or_zero};

pub(crate) const TOTAL_EMPLOYEES: &str = "summary.total_employees";
pub(crate) const TOTAL_DEPARTMENTS: &str = "summary.total_departments";
pub(crate) const AVERAGE_SALARY: &str = "summary.average_salary";
pub(crate) const AVERAGE_PERFORMANCE: &str = "summary.average_performance";
pub(crate) const ATTENDANCE_RATE: &str = "summary.attendance_rate";
pub(crate) const LATEST_HIRES: &str = "summary.latest_hires";

/// Computes the dashboard summary.
pub(crate) fn dashboard_summary(ctx: &ViewContext<'_>) -> EngineResult<DashboardSummary> {
    let repository = ctx.repository;

    let total_employees = Section::run(TOTAL_EMPLOYEES, || {
        Ok(repository.count(RecordKind::Employee, &[])?)
    })
    .resolve_or_default(ctx.policy)?;

    let total_departments = Section::run(TOTAL_DEPARTMENTS, || {
        Ok(repository.count(RecordKind::Department, &[])?)
    })
    .resolve_or_default(ctx.policy)?;

    let average_salary = Section::run(AVERAGE_SALARY, || {
        let average = repository.average(RecordKind::Employee, Field::Salary, &[])?;
        Ok(rounded_or_zero(average))
    })
    .resolve_or_default(ctx.policy)?;

    let average_performance = Section::run(AVERAGE_PERFORMANCE, || {
        let average =
            repository.average(RecordKind::PerformanceReview, Field::OverallScore, &[])?;
        Ok(rounded_or_zero(average))
    })
    .resolve_or_default(ctx.policy)?;

    let attendance_rate = Section::run(ATTENDANCE_RATE, || trailing_attendance_rate(ctx))
        .resolve_or_default(ctx.policy)?;

    let latest_hires =
        Section::run(LATEST_HIRES, || latest_hires(ctx)).resolve_or_default(ctx.policy)?;

    Ok(DashboardSummary {
        total_employees,
        total_departments,
        average_salary,
        average_performance,
        attendance_rate,
        latest_hires,
    })
}

/// PRESENT rows over all rows in the trailing summary window, as a percentage.
fn trailing_attendance_rate(ctx: &ViewContext<'_>) -> EngineResult<Decimal> {
    let start = ctx.config.summary_window_start(ctx.today).ok_or_else(|| {
        EngineError::computation(ATTENDANCE_RATE, "attendance window start is out of range")
    })?;

    let window = Filter::on_or_after(Field::Date, start);
    let total = ctx
        .repository
        .count(RecordKind::Attendance, std::slice::from_ref(&window))?;
    let present = ctx.repository.count(
        RecordKind::Attendance,
        &[
            window,
            Filter::eq(Field::Status, Value::Status(AttendanceStatus::Present)),
        ],
    )?;

    Ok(rate(present, total))
}

/// The most recent hires, newest first; equal hire dates list by name.
fn latest_hires(ctx: &ViewContext<'_>) -> EngineResult<Vec<HireListing>> {
    let limit = ctx.config.settings().latest_hires_limit;
    let employees = ctx.repository.employees(
        &[],
        &[OrderBy::desc(Field::HireDate), OrderBy::asc(Field::FullName)],
        Some(limit),
    )?;
    if employees.is_empty() {
        return Ok(Vec::new());
    }

    let names: HashMap<u64, String> = ctx
        .repository
        .departments(&[])?
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();

    employees
        .into_iter()
        .map(|employee| {
            let department_name = names.get(&employee.department).cloned().ok_or_else(|| {
                EngineError::computation(
                    LATEST_HIRES,
                    format!(
                        "employee {} references unknown department {}",
                        employee.employee_id, employee.department
                    ),
                )
            })?;
            Ok(HireListing {
                id: employee.id,
                employee_id: employee.employee_id,
                full_name: employee.full_name,
                email: employee.email,
                department_name,
                position: employee.position,
                salary: employee.salary,
                hire_date: employee.hire_date,
            })
        })
        .collect()
}
