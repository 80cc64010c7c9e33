//! Employee model.
//!
//! This module defines the Employee record read by the reporting engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee as persisted by the records service.
///
/// Every employee belongs to exactly one department, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Storage identifier.
    pub id: u64,
    /// Unique staff number (e.g., "EMP-0042").
    pub employee_id: String,
    /// The employee's full name.
    pub full_name: String,
    /// Unique email address.
    pub email: String,
    /// Id of the owning department.
    pub department: u64,
    /// Job title.
    pub position: String,
    /// Annual salary.
    pub salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}
