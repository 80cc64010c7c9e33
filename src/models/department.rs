//! Department model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An organisational unit owning zero or more employees.
///
/// # Example
///
/// ```
/// use workforce_analytics::models::Department;
/// use rust_decimal::Decimal;
///
/// let department = Department {
///     id: 1,
///     name: "Engineering".to_string(),
///     code: "ENG".to_string(),
///     budget: Decimal::new(25000000, 2),
///     location: "Melbourne".to_string(),
/// };
/// assert_eq!(department.code, "ENG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Storage identifier.
    pub id: u64,
    /// Unique department name.
    pub name: String,
    /// Unique short code (e.g., "ENG").
    pub code: String,
    /// Annual budget.
    pub budget: Decimal,
    /// Office location.
    pub location: String,
}
