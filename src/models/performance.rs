//! Performance review model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A periodic review of one employee.
///
/// Scores carry two fractional digits. The review period is a free-text
/// label such as "2024-Q3"; lexical order of labels is period order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// Storage identifier.
    pub id: u64,
    /// Id of the reviewed employee.
    pub employee: u64,
    /// Period label (e.g., "2024-Q3").
    pub review_period: String,
    /// Overall score.
    pub overall_score: Decimal,
    /// Technical score.
    pub technical_score: Decimal,
    /// Communication score.
    pub communication_score: Decimal,
    /// Teamwork score.
    pub teamwork_score: Decimal,
    /// The date the review took place.
    pub review_date: NaiveDate,
}
