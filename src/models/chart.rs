//! Chart-ready view records.
//!
//! This module contains the [`CategoryChart`] and [`TrendChart`] records returned
//! by the chart views. Every chart exposes parallel `labels` and `data` sequences;
//! category charts add a parallel `colors` sequence and trend charts carry the
//! [`LineStyle`] of their single series.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display style for a time-series line.
///
/// # Example
///
/// ```
/// use workforce_analytics::models::LineStyle;
/// use rust_decimal::Decimal;
///
/// let style = LineStyle {
///     label: "New Hires".to_string(),
///     border_color: "#FF6384".to_string(),
///     background_color: "rgba(255, 99, 132, 0.1)".to_string(),
///     tension: Decimal::new(4, 1),
/// };
/// assert_eq!(style.tension.to_string(), "0.4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Series label shown in the chart legend.
    pub label: String,
    /// Line colour.
    pub border_color: String,
    /// Fill colour under the line.
    pub background_color: String,
    /// Curve smoothing factor.
    pub tension: Decimal,
}

/// A chart of named categories (departments, months) with one value each.
///
/// `labels`, `data` and `colors` always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryChart<T> {
    /// Category names in display order.
    pub labels: Vec<String>,
    /// One value per label.
    pub data: Vec<T>,
    /// One display colour per label.
    pub colors: Vec<String>,
}

impl<T> CategoryChart<T> {
    /// Builds a chart from ordered `(label, value)` rows, assigning colours from
    /// `palette` cyclically.
    ///
    /// An empty palette leaves every colour blank; configuration loading rejects
    /// empty palettes, so this only happens for hand-built configs.
    ///
    /// # Example
    ///
    /// ```
    /// use workforce_analytics::models::CategoryChart;
    ///
    /// let palette = vec!["#111".to_string(), "#222".to_string()];
    /// let chart = CategoryChart::from_rows(
    ///     vec![("a".to_string(), 1u64), ("b".to_string(), 2), ("c".to_string(), 3)],
    ///     &palette,
    /// );
    /// assert_eq!(chart.colors, vec!["#111", "#222", "#111"]);
    /// ```
    pub fn from_rows(rows: Vec<(String, T)>, palette: &[String]) -> Self {
        let mut labels = Vec::with_capacity(rows.len());
        let mut data = Vec::with_capacity(rows.len());
        let mut colors = Vec::with_capacity(rows.len());

        for (index, (label, value)) in rows.into_iter().enumerate() {
            labels.push(label);
            data.push(value);
            colors.push(cycle_color(palette, index));
        }

        Self {
            labels,
            data,
            colors,
        }
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the chart has no categories.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, value)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &T)> {
        self.labels.iter().map(String::as_str).zip(self.data.iter())
    }
}

/// A single-series chart over ordered time buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendChart<T> {
    /// Bucket labels in chronological order.
    pub labels: Vec<String>,
    /// One value per label.
    pub data: Vec<T>,
    /// Display style for the series.
    pub style: LineStyle,
}

impl<T> TrendChart<T> {
    /// Creates a chart with no points.
    pub fn empty(style: LineStyle) -> Self {
        Self {
            labels: Vec::new(),
            data: Vec::new(),
            style,
        }
    }

    /// Builds a chart from ordered `(label, value)` points.
    pub fn from_points(points: Vec<(String, T)>, style: LineStyle) -> Self {
        let (labels, data) = points.into_iter().unzip();
        Self {
            labels,
            data,
            style,
        }
    }

    /// Returns true if the chart has no points.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, value)` pairs in chronological order.
    pub fn points(&self) -> impl Iterator<Item = (&str, &T)> {
        self.labels.iter().map(String::as_str).zip(self.data.iter())
    }
}

/// Employee head count per department.
pub type DepartmentDistribution = CategoryChart<u64>;

/// Average salary per department.
pub type SalaryDistribution = CategoryChart<Decimal>;

/// Attendance rate (percent) per calendar month.
pub type AttendanceRates = CategoryChart<Decimal>;

/// Average overall review score per department.
pub type PerformanceByDepartment = CategoryChart<Decimal>;

/// Average overall review score per review period.
pub type PerformanceTrend = TrendChart<Decimal>;

/// Hire count per calendar month.
pub type HireTimeline = TrendChart<u64>;

fn cycle_color(palette: &[String], index: usize) -> String {
    if palette.is_empty() {
        return String::new();
    }
    palette[index % palette.len()].clone()
}
