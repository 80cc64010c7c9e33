//! Configuration types for the reporting engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML files. Every field has a built-in default, so a
//! partial file only overrides what it names.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::LineStyle;

/// Report-wide settings from `report.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Title shown in the first line of the text export.
    pub title: String,
    /// Symbol prefixed to currency amounts in the text export.
    pub currency_symbol: String,
    /// Trailing window, in days, for the dashboard attendance rate.
    pub summary_attendance_days: u32,
    /// Trailing window, in days, for monthly attendance rates.
    pub monthly_attendance_days: u32,
    /// Number of most recent hires listed on the dashboard.
    pub latest_hires_limit: usize,
    /// Emit a zero-rate bucket for months in the window with no attendance rows.
    pub fill_empty_months: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "EMPLOYEE ANALYTICS REPORT".to_string(),
            currency_symbol: "$".to_string(),
            summary_attendance_days: 30,
            monthly_attendance_days: 180,
            latest_hires_limit: 5,
            fill_empty_months: true,
        }
    }
}

/// Colour palettes and line styles from `palettes.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palettes {
    /// Colours for the department distribution chart.
    pub department_distribution: Vec<String>,
    /// Colours for the salary distribution chart.
    pub salary_distribution: Vec<String>,
    /// Colours for the monthly attendance chart.
    pub attendance_rates: Vec<String>,
    /// Colours for the performance-by-department chart.
    pub performance_by_department: Vec<String>,
    /// Style for the performance trend line.
    pub performance_trend: LineStyle,
    /// Style for the hire timeline line.
    pub hire_timeline: LineStyle,
}

fn colors(values: &[&str]) -> Vec<String> {
    values.iter().map(|c| c.to_string()).collect()
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            department_distribution: colors(&[
                "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384",
                "#C9CBCF",
            ]),
            salary_distribution: colors(&[
                "#36A2EB", "#4BC0C0", "#FF6384", "#FFCE56", "#9966FF", "#FF9F40", "#FF6384",
                "#C9CBCF",
            ]),
            attendance_rates: colors(&[
                "#4BC0C0", "#36A2EB", "#FF6384", "#FFCE56", "#9966FF", "#FF9F40",
            ]),
            performance_by_department: colors(&[
                "#36A2EB", "#4BC0C0", "#FF6384", "#FFCE56", "#9966FF",
            ]),
            performance_trend: LineStyle {
                label: "Average Performance Score".to_string(),
                border_color: "#36A2EB".to_string(),
                background_color: "rgba(54, 162, 235, 0.1)".to_string(),
                tension: Decimal::new(4, 1),
            },
            hire_timeline: LineStyle {
                label: "New Hires".to_string(),
                border_color: "#FF6384".to_string(),
                background_color: "rgba(255, 99, 132, 0.1)".to_string(),
                tension: Decimal::new(4, 1),
            },
        }
    }
}

/// The complete, validated reporting configuration.
///
/// # Example
///
/// ```
/// use workforce_analytics::config::ReportingConfig;
///
/// let config = ReportingConfig::default();
/// assert_eq!(config.settings().latest_hires_limit, 5);
/// assert_eq!(config.palettes().department_distribution.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportingConfig {
    settings: ReportSettings,
    palettes: Palettes,
}

impl ReportingConfig {
    /// Creates a configuration from its parts, rejecting unusable values.
    pub fn new(settings: ReportSettings, palettes: Palettes) -> EngineResult<Self> {
        let named_palettes = [
            ("department_distribution", &palettes.department_distribution),
            ("salary_distribution", &palettes.salary_distribution),
            ("attendance_rates", &palettes.attendance_rates),
            ("performance_by_department", &palettes.performance_by_department),
        ];
        for (name, palette) in named_palettes {
            if palette.is_empty() {
                return Err(EngineError::InvalidConfig {
                    field: format!("palettes.{}", name),
                    message: "must contain at least one colour".to_string(),
                });
            }
        }

        if settings.latest_hires_limit == 0 {
            return Err(EngineError::InvalidConfig {
                field: "report.latest_hires_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self { settings, palettes })
    }

    /// Returns the report settings.
    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Returns the palettes and line styles.
    pub fn palettes(&self) -> &Palettes {
        &self.palettes
    }

    /// First day of the dashboard attendance window ending on `today`.
    pub fn summary_window_start(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_sub_days(Days::new(u64::from(self.settings.summary_attendance_days)))
    }

    /// First day of the monthly attendance window ending on `today`.
    pub fn monthly_window_start(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_sub_days(Days::new(u64::from(self.settings.monthly_attendance_days)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palettes_match_chart_sizes() {
        let palettes = Palettes::default();
        assert_eq!(palettes.department_distribution.len(), 8);
        assert_eq!(palettes.salary_distribution.len(), 8);
        assert_eq!(palettes.attendance_rates.len(), 6);
        assert_eq!(palettes.performance_by_department.len(), 5);
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        let palettes = Palettes {
            salary_distribution: vec![],
            ..Palettes::default()
        };
        let result = ReportingConfig::new(ReportSettings::default(), palettes);

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "palettes.salary_distribution");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_zero_latest_hires_limit_is_rejected() {
        let settings = ReportSettings {
            latest_hires_limit: 0,
            ..ReportSettings::default()
        };
        assert!(ReportingConfig::new(settings, Palettes::default()).is_err());
    }

    #[test]
    fn test_window_starts() {
        let config = ReportingConfig::default();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert_eq!(
            config.summary_window_start(today),
            NaiveDate::from_ymd_opt(2026, 9, 19)
        );
        assert_eq!(
            config.monthly_window_start(today),
            NaiveDate::from_ymd_opt(2026, 4, 22)
        );
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: ReportSettings = serde_yaml::from_str("title: Quarterly Report\n").unwrap();
        assert_eq!(settings.title, "Quarterly Report");
        assert_eq!(settings.summary_attendance_days, 30);
        assert!(settings.fill_empty_months);
    }
}
