//! Flat multi-section text rendering of an export.

use crate::config::ReportSettings;
use crate::models::AnalyticsExport;

use super::format::{format_currency, format_fixed, format_percentage};

/// Renders `document` as the flat text export.
///
/// Layout: a title section with the generation metadata, then one section per
/// dataset. Each section is a `=== NAME ===` delimiter, a header row, one
/// comma-separated row per data point and a blank separator line. Sections
/// with no data keep their delimiter and header row.
pub fn render_text(document: &AnalyticsExport, settings: &ReportSettings) -> String {
    let currency = |value| format_currency(value, &settings.currency_symbol);
    let mut out = TextWriter::default();

    out.section(&settings.title, ["Field", "Value"]);
    out.row(["Generated At".to_string(), document.generated_at.to_rfc3339()]);
    out.row(["Export ID".to_string(), document.export_id.to_string()]);
    out.row(["Engine Version".to_string(), document.engine_version.clone()]);
    out.blank();

    out.section("DEPARTMENT STATISTICS", ["Department", "Employee Count"]);
    for (label, count) in document.department_stats.rows() {
        out.row([label.to_string(), count.to_string()]);
    }
    out.blank();

    out.section("SALARY DISTRIBUTION", ["Department", "Average Salary"]);
    for (label, average) in document.salary_distribution.rows() {
        out.row([label.to_string(), currency(*average)]);
    }
    out.blank();

    out.section("ATTENDANCE RATES", ["Month", "Attendance Rate"]);
    for (label, value) in document.attendance_rates.rows() {
        out.row([label.to_string(), format_percentage(*value)]);
    }
    out.blank();

    out.section("PERFORMANCE TRENDS", ["Period", "Average Score"]);
    for (label, score) in document.performance_trends.points() {
        out.row([label.to_string(), format_fixed(*score)]);
    }
    out.blank();

    out.section("PERFORMANCE BY DEPARTMENT", ["Department", "Average Score"]);
    for (label, score) in document.performance_by_department.rows() {
        out.row([label.to_string(), format_fixed(*score)]);
    }
    out.blank();

    out.section("HIRE TIMELINE", ["Month", "New Hires"]);
    for (label, count) in document.hire_timeline.points() {
        out.row([label.to_string(), count.to_string()]);
    }
    out.blank();

    out.section(
        "LATEST HIRES",
        [
            "ID",
            "Employee ID",
            "Full Name",
            "Email",
            "Department",
            "Position",
            "Salary",
            "Hire Date",
        ],
    );
    for hire in &document.summary.latest_hires {
        out.row([
            hire.id.to_string(),
            hire.employee_id.clone(),
            hire.full_name.clone(),
            hire.email.clone(),
            hire.department_name.clone(),
            hire.position.clone(),
            currency(hire.salary),
            hire.hire_date.to_string(),
        ]);
    }
    out.blank();

    out.section(
        "CHART STYLES",
        ["Chart", "Label", "Border Color", "Background Color", "Tension"],
    );
    for (chart, style) in [
        ("Performance Trends", &document.performance_trends.style),
        ("Hire Timeline", &document.hire_timeline.style),
    ] {
        out.row([
            chart.to_string(),
            style.label.clone(),
            style.border_color.clone(),
            style.background_color.clone(),
            format_fixed(style.tension),
        ]);
    }
    out.blank();

    let summary = &document.summary;
    out.section("SUMMARY STATISTICS", ["Metric", "Value"]);
    out.row(["Total Employees".to_string(), summary.total_employees.to_string()]);
    out.row(["Total Departments".to_string(), summary.total_departments.to_string()]);
    out.row(["Average Salary".to_string(), currency(summary.average_salary)]);
    out.row(["Average Performance".to_string(), format_fixed(summary.average_performance)]);
    out.row(["Attendance Rate".to_string(), format_percentage(summary.attendance_rate)]);
    out.blank();

    out.finish()
}

/// Quotes a field containing a comma, quote or line break, doubling inner quotes.
///
/// # Examples
///
/// ```
/// use workforce_analytics::export::escape_field;
///
/// assert_eq!(escape_field("Engineering"), "Engineering");
/// assert_eq!(escape_field("$82,500.00"), "\"$82,500.00\"");
/// assert_eq!(escape_field("R&D \"Labs\""), "\"R&D \"\"Labs\"\"\"");
/// ```
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[derive(Default)]
struct TextWriter {
    out: String,
}

impl TextWriter {
    fn section<const N: usize>(&mut self, name: &str, header: [&str; N]) {
        self.out.push_str(&format!("=== {} ===\n", name));
        self.row(header.map(str::to_string));
    }

    fn row<const N: usize>(&mut self, fields: [String; N]) {
        let line = fields
            .iter()
            .map(|field| escape_field(field))
            .collect::<Vec<_>>()
            .join(",");
        self.out.push_str(&line);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}
