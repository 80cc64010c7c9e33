//! Monthly attendance rates over the trailing monthly window.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRates, AttendanceStatus, CategoryChart};
use crate::repository::{Field, Filter, GroupKey, RecordKind, Value};
use crate::resilience::Section;

use super::ViewContext;
use super::buckets::{date_key, month_label, months_between};
use super::rounding::rate;

pub(crate) const SECTION: &str = "attendance_rate_by_month";

/// PRESENT rows over all rows per calendar month, oldest month first.
///
/// With `fill_empty_months` set, every month the window touches is listed and
/// months without rows report a rate of zero.
pub(crate) fn attendance_rate_by_month(ctx: &ViewContext<'_>) -> EngineResult<AttendanceRates> {
    Section::run(SECTION, || {
        let start = ctx.config.monthly_window_start(ctx.today).ok_or_else(|| {
            EngineError::computation(SECTION, "attendance window start is out of range")
        })?;
        let window = Filter::on_or_after(Field::Date, start);
        let month = GroupKey::Month(Field::Date);

        let totals = ctx.repository.group_by(
            RecordKind::Attendance,
            month,
            None,
            std::slice::from_ref(&window),
        )?;
        let present = ctx.repository.group_by(
            RecordKind::Attendance,
            month,
            None,
            &[
                window,
                Filter::eq(Field::Status, Value::Status(AttendanceStatus::Present)),
            ],
        )?;

        let mut present_by_month: HashMap<NaiveDate, u64> = HashMap::new();
        for row in &present {
            present_by_month.insert(date_key(&row.key, SECTION)?, row.count);
        }

        let mut totals_by_month: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        if ctx.config.settings().fill_empty_months {
            for bucket in months_between(start, ctx.today) {
                totals_by_month.insert(bucket, 0);
            }
        }
        for row in &totals {
            totals_by_month.insert(date_key(&row.key, SECTION)?, row.count);
        }

        let rows = totals_by_month
            .into_iter()
            .map(|(bucket, total)| {
                let present = present_by_month.get(&bucket).copied().unwrap_or(0);
                (month_label(bucket), rate(present, total))
            })
            .collect();

        Ok(CategoryChart::from_rows(
            rows,
            &ctx.config.palettes().attendance_rates,
        ))
    })
    .resolve_or_default(ctx.policy)
}
