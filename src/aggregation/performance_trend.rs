//! Average overall review score per review period.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{PerformanceTrend, TrendChart};
use crate::repository::{Field, Filter, GroupKey, RecordKind, Value};
use crate::resilience::Section;

use super::ViewContext;
use super::buckets::text_key;
use super::rounding::rounded_or_zero;

pub(crate) const SECTION: &str = "performance_trend";
pub(crate) const PERIOD_SECTION: &str = "performance_trend.period";

/// Average overall score for each distinct review period, in period order.
///
/// Each period is looked up in its own section: a period whose lookup faults
/// is left out of the series and the remaining periods are still reported.
pub(crate) fn performance_trend(ctx: &ViewContext<'_>) -> EngineResult<PerformanceTrend> {
    let style = ctx.config.palettes().performance_trend.clone();

    let periods: Vec<String> = Section::run(SECTION, || {
        ctx.repository
            .group_by(
                RecordKind::PerformanceReview,
                GroupKey::Field(Field::ReviewPeriod),
                None,
                &[],
            )?
            .iter()
            .map(|row| text_key(&row.key, SECTION))
            .collect()
    })
    .resolve_or_default(ctx.policy)?;

    let mut points = Vec::with_capacity(periods.len());
    for period in periods {
        let filters = [Filter::eq(Field::ReviewPeriod, Value::Text(period.clone()))];
        let score = Section::run(PERIOD_SECTION, || {
            let average = ctx.repository.average(
                RecordKind::PerformanceReview,
                Field::OverallScore,
                &filters,
            )?;
            Ok(Some(rounded_or_zero(average)))
        })
        .resolve_or_default(ctx.policy)?;

        match score {
            Some(score) => points.push((period, score)),
            None => debug!(period = %period, "Review period left out of trend"),
        }
    }

    Ok(TrendChart::from_points(points, style))
}
