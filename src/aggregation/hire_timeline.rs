//! Hires per calendar month.

use crate::error::EngineResult;
use crate::models::{HireTimeline, TrendChart};
use crate::repository::{Field, GroupKey, RecordKind};
use crate::resilience::Section;

use super::ViewContext;
use super::buckets::{date_key, month_label};

pub(crate) const SECTION: &str = "hire_timeline";

/// Employee count per hire month, oldest first. Months without hires are not listed.
pub(crate) fn hire_timeline(ctx: &ViewContext<'_>) -> EngineResult<HireTimeline> {
    let style = ctx.config.palettes().hire_timeline.clone();

    Section::run(SECTION, || {
        let points = ctx
            .repository
            .group_by(
                RecordKind::Employee,
                GroupKey::Month(Field::HireDate),
                None,
                &[],
            )?
            .iter()
            .map(|row| Ok((month_label(date_key(&row.key, SECTION)?), row.count)))
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(TrendChart::from_points(points, style.clone()))
    })
    .resolve(ctx.policy, || TrendChart::empty(style.clone()))
}
