//! Focused month selection for multi-range pickers.

use chrono::NaiveDate;
use tracing::trace;

use crate::calendar::start_of_month;
use crate::error::CalError;
use crate::types::{DisplayMode, FocusContext, RangeEndpoint};

/// Pick the month to display for the current selection state.
///
/// Returns the first day of the month to anchor the view on. In
/// [`DisplayMode::DateRange`] that is the month of the focused endpoint of the
/// focused range; in [`DisplayMode::Date`] the month of the selected date,
/// falling back to `today`.
///
/// # Errors
/// Returns `CalError::RangeIndexOutOfBounds` if the focused range index does not
/// point into `ctx.ranges`.
pub fn calc_focus_date(today: NaiveDate, ctx: &FocusContext) -> Result<NaiveDate, CalError> {
    let target = match ctx.display_mode {
        DisplayMode::DateRange => {
            let index = ctx.focused_range.range_index;
            let range = ctx
                .ranges
                .get(index)
                .ok_or(CalError::RangeIndexOutOfBounds {
                    index,
                    len: ctx.ranges.len(),
                })?;
            match ctx.focused_range.endpoint {
                RangeEndpoint::Start => range.start_date,
                RangeEndpoint::End => range.end_date,
            }
        }
        DisplayMode::Date => ctx.date.unwrap_or(today),
    };

    let focus = start_of_month(target);
    trace!(%target, %focus, "focus date");
    Ok(focus)
}
