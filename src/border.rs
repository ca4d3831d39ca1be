//! Border framing for disabled broadcast day-cells.

use chrono::{Datelike, Weekday};

use crate::calendar::is_last_broadcast_week;
use crate::types::{Borders, CellBorder, CellParams};

/// Border edges of a cell, or `None` when the cell is not a disabled broadcast day.
pub fn cell_borders(params: &CellParams) -> Option<Borders> {
    if !params.disabled || !params.broadcast_calendar || params.week_number {
        return None;
    }

    Some(Borders {
        top: true,
        right: params.day.weekday() == Weekday::Sun,
        bottom: is_last_broadcast_week(params.day, params.month),
        left: true,
    })
}

/// Border style of a day-cell.
///
/// Disabled days of a broadcast calendar are framed on top and left, on the
/// right when they close a week (Sunday), and at the bottom when they sit in
/// the last broadcast week of the displayed month.
pub fn define_cell_border(params: &CellParams) -> CellBorder {
    CellBorder {
        border_width: cell_borders(params).map(|borders| borders.width()),
    }
}
