//! Broadcast calendar arithmetic: week boundaries, week numbering and month grids.
//!
//! A broadcast week runs Monday through Sunday. A broadcast month is made of
//! the weeks whose Sunday falls in the calendar month, so it starts on the
//! Monday of the week containing the 1st and ends on the last Sunday.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use tracing::trace;

use crate::types::{
    BroadcastWeek, CalContext, ColumnsMode, DAYS_PER_WEEK, GRID_WEEKS, MAX_COLUMNS, MONTH_WIDTH,
    MONTH_WIDTH_WEEK_NUMBERS, MonthData,
};

/// Move a date by `n` days, clamping at the ends of the representable range.
fn shift_days(date: NaiveDate, n: i64) -> NaiveDate {
    if n >= 0 {
        date.checked_add_days(Days::new(n.unsigned_abs())).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(Days::new(n.unsigned_abs())).unwrap_or(NaiveDate::MIN)
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// The Monday on or before `date`.
pub fn start_of_broadcast_week(date: NaiveDate) -> NaiveDate {
    shift_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

/// The Sunday on or after `date`.
pub fn end_of_broadcast_week(date: NaiveDate) -> NaiveDate {
    shift_days(date, 6 - i64::from(date.weekday().num_days_from_monday()))
}

/// First Monday of broadcast year `year`: the start of the week containing January 1.
pub fn broadcast_year_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(start_of_broadcast_week)
}

/// Broadcast year and week a date belongs to.
///
/// Late-December days that share a week with the next January 1 are week 1
/// of the next broadcast year.
pub fn broadcast_week(date: NaiveDate) -> BroadcastWeek {
    let year = date.year();

    if let Some(next_start) = broadcast_year_start(year + 1)
        && date >= next_start
    {
        return BroadcastWeek {
            year: year + 1,
            week: 1,
        };
    }

    let anchor = broadcast_year_start(year).unwrap_or(NaiveDate::MIN);
    let days = date.signed_duration_since(anchor).num_days();
    let week = (days / DAYS_PER_WEEK as i64) as u32 + 1;
    trace!(%date, %anchor, week, "broadcast week");
    BroadcastWeek { year, week }
}

/// Broadcast week number (1-53) of a date.
pub fn calculate_broadcast_week_number(date: NaiveDate) -> u32 {
    broadcast_week(date).week
}

/// Broadcast year a date belongs to.
pub fn broadcast_year(date: NaiveDate) -> i32 {
    broadcast_week(date).year
}

/// Whether `day` is part of the displayed broadcast month (0-based month index).
///
/// A day renders iff the Sunday closing its week falls in the displayed month.
/// Indices outside `0..=11` never match.
pub fn should_render_broadcast_day(day: NaiveDate, displayed_month_index: u32) -> bool {
    end_of_broadcast_week(day).month0() == displayed_month_index
}

/// Like [`should_render_broadcast_day`], with the displayed month given as any date in it.
pub fn should_render_broadcast_day_in(day: NaiveDate, month: NaiveDate) -> bool {
    let sunday = end_of_broadcast_week(day);
    sunday.year() == month.year() && sunday.month() == month.month()
}

/// First Monday and last Sunday of a broadcast month (1-based month).
pub fn broadcast_month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = end_of_month(first);
    let start = start_of_broadcast_week(first);
    let end = shift_days(last, -i64::from(last.weekday().num_days_from_sunday()));
    Some((start, end))
}

/// Mondays of every week in a broadcast month, in order.
pub fn broadcast_weeks(year: i32, month: u32) -> Vec<NaiveDate> {
    match broadcast_month_bounds(year, month) {
        Some((start, end)) => start.iter_weeks().take_while(|d| *d <= end).collect(),
        None => Vec::new(),
    }
}

/// Whether `day` falls in the last broadcast week of `month`'s broadcast month.
pub fn is_last_broadcast_week(day: NaiveDate, month: NaiveDate) -> bool {
    broadcast_month_bounds(month.year(), month.month())
        .is_some_and(|(_, end)| end_of_broadcast_week(day) == end)
}

impl CalContext {
    /// Width of one month grid in columns.
    pub fn month_width(&self) -> usize {
        if self.week_numbers {
            MONTH_WIDTH_WEEK_NUMBERS
        } else {
            MONTH_WIDTH
        }
    }

    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    pub fn months_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n.clamp(1, MAX_COLUMNS),
            ColumnsMode::Auto => {
                // clamp to 1-3 for readability
                let month_width = self.month_width() + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / month_width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

impl MonthData {
    /// Build the week rows of a broadcast month.
    ///
    /// Rows hold the days that render for the month; an invalid month has no rows.
    pub fn new(year: i32, month: u32) -> Self {
        // Lay out six Monday-first weeks from the week of the 1st, keep the ones that render
        let weeks: Vec<[NaiveDate; DAYS_PER_WEEK]> = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first) => {
                let grid_start = start_of_broadcast_week(first);
                (0..GRID_WEEKS)
                    .map(|week| -> [NaiveDate; DAYS_PER_WEEK] {
                        std::array::from_fn(|i| {
                            shift_days(grid_start, (week * DAYS_PER_WEEK + i) as i64)
                        })
                    })
                    .filter(|days| {
                        days.iter()
                            .all(|&day| should_render_broadcast_day_in(day, first))
                    })
                    .collect()
            }
            None => Vec::new(),
        };
        let week_numbers = weeks
            .iter()
            .map(|week| calculate_broadcast_week_number(week[0]))
            .collect();

        MonthData {
            year,
            month,
            weeks,
            week_numbers,
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
