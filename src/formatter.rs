//! Broadcast month formatting and display with color support.

use chrono::{Datelike, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::border::define_cell_border;
use crate::calendar::broadcast_week;
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalContext,
    CellParams, DAYS_PER_WEEK, GUTTER_WIDTH_YEAR, MonthData,
};

const WEEKDAY_SHORT_NAMES: [&str; DAYS_PER_WEEK] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// English month name for a 1-based month.
pub fn get_month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// Parse month from string (numeric 1-12, English name or three-letter abbreviation).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    (1..=12).find(|&month| {
        let name = get_month_name(month).to_lowercase();
        name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower))
    })
}

/// Format month header with optional year and color.
pub fn format_month_header(
    year: i32,
    month: u32,
    width: usize,
    show_year: bool,
    color: bool,
) -> String {
    let month_name = get_month_name(month);
    let header = if show_year {
        format!("{} {}", month_name, year)
    } else {
        month_name.to_string()
    };
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format the Monday-first weekday header row.
pub fn format_weekday_headers(ctx: &CalContext) -> String {
    let mut result = String::new();

    if ctx.week_numbers {
        result.push_str("   ");
    }
    if ctx.color {
        result.push_str(COLOR_SAND_YELLOW);
    }
    result.push_str(&WEEKDAY_SHORT_NAMES.join(" "));
    if ctx.color {
        result.push_str(COLOR_RESET);
    }

    result
}

/// Whether a day renders as a framed, disabled cell of the displayed month.
///
/// Days spilling in from the previous calendar month are disabled.
fn is_framed_day(date: NaiveDate, month: &MonthData) -> bool {
    let Some(first) = NaiveDate::from_ymd_opt(month.year, month.month, 1) else {
        return false;
    };
    let params = CellParams {
        disabled: date.month() != month.month,
        broadcast_calendar: true,
        week_number: false,
        month: first,
        day: date,
    };
    !define_cell_border(&params).is_empty()
}

/// Format day cell with color highlighting.
///
/// Color priority: today > framed day of previous month > weekend > regular
fn format_day(ctx: &CalContext, date: NaiveDate, month: &MonthData) -> String {
    let day_str = format!("{:>2}", date.day());
    if !ctx.color {
        return day_str;
    }

    let color = if date == ctx.today {
        COLOR_REVERSE
    } else if is_framed_day(date, month) {
        COLOR_DIM
    } else if ctx.is_weekend(date.weekday()) {
        COLOR_RED
    } else {
        return day_str;
    };
    format!("{}{}{}", color, day_str, COLOR_RESET)
}

/// Format a broadcast month as grid of lines.
pub fn format_month_grid(ctx: &CalContext, month: &MonthData) -> Vec<String> {
    let mut lines = Vec::with_capacity(month.weeks.len() + 2);

    lines.push(format_month_header(
        month.year,
        month.month,
        ctx.month_width(),
        ctx.show_year_in_header,
        ctx.color,
    ));
    lines.push(format_weekday_headers(ctx));

    for (week, week_number) in month.weeks.iter().zip(&month.week_numbers) {
        let mut line = String::new();
        if ctx.week_numbers {
            line.push_str(&format!("{:>2} ", week_number));
        }
        let days: Vec<String> = week.iter().map(|&d| format_day(ctx, d, month)).collect();
        line.push_str(&days.join(" "));
        lines.push(line);
    }

    lines
}

/// Print single broadcast month.
pub fn print_month(ctx: &CalContext, year: i32, month: u32) {
    let month_data = MonthData::new(year, month);
    for line in format_month_grid(ctx, &month_data) {
        println!("{}", line);
    }
}

/// Year and month `delta` months away from the given one.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) + delta;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// Print three months side by side (prev, current, next).
pub fn print_three_months(ctx: &CalContext, year: i32, month: u32) {
    let months: Vec<MonthData> = (-1..=1)
        .map(|delta| {
            let (y, m) = shift_month(year, month, delta);
            MonthData::new(y, m)
        })
        .collect();

    for chunk in months.chunks(ctx.months_per_row() as usize) {
        print_months_side_by_side(ctx, chunk);
    }
}

/// Lay out month grids next to each other, padding shorter grids.
pub fn format_months_side_by_side(ctx: &CalContext, months: &[MonthData]) -> Vec<String> {
    let grids: Vec<Vec<String>> = months.iter().map(|m| format_month_grid(ctx, m)).collect();
    let max_height = grids.iter().map(|g| g.len()).max().unwrap_or(0);
    let month_width = ctx.month_width();

    (0..max_height)
        .map(|row| {
            let mut line = String::new();
            for (i, grid) in grids.iter().enumerate() {
                let text = grid.get(row).map_or("", String::as_str);
                line.push_str(text);
                // ANSI sequences have no display width
                let visible = strip_ansi(text).width();
                line.push_str(&" ".repeat(month_width.saturating_sub(visible)));
                if i < grids.len() - 1 {
                    line.push_str(&" ".repeat(ctx.gutter_width));
                }
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Print multiple months side by side.
pub fn print_months_side_by_side(ctx: &CalContext, months: &[MonthData]) {
    for line in format_months_side_by_side(ctx, months) {
        println!("{}", line);
    }
}

/// Print all twelve broadcast months of a year.
pub fn print_year(ctx: &CalContext, year: i32) {
    let mut month_ctx = ctx.clone();
    month_ctx.show_year_in_header = false;
    month_ctx.gutter_width = GUTTER_WIDTH_YEAR;

    let per_row = month_ctx.months_per_row() as usize;
    let total_width =
        per_row * month_ctx.month_width() + per_row.saturating_sub(1) * GUTTER_WIDTH_YEAR;
    println!("{}", center_text(&year.to_string(), total_width).trim_end());
    println!();

    let months: Vec<MonthData> = (1..=12).map(|m| MonthData::new(year, m)).collect();
    for (i, chunk) in months.chunks(per_row).enumerate() {
        if i > 0 {
            println!();
        }
        print_months_side_by_side(&month_ctx, chunk);
    }
}

/// Describe the broadcast week of a date, e.g. `2024 W01`.
pub fn format_week_of(date: NaiveDate) -> String {
    let week = broadcast_week(date);
    format!("{} W{:02}", week.year, week.week)
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => out.push(c),
        }
    }
    out
}
