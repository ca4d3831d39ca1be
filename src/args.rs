//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the cal convention: `[[month] year]`.

use chrono::{Datelike, NaiveDate};
use clap::{ArgAction, Parser, ValueHint};
use std::io::IsTerminal;

use crate::error::CalError;
use crate::formatter::parse_month;
use crate::types::{CalContext, ColumnsMode, GUTTER_WIDTH_REGULAR, MAX_COLUMNS};

/// Environment variable pinning today's date (`YYYY-MM-DD`).
pub const TEST_TIME_ENV: &str = "BCAL_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "bcal")]
#[command(about = "Displays the broadcast calendar for a month or year", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Display broadcast week numbers.
    #[arg(short = 'w', long, help_heading = "Calendar options")]
    pub week_numbers: bool,

    /// Print the broadcast year and week of a date (YYYY-MM-DD).
    #[arg(long, help_heading = "Calendar options", value_name = "date")]
    pub week_of: Option<String>,

    /// Display all broadcast months of a year.
    #[arg(short = 'y', long, help_heading = "Display options")]
    pub year: bool,

    /// Display three months (previous, current, next).
    #[arg(short = '3', long = "three", help_heading = "Display options")]
    pub three_months: bool,

    /// Month (1-12 or name), or a year when given alone with four digits.
    #[arg(index = 1, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Number of columns for multiple months (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output options"
    )]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a broadcast calendar, or some part of it.

A broadcast month is made of whole Monday-Sunday weeks and ends on the
last Sunday of the calendar month. Week 1 of a broadcast year is the
week containing January 1.

Examples:
  bcal                      Display current broadcast month
  bcal -3                   Display previous, current and next month
  bcal -y                   Display the whole broadcast year
  bcal 2 2026               Display February 2026
  bcal 2026                 Display broadcast year 2026
  bcal -w                   Show broadcast week numbers
  bcal --week-of 2023-12-25 Print the broadcast week of a date";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalContext {
    pub fn new(args: &Args) -> Result<Self, CalError> {
        let today = get_today_date();

        let color = !args.no_color && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| CalError::InvalidColumns(s.to_string()))?;
                if !(1..=MAX_COLUMNS).contains(&n) {
                    return Err(CalError::InvalidColumns(s.to_string()));
                }
                ColumnsMode::Fixed(n)
            }
        };

        // Prevent conflicting display modes
        let mode_count = [args.year, args.three_months, args.week_of.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        if mode_count > 1 {
            return Err(CalError::ConflictingModes);
        }

        Ok(CalContext {
            week_numbers: args.week_numbers,
            color,
            today,
            show_year_in_header: true,
            gutter_width: GUTTER_WIDTH_REGULAR,
            columns,
        })
    }
}

/// Get today's date, respecting the `BCAL_TEST_TIME` environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_ENV)
        && let Ok(date) = parse_date(&test_time)
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CalError::InvalidDate(s.to_string()))
}

fn parse_year(s: &str) -> Result<i32, CalError> {
    let year = s
        .parse::<i32>()
        .map_err(|_| CalError::InvalidYear(s.to_string()))?;
    if !(1..=9999).contains(&year) {
        return Err(CalError::InvalidYear(s.to_string()));
    }
    Ok(year)
}

/// Calculate display year and month from positional arguments.
///
/// Argument patterns:
/// - no args: the broadcast month of today
/// - 1 arg: year (4 digits) or month (number or name)
/// - 2 args: month year
pub fn get_display_date(args: &Args, today: NaiveDate) -> Result<(i32, u32), CalError> {
    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (Some(val), None) => {
            // Same year source as the no-argument path
            let (current_year, current_month) = current_broadcast_month(today);
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                return Ok((num, current_month));
            }
            let month = parse_month(val).ok_or_else(|| CalError::InvalidMonth(val.to_string()))?;
            Ok((current_year, month))
        }
        (Some(month), Some(year)) => {
            let month =
                parse_month(month).ok_or_else(|| CalError::InvalidMonth(month.to_string()))?;
            Ok((parse_year(year)?, month))
        }
        (None, None) => Ok(current_broadcast_month(today)),
        (None, Some(_)) => Err(CalError::InvalidArguments),
    }
}

/// Broadcast month containing a date: the month of the Sunday closing its week.
pub fn current_broadcast_month(today: NaiveDate) -> (i32, u32) {
    let sunday = crate::calendar::end_of_broadcast_week(today);
    (sunday.year(), sunday.month())
}

/// Whether a single positional argument names a whole year.
pub fn is_year_argument(args: &Args) -> bool {
    args.year_arg.is_none()
        && args
            .month_arg
            .as_deref()
            .and_then(|s| s.parse::<i32>().ok())
            .is_some_and(|n| (1000..=9999).contains(&n))
}
