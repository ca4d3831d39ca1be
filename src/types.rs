//! Type definitions and constants for broadcast calendar logic.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CalError;

/// One selectable interval of a date-range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Range {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Range {
            start_date,
            end_date,
        }
    }
}

/// Which end of a range is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEndpoint {
    Start,
    End,
}

/// Pointer to the focused endpoint: `[range_index, endpoint]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusedRange {
    pub range_index: usize,
    pub endpoint: RangeEndpoint,
}

impl FocusedRange {
    pub fn new(range_index: usize, endpoint: RangeEndpoint) -> Self {
        FocusedRange {
            range_index,
            endpoint,
        }
    }
}

impl From<[usize; 2]> for FocusedRange {
    /// Any non-zero endpoint selects the end date.
    fn from([range_index, endpoint]: [usize; 2]) -> Self {
        let endpoint = if endpoint == 0 {
            RangeEndpoint::Start
        } else {
            RangeEndpoint::End
        };
        FocusedRange {
            range_index,
            endpoint,
        }
    }
}

/// Picker display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Multi-range selection (`"dateRange"`).
    DateRange,
    /// Single date selection (`"date"`).
    Date,
}

impl FromStr for DisplayMode {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dateRange" => Ok(DisplayMode::DateRange),
            "date" => Ok(DisplayMode::Date),
            other => Err(CalError::InvalidDisplayMode(other.to_string())),
        }
    }
}

/// Selection state used to pick the focused month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusContext {
    pub ranges: Vec<Range>,
    pub focused_range: FocusedRange,
    pub display_mode: DisplayMode,
    /// Selected date in [`DisplayMode::Date`].
    pub date: Option<NaiveDate>,
}

/// Description of one day-cell of a broadcast grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellParams {
    pub disabled: bool,
    pub broadcast_calendar: bool,
    /// The cell shows a week number rather than a day.
    pub week_number: bool,
    /// Any date within the displayed month.
    pub month: NaiveDate,
    pub day: NaiveDate,
}

/// Per-edge border flags of a day-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Borders {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Borders {
    /// CSS `border-width` shorthand in `top right bottom left` order.
    pub fn width(&self) -> String {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .map(|&on| if on { BORDER_ON } else { BORDER_OFF })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Style returned for a cell; empty when no border applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellBorder {
    pub border_width: Option<String>,
}

impl CellBorder {
    pub fn is_empty(&self) -> bool {
        self.border_width.is_none()
    }

    /// Render as an inline style declaration.
    pub fn css(&self) -> String {
        match &self.border_width {
            Some(width) => format!("border-width: {};", width),
            None => String::new(),
        }
    }
}

/// A date's position in the broadcast calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BroadcastWeek {
    pub year: i32,
    pub week: u32,
}

/// Column display mode for multi-month layouts.
#[derive(Debug, Clone, Copy)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Terminal rendering context resolved from the command line.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Whether to prefix rows with broadcast week numbers.
    pub week_numbers: bool,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Today's date for highlighting.
    pub today: NaiveDate,
    /// Whether to show year in month headers.
    pub show_year_in_header: bool,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
    /// Column display mode.
    pub columns: ColumnsMode,
}

/// One broadcast month laid out as whole weeks.
pub struct MonthData {
    pub year: i32,
    pub month: u32,
    /// Rows of seven days, Monday first.
    pub weeks: Vec<[NaiveDate; DAYS_PER_WEEK]>,
    /// Broadcast week number of each row.
    pub week_numbers: Vec<u32>,
}

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6; // 42 cells

pub const BORDER_ON: &str = "1px";
pub const BORDER_OFF: &str = "0px";

pub const GUTTER_WIDTH_REGULAR: usize = 2;
pub const GUTTER_WIDTH_YEAR: usize = 3;

// A year never needs more than twelve months in a row
pub const MAX_COLUMNS: u32 = 12;

// Grid width without and with the week number column
pub const MONTH_WIDTH: usize = 20;
pub const MONTH_WIDTH_WEEK_NUMBERS: usize = 23;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
