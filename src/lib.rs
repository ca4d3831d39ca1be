//! Broadcast calendar date logic for date-range pickers.
//!
//! Features:
//! - Broadcast week numbering (week 1 contains January 1, weeks start Monday)
//! - Broadcast month membership for grid cells
//! - Focused month selection for multi-range pickers
//! - Border framing for disabled broadcast day-cells
//! - Terminal rendering of broadcast months

pub mod args;
pub mod border;
pub mod calendar;
pub mod error;
pub mod focus;
pub mod formatter;
pub mod logging;
pub mod types;

pub use border::define_cell_border;
pub use calendar::{calculate_broadcast_week_number, should_render_broadcast_day};
pub use error::CalError;
pub use focus::calc_focus_date;
