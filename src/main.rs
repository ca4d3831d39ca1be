//! Broadcast calendar CLI application.
//!
//! # Usage
//! ```ignore
//! bcal                      // Current broadcast month
//! bcal 2026                 // Broadcast year 2026
//! bcal 2 2026               // February 2026
//! bcal -3                   // Three months
//! bcal --week-of 2023-12-25 // Broadcast week of a date
//! ```

use bcal::args::{Args, get_display_date, is_year_argument, parse_date};
use bcal::error::CalError;
use bcal::formatter::{format_week_of, print_month, print_three_months, print_year};
use bcal::logging;
use bcal::types::CalContext;
use tracing::debug;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("bcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let ctx = CalContext::new(args)?;
    debug!(?ctx, "resolved context");

    if let Some(date) = &args.week_of {
        println!("{}", format_week_of(parse_date(date)?));
        return Ok(());
    }

    let (year, month) = get_display_date(args, ctx.today)?;
    debug!(year, month, "display date");

    // Display mode priority: year > three_months > single
    if args.year || is_year_argument(args) {
        print_year(&ctx, year);
    } else if args.three_months {
        print_three_months(&ctx, year, month);
    } else {
        print_month(&ctx, year, month);
    }

    Ok(())
}
