//! Range command implementation.

use carteira::{DateRange, Period};

/// Print the calendar window a period currently resolves to.
pub(crate) fn show_range(period: Period) {
    let range = DateRange::resolve(period);
    println!("Period: {}", period);
    println!("From:   {}", range.from);
    println!("To:     {}", range.to);
}
