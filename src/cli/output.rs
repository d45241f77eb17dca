//! Shared CLI output helpers for consistent operator-facing text.

use rust_decimal::Decimal;

use crate::domain::{BestPrices, Outcome};

const RULE_WIDTH: usize = 48;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

/// Format a decimal price with two decimal places.
#[must_use]
pub fn fmt_price(price: Decimal) -> String {
    format!("{:.2}", price)
}

/// Format one best-price slot as a "1 1.70 (10Bet)"-style chip, or "1 - N/A"
/// for an unpriced outcome.
#[must_use]
pub fn fmt_chip(best: &BestPrices, outcome: Outcome) -> String {
    match best.outcome(outcome) {
        Some(quote) => format!(
            "{} {} ({})",
            outcome.column(),
            fmt_price(quote.price()),
            quote.provider().name()
        ),
        None => format!("{} - N/A", outcome.column()),
    }
}
