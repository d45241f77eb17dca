//! `oddsfold prices` - best 1X2 price chips per fixture for a date.

use chrono::{NaiveDate, Utc};

use crate::cli::output;
use crate::domain::{BestPrices, Outcome};
use crate::error::Result;
use crate::store::QuoteStore;

pub async fn run(store: &dyn QuoteStore, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let fixtures = store.fixtures_for_date(date).await?;

    output::section(&format!("Fixtures for {date}"));
    if fixtures.is_empty() {
        output::note("No fixtures found.");
        return Ok(());
    }

    for fixture in &fixtures {
        let best = BestPrices::from_quotes(fixture.quotes());
        println!(
            "#{} {}  ({})",
            fixture.id(),
            fixture.name(),
            fixture.kickoff().format("%H:%M")
        );
        println!(
            "  {}   {}   {}",
            output::fmt_chip(&best, Outcome::Home),
            output::fmt_chip(&best, Outcome::Draw),
            output::fmt_chip(&best, Outcome::Away),
        );
    }

    Ok(())
}
