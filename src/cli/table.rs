//! `oddsfold table` - the full per-bookmaker market grid for one fixture.

use tabled::{Table, Tabled};

use crate::cli::output;
use crate::domain::{provider_rows, FixtureId, Price, ProviderRow};
use crate::error::Result;
use crate::store::QuoteStore;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Bookmaker")]
    provider: String,
    #[tabled(rename = "1")]
    home: String,
    #[tabled(rename = "X")]
    draw: String,
    #[tabled(rename = "2")]
    away: String,
}

impl From<&ProviderRow> for MarketRow {
    fn from(row: &ProviderRow) -> Self {
        Self {
            provider: row.provider().name().to_string(),
            home: fmt_slot(row.home()),
            draw: fmt_slot(row.draw()),
            away: fmt_slot(row.away()),
        }
    }
}

fn fmt_slot(price: Option<Price>) -> String {
    match price {
        Some(price) => output::fmt_price(price),
        None => "-".to_string(),
    }
}

pub async fn run(store: &dyn QuoteStore, fixture_id: u64) -> Result<()> {
    let fixture = store.fixture(FixtureId::new(fixture_id)).await?;
    let rows = provider_rows(fixture.quotes());

    output::section(&format!("{} - all bookmakers", fixture.name()));
    if rows.is_empty() {
        output::note("No odds available for this fixture.");
        return Ok(());
    }

    let table = Table::new(rows.iter().map(MarketRow::from));
    println!("{table}");

    Ok(())
}
