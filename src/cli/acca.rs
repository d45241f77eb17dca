//! `oddsfold acca` - ranked bookmaker comparison for an accumulator.

use chrono::Utc;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::app::AccaSession;
use crate::cli::{output, parse_pick};
use crate::domain::{BetCalculation, FixtureId, Price, MIN_LEGS};
use crate::error::Result;
use crate::store::QuoteStore;

pub async fn run(store: &dyn QuoteStore, picks: &[String], stake: Decimal) -> Result<()> {
    let mut session = AccaSession::new(stake);
    let now = Utc::now();

    for raw in picks {
        let (fixture_id, outcome) = parse_pick(raw)?;
        let fixture = store.fixture(FixtureId::new(fixture_id)).await?;
        if !fixture.is_selectable(now) {
            output::note(&format!(
                "⚠ {} has started or finished; odds may be stale",
                fixture.name()
            ));
        }
        session.add_fixture(&fixture)?;
        session.set_outcome(FixtureId::new(fixture_id), outcome);
    }

    output::section("Accumulator slip");
    for leg in session.slip().legs() {
        let placeholder = if leg.selection().is_placeholder() {
            "  [no quote, nominal price]"
        } else {
            ""
        };
        println!(
            "#{} {}  {} @ {} ({}){placeholder}",
            leg.fixture_id(),
            leg.fixture_name(),
            leg.outcome(),
            output::fmt_price(leg.price()),
            leg.provider().name(),
        );
    }

    if !session.is_ready() {
        output::note(&format!(
            "Add at least {MIN_LEGS} fixtures to compare bookmakers."
        ));
        return Ok(());
    }

    let prices: Vec<Price> = session.slip().legs().iter().map(|leg| leg.price()).collect();
    if let Some(calc) = BetCalculation::for_selections(&prices, stake) {
        output::note(&format!(
            "Best-price combination: odds {}  returns {}  profit {}",
            output::fmt_price(calc.combined_odds()),
            output::fmt_price(calc.total_return()),
            output::fmt_price(calc.total_profit()),
        ));
    }

    output::section(&format!("Bookmaker comparison (stake {stake})"));
    for comparison in session.comparisons() {
        let line = format!(
            "#{} {}  {} leg(s)  total {}  returns {}",
            comparison.rank(),
            comparison.provider().name(),
            comparison.legs().len(),
            output::fmt_price(comparison.total_price()),
            output::fmt_price(comparison.potential_return()),
        );
        if comparison.rank() == 1 {
            println!("{}  {}", line.green().bold(), "best value".green());
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
