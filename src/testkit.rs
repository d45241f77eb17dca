//! Test fixtures and builders, available behind the `testkit` feature.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    Fixture, FixtureId, FixtureStatus, MarketId, Provider, ProviderId, Quote, Team,
};

/// A provider with the given ID and name, no URL.
#[must_use]
pub fn provider(id: u64, name: &str) -> Provider {
    Provider::new(ProviderId::new(id), name, None)
}

/// A quote from the given provider.
#[must_use]
pub fn quote(provider: Provider, label: &str, price: Decimal) -> Quote {
    Quote::new(Some(provider), label, price, MarketId::new(1))
}

/// A quote with no provider attached (dropped by the aggregators).
#[must_use]
pub fn orphan_quote(label: &str, price: Decimal) -> Quote {
    Quote::new(None, label, price, MarketId::new(1))
}

/// An upcoming fixture kicking off in two hours.
#[must_use]
pub fn upcoming_fixture(id: u64, home: &str, away: &str, quotes: Vec<Quote>) -> Fixture {
    fixture_at(id, home, away, Utc::now() + Duration::hours(2), quotes)
}

/// An upcoming fixture with an explicit kickoff time.
#[must_use]
pub fn fixture_at(
    id: u64,
    home: &str,
    away: &str,
    kickoff: DateTime<Utc>,
    quotes: Vec<Quote>,
) -> Fixture {
    Fixture::new(
        FixtureId::new(id),
        Team::new(id * 2, home),
        Team::new(id * 2 + 1, away),
        kickoff,
        FixtureStatus::Upcoming,
        quotes,
    )
}
