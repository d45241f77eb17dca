//! Wire records for the quote store's JSON surface.
//!
//! The store speaks camelCase JSON; records convert into domain types with
//! `into_domain`. Quote records with a missing provider identity are kept at
//! this layer - the aggregation passes drop them, not the decoder.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    Fixture, FixtureId, FixtureStatus, MarketId, Provider, ProviderId, Quote, Team,
};

/// Top-level fixture document: `{"fixtures": [...]}`.
#[derive(Debug, Deserialize)]
pub struct FixtureDocument {
    pub fixtures: Vec<FixtureRecord>,
}

/// One fixture as served by the store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    pub id: u64,
    pub home_team: TeamRecord,
    pub away_team: TeamRecord,
    pub start_time: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub quotes: Vec<QuoteRecord>,
}

/// A team reference on a fixture record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: u64,
    pub name: String,
}

/// One raw price quote as served by the store.
///
/// Provider fields are optional: the store occasionally serves quotes with
/// the bookmaker join missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    #[serde(default)]
    pub provider_id: Option<u64>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub provider_url: Option<String>,
    pub outcome_label: String,
    pub price: Decimal,
    pub market_id: u64,
}

impl FixtureRecord {
    /// Convert into the domain fixture.
    #[must_use]
    pub fn into_domain(self) -> Fixture {
        let status = parse_status(&self.status);
        let quotes = self.quotes.into_iter().map(QuoteRecord::into_domain).collect();
        Fixture::new(
            FixtureId::new(self.id),
            Team::new(self.home_team.id, self.home_team.name),
            Team::new(self.away_team.id, self.away_team.name),
            self.start_time,
            status,
            quotes,
        )
    }
}

impl QuoteRecord {
    /// Convert into the domain quote.
    #[must_use]
    pub fn into_domain(self) -> Quote {
        let provider = match (self.provider_id, self.provider_name) {
            (Some(id), Some(name)) => {
                Some(Provider::new(ProviderId::new(id), name, self.provider_url))
            }
            _ => None,
        };
        Quote::new(
            provider,
            self.outcome_label,
            self.price,
            MarketId::new(self.market_id),
        )
    }
}

fn parse_status(status: &str) -> FixtureStatus {
    match status.to_lowercase().as_str() {
        "finished" | "full time" | "after extra time" | "after penalties" => {
            FixtureStatus::Finished
        }
        "in play" | "live" | "half time" => FixtureStatus::InPlay,
        _ => FixtureStatus::Upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const FIXTURE_JSON: &str = r#"{
        "id": 1001,
        "homeTeam": {"id": 1, "name": "Arsenal"},
        "awayTeam": {"id": 2, "name": "Chelsea"},
        "startTime": "2026-08-08T19:45:00Z",
        "status": "Upcoming",
        "quotes": [
            {
                "providerId": 10,
                "providerName": "10Bet",
                "providerUrl": "https://10bet.example",
                "outcomeLabel": "Home",
                "price": 1.70,
                "marketId": 1
            },
            {
                "outcomeLabel": "Draw",
                "price": 3.55,
                "marketId": 1
            }
        ]
    }"#;

    #[test]
    fn decodes_camel_case_fixture() {
        let record: FixtureRecord = serde_json::from_str(FIXTURE_JSON).unwrap();
        let fixture = record.into_domain();

        assert_eq!(fixture.id(), FixtureId::new(1001));
        assert_eq!(fixture.name(), "Arsenal v Chelsea");
        assert_eq!(fixture.status(), FixtureStatus::Upcoming);
        assert_eq!(fixture.quotes().len(), 2);
    }

    #[test]
    fn quote_with_provider_fields_gets_a_provider() {
        let record: FixtureRecord = serde_json::from_str(FIXTURE_JSON).unwrap();
        let fixture = record.into_domain();

        let quote = &fixture.quotes()[0];
        let provider = quote.provider().unwrap();
        assert_eq!(provider.id(), ProviderId::new(10));
        assert_eq!(provider.name(), "10Bet");
        assert_eq!(provider.url(), Some("https://10bet.example"));
        assert_eq!(quote.price(), dec!(1.70));
    }

    #[test]
    fn quote_without_provider_fields_has_none() {
        let record: FixtureRecord = serde_json::from_str(FIXTURE_JSON).unwrap();
        let fixture = record.into_domain();

        assert!(fixture.quotes()[1].provider().is_none());
    }

    #[test]
    fn missing_quotes_field_defaults_to_empty() {
        let json = r#"{
            "id": 5,
            "homeTeam": {"id": 1, "name": "A"},
            "awayTeam": {"id": 2, "name": "B"},
            "startTime": "2026-08-08T15:00:00Z",
            "status": "Upcoming"
        }"#;
        let record: FixtureRecord = serde_json::from_str(json).unwrap();
        assert!(record.into_domain().quotes().is_empty());
    }

    #[test]
    fn status_strings_map_to_lifecycle_states() {
        assert_eq!(parse_status("Finished"), FixtureStatus::Finished);
        assert_eq!(parse_status("Full Time"), FixtureStatus::Finished);
        assert_eq!(parse_status("after penalties"), FixtureStatus::Finished);
        assert_eq!(parse_status("In Play"), FixtureStatus::InPlay);
        assert_eq!(parse_status("Half Time"), FixtureStatus::InPlay);
        assert_eq!(parse_status("Upcoming"), FixtureStatus::Upcoming);
        assert_eq!(parse_status("NS"), FixtureStatus::Upcoming);
    }
}
