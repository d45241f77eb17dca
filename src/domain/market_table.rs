//! Full-market view: one row per provider with every outcome it quoted.

use std::collections::HashMap;

use super::money::Price;
use super::outcome::Outcome;
use super::provider::Provider;
use super::quote::Quote;

/// One provider's 1X2 prices for a fixture.
///
/// A field is `None` when the provider did not quote that outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRow {
    provider: Provider,
    home: Option<Price>,
    draw: Option<Price>,
    away: Option<Price>,
}

impl ProviderRow {
    fn new(provider: Provider) -> Self {
        Self {
            provider,
            home: None,
            draw: None,
            away: None,
        }
    }

    /// Get the provider this row belongs to.
    #[must_use]
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Get this provider's price for an outcome, if quoted.
    #[must_use]
    pub fn price(&self, outcome: Outcome) -> Option<Price> {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    /// Home-win price.
    #[must_use]
    pub fn home(&self) -> Option<Price> {
        self.home
    }

    /// Draw price.
    #[must_use]
    pub fn draw(&self) -> Option<Price> {
        self.draw
    }

    /// Away-win price.
    #[must_use]
    pub fn away(&self) -> Option<Price> {
        self.away
    }

    fn set(&mut self, outcome: Outcome, price: Price) {
        match outcome {
            Outcome::Home => self.home = Some(price),
            Outcome::Draw => self.draw = Some(price),
            Outcome::Away => self.away = Some(price),
        }
    }
}

/// Regroup a fixture's raw quotes into one row per distinct provider.
///
/// Rows appear in first-seen provider order. If a provider supplies more
/// than one quote for the same outcome the last one wins; unlike
/// [`BestPrices`](super::BestPrices) no maximum is taken. This pass reads
/// the same raw quotes as the best-price selection and is independent of it.
#[must_use]
pub fn provider_rows(quotes: &[Quote]) -> Vec<ProviderRow> {
    let mut index: HashMap<_, usize> = HashMap::new();
    let mut rows: Vec<ProviderRow> = Vec::new();

    for quote in quotes {
        let Some((provider, outcome)) = quote.resolve() else {
            continue;
        };
        let i = *index.entry(provider.id()).or_insert_with(|| {
            rows.push(ProviderRow::new(provider.clone()));
            rows.len() - 1
        });
        rows[i].set(outcome, quote.price());
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MarketId, ProviderId};
    use rust_decimal_macros::dec;

    fn provider(id: u64, name: &str) -> Provider {
        Provider::new(ProviderId::new(id), name, None)
    }

    fn quote(p: Provider, label: &str, price: Price) -> Quote {
        Quote::new(Some(p), label, price, MarketId::new(1))
    }

    #[test]
    fn one_row_per_distinct_provider() {
        let quotes = vec![
            quote(provider(1, "A"), "home", dec!(1.70)),
            quote(provider(1, "A"), "draw", dec!(3.55)),
            quote(provider(2, "B"), "home", dec!(1.75)),
        ];

        let rows = provider_rows(&quotes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].provider().name(), "A");
        assert_eq!(rows[1].provider().name(), "B");
    }

    #[test]
    fn every_usable_quote_lands_in_its_providers_row() {
        let quotes = vec![
            quote(provider(1, "A"), "home", dec!(1.70)),
            quote(provider(2, "B"), "draw", dec!(3.40)),
            quote(provider(1, "A"), "away", dec!(4.10)),
        ];

        let rows = provider_rows(&quotes);
        assert_eq!(rows[0].home(), Some(dec!(1.70)));
        assert_eq!(rows[0].away(), Some(dec!(4.10)));
        assert_eq!(rows[0].draw(), None);
        assert_eq!(rows[1].draw(), Some(dec!(3.40)));
        assert_eq!(rows[1].home(), None);
    }

    #[test]
    fn duplicate_outcome_takes_the_last_quote_not_the_max() {
        let quotes = vec![
            quote(provider(1, "A"), "home", dec!(1.90)),
            quote(provider(1, "A"), "home", dec!(1.60)),
        ];

        let rows = provider_rows(&quotes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].home(), Some(dec!(1.60)));
    }

    #[test]
    fn rows_keep_first_seen_order() {
        let quotes = vec![
            quote(provider(5, "Later"), "home", dec!(1.70)),
            quote(provider(2, "Middle"), "home", dec!(1.72)),
            quote(provider(9, "Last"), "home", dec!(1.68)),
            quote(provider(2, "Middle"), "draw", dec!(3.30)),
        ];

        let rows = provider_rows(&quotes);
        let names: Vec<_> = rows.iter().map(|r| r.provider().name()).collect();
        assert_eq!(names, vec!["Later", "Middle", "Last"]);
    }

    #[test]
    fn unusable_quotes_produce_no_rows() {
        let quotes = vec![
            Quote::new(None, "home", dec!(1.70), MarketId::new(1)),
            quote(provider(1, "A"), "handicap", dec!(2.00)),
        ];

        assert!(provider_rows(&quotes).is_empty());
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(provider_rows(&[]).is_empty());
    }

    #[test]
    fn price_accessor_matches_field_accessors() {
        let quotes = vec![
            quote(provider(1, "A"), "1", dec!(2.05)),
            quote(provider(1, "A"), "x", dec!(3.25)),
            quote(provider(1, "A"), "2", dec!(3.80)),
        ];

        let rows = provider_rows(&quotes);
        let row = &rows[0];
        assert_eq!(row.price(Outcome::Home), row.home());
        assert_eq!(row.price(Outcome::Draw), row.draw());
        assert_eq!(row.price(Outcome::Away), row.away());
    }
}
