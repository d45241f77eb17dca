//! Best-price selection: one best (price, provider) pair per outcome.

use super::money::Price;
use super::outcome::Outcome;
use super::provider::Provider;
use super::quote::Quote;

/// The best quoted price for one outcome and the provider offering it.
#[derive(Debug, Clone, PartialEq)]
pub struct BestQuote {
    price: Price,
    provider: Provider,
}

impl BestQuote {
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn provider(&self) -> &Provider {
        &self.provider
    }
}

/// Per-fixture best prices, one optional slot per 1X2 outcome.
///
/// A slot is `None` when no provider quoted that outcome; the presentation
/// layer renders it as "N/A" and the slip falls back to a placeholder
/// selection if the outcome is chosen anyway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestPrices {
    home: Option<BestQuote>,
    draw: Option<BestQuote>,
    away: Option<BestQuote>,
}

impl BestPrices {
    /// Reduce a fixture's raw quote list to the best price per outcome.
    ///
    /// Quotes are scanned once in input order. A slot is replaced only on a
    /// strictly greater price, so the first quote to reach the maximum holds
    /// the slot; later quotes at the same price never displace it. Quotes
    /// with an unrecognized label or no provider are skipped.
    #[must_use]
    pub fn from_quotes(quotes: &[Quote]) -> Self {
        let mut best = Self::default();
        for quote in quotes {
            let Some((provider, outcome)) = quote.resolve() else {
                continue;
            };
            let slot = best.slot_mut(outcome);
            let improves = match slot {
                Some(held) => quote.price() > held.price,
                None => true,
            };
            if improves {
                *slot = Some(BestQuote {
                    price: quote.price(),
                    provider: provider.clone(),
                });
            }
        }
        best
    }

    /// Get the best quote for an outcome, if any provider priced it.
    #[must_use]
    pub fn outcome(&self, outcome: Outcome) -> Option<&BestQuote> {
        match outcome {
            Outcome::Home => self.home.as_ref(),
            Outcome::Draw => self.draw.as_ref(),
            Outcome::Away => self.away.as_ref(),
        }
    }

    /// Best home-win quote.
    #[must_use]
    pub fn home(&self) -> Option<&BestQuote> {
        self.home.as_ref()
    }

    /// Best draw quote.
    #[must_use]
    pub fn draw(&self) -> Option<&BestQuote> {
        self.draw.as_ref()
    }

    /// Best away-win quote.
    #[must_use]
    pub fn away(&self) -> Option<&BestQuote> {
        self.away.as_ref()
    }

    /// True when no outcome has a price at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.home.is_none() && self.draw.is_none() && self.away.is_none()
    }

    fn slot_mut(&mut self, outcome: Outcome) -> &mut Option<BestQuote> {
        match outcome {
            Outcome::Home => &mut self.home,
            Outcome::Draw => &mut self.draw,
            Outcome::Away => &mut self.away,
        }
    }
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
    fn single_provider_fills_all_slots() {
        // Scenario A from the product sheet: one provider quoting all three.
        let ten_bet = provider(10, "10Bet");
        let quotes = vec![
            quote(ten_bet.clone(), "Home", dec!(1.70)),
            quote(ten_bet.clone(), "Draw", dec!(3.55)),
            quote(ten_bet.clone(), "Away", dec!(3.95)),
        ];

        let best = BestPrices::from_quotes(&quotes);
        assert_eq!(best.home().unwrap().price(), dec!(1.70));
        assert_eq!(best.draw().unwrap().price(), dec!(3.55));
        assert_eq!(best.away().unwrap().price(), dec!(3.95));
        assert_eq!(best.home().unwrap().provider().name(), "10Bet");
    }

    #[test]
    fn picks_the_maximum_per_outcome() {
        let quotes = vec![
            quote(provider(1, "A"), "home", dec!(1.70)),
            quote(provider(2, "B"), "home", dec!(1.85)),
            quote(provider(3, "C"), "home", dec!(1.62)),
        ];

        let best = BestPrices::from_quotes(&quotes);
        let home = best.home().unwrap();
        assert_eq!(home.price(), dec!(1.85));
        assert_eq!(home.provider().name(), "B");
    }

    #[test]
    fn equal_price_keeps_the_first_seen_provider() {
        let quotes = vec![
            quote(provider(1, "First"), "draw", dec!(3.40)),
            quote(provider(2, "Second"), "draw", dec!(3.40)),
        ];

        let best = BestPrices::from_quotes(&quotes);
        assert_eq!(best.draw().unwrap().provider().name(), "First");
    }

    #[test]
    fn column_labels_land_in_the_same_slots() {
        let quotes = vec![
            quote(provider(1, "A"), "1", dec!(2.10)),
            quote(provider(1, "A"), "x", dec!(3.30)),
            quote(provider(1, "A"), "2", dec!(3.60)),
        ];

        let best = BestPrices::from_quotes(&quotes);
        assert!(best.home().is_some());
        assert!(best.draw().is_some());
        assert!(best.away().is_some());
    }

    #[test]
    fn unrecognized_labels_are_dropped() {
        let quotes = vec![
            quote(provider(1, "A"), "over 2.5", dec!(1.90)),
            quote(provider(1, "A"), "home", dec!(1.70)),
        ];

        let best = BestPrices::from_quotes(&quotes);
        assert_eq!(best.home().unwrap().price(), dec!(1.70));
        assert!(best.draw().is_none());
        assert!(best.away().is_none());
    }

    #[test]
    fn quotes_without_provider_are_dropped() {
        let quotes = vec![
            Quote::new(None, "home", dec!(9.99), MarketId::new(1)),
            quote(provider(1, "A"), "home", dec!(1.70)),
        ];

        let best = BestPrices::from_quotes(&quotes);
        // The orphan 9.99 quote never wins the slot.
        assert_eq!(best.home().unwrap().price(), dec!(1.70));
    }

    #[test]
    fn empty_quote_list_yields_empty_slots() {
        let best = BestPrices::from_quotes(&[]);
        assert!(best.is_empty());
        assert!(best.outcome(Outcome::Home).is_none());
        assert!(best.outcome(Outcome::Draw).is_none());
        assert!(best.outcome(Outcome::Away).is_none());
    }

    #[test]
    fn missing_outcome_leaves_only_that_slot_empty() {
        let quotes = vec![
            quote(provider(1, "A"), "home", dec!(1.70)),
            quote(provider(1, "A"), "away", dec!(4.20)),
        ];

        let best = BestPrices::from_quotes(&quotes);
        assert!(!best.is_empty());
        assert!(best.draw().is_none());
        assert!(best.home().is_some());
        assert!(best.away().is_some());
    }
}
