//! Accumulator totals: per-provider compounded prices, returns and ranking.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::money::{Price, Stake};
use super::provider::Provider;
use super::slip::{Leg, MIN_LEGS};

/// One provider's compounded price over the slip legs it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    provider: Provider,
    legs: Vec<Leg>,
    total_price: Price,
    potential_return: Price,
    rank: usize,
}

impl Comparison {
    /// Get the provider.
    #[must_use]
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Get the legs whose selected price came from this provider.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Product of the selected prices over the covered legs.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// `stake * total_price`.
    #[must_use]
    pub fn potential_return(&self) -> Price {
        self.potential_return
    }

    /// 1-based position after sorting by total price descending.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// Group slip legs by each leg's own provider and rank the groups by
/// compounded price.
///
/// Fewer than [`MIN_LEGS`] legs yields an empty list. Grouping follows the
/// provider already attached to each leg - the one that held the best price
/// for that leg's individually chosen outcome. A ranked provider is NOT
/// required to quote every leg of the slip: a provider covering one leg of
/// five still appears, compounded over just that leg, and may outrank
/// fuller-coverage providers. Ties keep first-encountered provider order.
#[must_use]
pub fn rank_by_provider(legs: &[Leg], stake: Stake) -> Vec<Comparison> {
    if legs.len() < MIN_LEGS {
        return Vec::new();
    }

    let mut index: HashMap<_, usize> = HashMap::new();
    let mut groups: Vec<(Provider, Vec<Leg>, Price)> = Vec::new();

    for leg in legs {
        let provider = leg.provider();
        match index.get(&provider.id()) {
            Some(&i) => {
                let (_, group_legs, total) = &mut groups[i];
                group_legs.push(leg.clone());
                *total *= leg.price();
            }
            None => {
                index.insert(provider.id(), groups.len());
                groups.push((provider, vec![leg.clone()], leg.price()));
            }
        }
    }

    let mut comparisons: Vec<Comparison> = groups
        .into_iter()
        .map(|(provider, legs, total_price)| Comparison {
            provider,
            legs,
            total_price,
            potential_return: stake * total_price,
            rank: 0,
        })
        .collect();

    // Stable sort keeps first-encountered order on equal totals.
    comparisons.sort_by(|a, b| b.total_price.cmp(&a.total_price));
    for (i, comparison) in comparisons.iter_mut().enumerate() {
        comparison.rank = i + 1;
    }

    comparisons
}

/// Flat bet figures for a set of selections and a stake.
///
/// Singles, doubles, trebles and longer accumulators all use the same
/// multiplicative rule.
#[derive(Debug, Clone, PartialEq)]
pub struct BetCalculation {
    total_outlay: Price,
    total_return: Price,
    total_profit: Price,
    combined_odds: Price,
}

impl BetCalculation {
    /// Compute outlay/return/profit for the given selection prices.
    ///
    /// Returns `None` for an empty selection list.
    #[must_use]
    pub fn for_selections(prices: &[Price], stake: Stake) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        let combined_odds = prices.iter().fold(Decimal::ONE, |acc, price| acc * price);
        let total_return = stake * combined_odds;
        Some(Self {
            total_outlay: stake,
            total_return,
            total_profit: total_return - stake,
            combined_odds,
        })
    }

    /// The stake laid down.
    #[must_use]
    pub fn total_outlay(&self) -> Price {
        self.total_outlay
    }

    /// Stake multiplied by the combined odds.
    #[must_use]
    pub fn total_return(&self) -> Price {
        self.total_return
    }

    /// Return minus outlay.
    #[must_use]
    pub fn total_profit(&self) -> Price {
        self.total_profit
    }

    /// Product of all selection prices.
    #[must_use]
    pub fn combined_odds(&self) -> Price {
        self.combined_odds
    }
}
