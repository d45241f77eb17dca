//! Raw price quotes as supplied by the quote store.

use super::ids::MarketId;
use super::money::Price;
use super::outcome::Outcome;
use super::provider::Provider;

/// One provider's stated price for one outcome of one fixture.
///
/// Quotes are immutable once fetched. The outcome label is kept in its raw
/// free-text form; both aggregation passes normalize it on the fly and drop
/// quotes that fail to normalize or carry no provider identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    provider: Option<Provider>,
    label: String,
    price: Price,
    market_id: MarketId,
}

impl Quote {
    /// Create a new quote.
    pub fn new(
        provider: Option<Provider>,
        label: impl Into<String>,
        price: Price,
        market_id: MarketId,
    ) -> Self {
        Self {
            provider,
            label: label.into(),
            price,
            market_id,
        }
    }

    /// Get the issuing provider, if the store attached one.
    #[must_use]
    pub fn provider(&self) -> Option<&Provider> {
        self.provider.as_ref()
    }

    /// Get the raw outcome label as supplied by the provider.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the quoted decimal price.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Get the store's market ID for this quote.
    #[must_use]
    pub fn market_id(&self) -> MarketId {
        self.market_id
    }

    /// Resolve this quote for aggregation: the provider together with the
    /// normalized outcome.
    ///
    /// Returns `None` when the label is unrecognized or no provider is
    /// attached; such quotes are excluded from every downstream aggregation.
    #[must_use]
    pub fn resolve(&self) -> Option<(&Provider, Outcome)> {
        let provider = self.provider.as_ref()?;
        let outcome = Outcome::from_label(&self.label)?;
        Some((provider, outcome))
    }
}
