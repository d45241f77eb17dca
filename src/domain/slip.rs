//! The accumulator slip: per-fixture legs with a chosen outcome each.

use rust_decimal::Decimal;
use thiserror::Error;

use super::best_price::BestPrices;
use super::fixture::Fixture;
use super::ids::FixtureId;
use super::money::Price;
use super::outcome::Outcome;
use super::provider::Provider;

/// Hard cap on concurrent legs.
pub const MAX_LEGS: usize = 10;

/// Minimum legs before totals are computed.
pub const MIN_LEGS: usize = 2;

/// Price used when the chosen outcome has no quote at all.
const PLACEHOLDER_PRICE: Decimal = Decimal::TWO;

/// Error returned when a leg cannot be added to the slip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlipError {
    #[error("slip already holds the maximum of {MAX_LEGS} legs")]
    Full,

    #[error("fixture {0} is already on the slip")]
    DuplicateFixture(FixtureId),
}

/// The price and provider backing a leg's chosen outcome.
///
/// `Placeholder` marks a fabricated selection: the chosen outcome had no
/// quote, so the leg carries a nominal price of 2.0 and the "Unknown"
/// provider. Kept as a tagged variant so callers can tell a fabricated
/// selection from a real one.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceSelection {
    Quoted { price: Price, provider: Provider },
    Placeholder,
}

impl PriceSelection {
    fn for_outcome(best: &BestPrices, outcome: Outcome) -> Self {
        match best.outcome(outcome) {
            Some(quote) => PriceSelection::Quoted {
                price: quote.price(),
                provider: quote.provider().clone(),
            },
            None => PriceSelection::Placeholder,
        }
    }

    /// The effective price of this selection.
    #[must_use]
    pub fn price(&self) -> Price {
        match self {
            PriceSelection::Quoted { price, .. } => *price,
            PriceSelection::Placeholder => PLACEHOLDER_PRICE,
        }
    }

    /// The effective provider of this selection.
    #[must_use]
    pub fn provider(&self) -> Provider {
        match self {
            PriceSelection::Quoted { provider, .. } => provider.clone(),
            PriceSelection::Placeholder => Provider::placeholder(),
        }
    }

    /// True when no quote backed the chosen outcome.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PriceSelection::Placeholder)
    }
}

/// One fixture's chosen outcome within the accumulator.
///
/// The leg retains its fixture's best prices so an outcome change re-derives
/// the price and provider without going back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    fixture_id: FixtureId,
    fixture_name: String,
    best: BestPrices,
    outcome: Outcome,
    selection: PriceSelection,
}

impl Leg {
    /// Get the fixture ID.
    #[must_use]
    pub fn fixture_id(&self) -> FixtureId {
        self.fixture_id
    }

    /// Get the fixture display name ("Home v Away").
    #[must_use]
    pub fn fixture_name(&self) -> &str {
        &self.fixture_name
    }

    /// Get the chosen outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Get the backing selection (price + provider, or placeholder).
    #[must_use]
    pub fn selection(&self) -> &PriceSelection {
        &self.selection
    }

    /// The selected price for this leg.
    #[must_use]
    pub fn price(&self) -> Price {
        self.selection.price()
    }

    /// The provider behind the selected price.
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.selection.provider()
    }
}

/// The mutable accumulator slip. At most [`MAX_LEGS`] legs, one per fixture.
#[derive(Debug, Clone, Default)]
pub struct Slip {
    legs: Vec<Leg>,
}

impl Slip {
    /// Create an empty slip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixture as a new leg, defaulting to the home outcome seeded
    /// from the fixture's best home price.
    ///
    /// # Errors
    ///
    /// Returns [`SlipError::Full`] at the leg cap and
    /// [`SlipError::DuplicateFixture`] when the fixture is already on the
    /// slip. Fixtures without any quotes are accepted; their legs start on
    /// the placeholder selection.
    pub fn add_fixture(&mut self, fixture: &Fixture) -> Result<(), SlipError> {
        if self.legs.len() >= MAX_LEGS {
            return Err(SlipError::Full);
        }
        if self.contains(fixture.id()) {
            return Err(SlipError::DuplicateFixture(fixture.id()));
        }

        let best = BestPrices::from_quotes(fixture.quotes());
        let selection = PriceSelection::for_outcome(&best, Outcome::Home);
        self.legs.push(Leg {
            fixture_id: fixture.id(),
            fixture_name: fixture.name(),
            best,
            outcome: Outcome::Home,
            selection,
        });
        Ok(())
    }

    /// Remove the leg for a fixture. No-op when the fixture is not on the
    /// slip.
    pub fn remove(&mut self, fixture_id: FixtureId) {
        self.legs.retain(|leg| leg.fixture_id != fixture_id);
    }

    /// Change the chosen outcome for a fixture's leg, re-deriving price and
    /// provider from that fixture's best prices.
    ///
    /// Returns false when the fixture is not on the slip.
    pub fn set_outcome(&mut self, fixture_id: FixtureId, outcome: Outcome) -> bool {
        match self.legs.iter_mut().find(|leg| leg.fixture_id == fixture_id) {
            Some(leg) => {
                leg.outcome = outcome;
                leg.selection = PriceSelection::for_outcome(&leg.best, outcome);
                true
            }
            None => false,
        }
    }

    /// Remove every leg.
    pub fn clear(&mut self) {
        self.legs.clear();
    }

    /// Get the legs in the order they were added.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs on the slip.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// True when the slip has no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Whether a fixture already has a leg.
    #[must_use]
    pub fn contains(&self, fixture_id: FixtureId) -> bool {
        self.legs.iter().any(|leg| leg.fixture_id == fixture_id)
    }

    /// True once the slip has enough legs for totals to be computed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.legs.len() >= MIN_LEGS
    }
}
