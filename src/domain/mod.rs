//! Store-agnostic odds domain logic.

mod best_price;
mod fixture;
mod ids;
mod market_table;
mod money;
mod outcome;
mod provider;
mod quote;
mod slip;
mod totalizer;

// Core domain types
pub use fixture::{Fixture, FixtureStatus, Team};
pub use ids::{FixtureId, MarketId, ProviderId};
pub use money::{Price, Stake};
pub use outcome::Outcome;
pub use provider::Provider;
pub use quote::Quote;

// Aggregation passes over raw quotes
pub use best_price::{BestPrices, BestQuote};
pub use market_table::{provider_rows, ProviderRow};

// Accumulator slip and totalizer
pub use slip::{Leg, PriceSelection, Slip, SlipError, MAX_LEGS, MIN_LEGS};
pub use totalizer::{rank_by_provider, BetCalculation, Comparison};
