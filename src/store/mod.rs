//! Quote store boundary.
//!
//! The core operates on already-materialized quote lists; this module is the
//! thin fetch layer in front of it. [`QuoteStore`] is the trait the rest of
//! the crate consumes, with two implementations:
//!
//! - [`HostedStore`] - the hosted relational store's REST surface
//! - [`FileStore`] - the same JSON document read from disk

mod file;
mod hosted;
mod wire;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Fixture, FixtureId};
use crate::error::StoreError;

pub use file::FileStore;
pub use hosted::HostedStore;
pub use wire::{FixtureDocument, FixtureRecord, QuoteRecord, TeamRecord};

/// Read access to fixtures and their raw quotes.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// All fixtures kicking off on the given calendar date (UTC).
    async fn fixtures_for_date(&self, date: NaiveDate) -> Result<Vec<Fixture>, StoreError>;

    /// One fixture by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FixtureNotFound`] when the store has no such
    /// fixture.
    async fn fixture(&self, id: FixtureId) -> Result<Fixture, StoreError>;
}
