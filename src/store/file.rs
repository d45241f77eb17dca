//! File-backed quote store for offline use and tests.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Fixture, FixtureId};
use crate::error::StoreError;

use super::wire::{FixtureDocument, FixtureRecord};
use super::QuoteStore;

/// Quote store reading the same JSON document the hosted surface serves,
/// from a local file.
///
/// The document is re-read on every call; the files involved are small and
/// this keeps the store stateless.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given document path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Vec<Fixture>, StoreError> {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| StoreError::ReadFile {
                    path: self.path.clone(),
                    source,
                })?;
        let document: FixtureDocument = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = document.fixtures.len(), "fixture file loaded");
        Ok(document
            .fixtures
            .into_iter()
            .map(FixtureRecord::into_domain)
            .collect())
    }
}

#[async_trait]
impl QuoteStore for FileStore {
    async fn fixtures_for_date(&self, date: NaiveDate) -> Result<Vec<Fixture>, StoreError> {
        let fixtures = self.load().await?;
        Ok(fixtures
            .into_iter()
            .filter(|fixture| fixture.kickoff().date_naive() == date)
            .collect())
    }

    async fn fixture(&self, id: FixtureId) -> Result<Fixture, StoreError> {
        self.load()
            .await?
            .into_iter()
            .find(|fixture| fixture.id() == id)
            .ok_or(StoreError::FixtureNotFound(id))
    }
}
