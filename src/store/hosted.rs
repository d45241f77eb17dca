//! Hosted quote store: REST client over the store's JSON surface.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use tracing::{debug, info};
use url::Url;

use crate::config::StoreConfig;
use crate::domain::{Fixture, FixtureId};
use crate::error::StoreError;

use super::wire::{FixtureDocument, FixtureRecord};
use super::QuoteStore;

/// REST client for the hosted relational store.
///
/// Endpoints:
/// - `GET {base}/fixtures?date=YYYY-MM-DD`
/// - `GET {base}/fixtures/{id}`
pub struct HostedStore {
    client: reqwest::Client,
    base: Url,
}

impl HostedStore {
    /// Build a client from store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BaseUrl`] for an unparseable API URL and
    /// [`StoreError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let base = Url::parse(&config.api_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        // Keep the base path intact: join("fixtures") against ".../v1" would
        // drop the "v1" segment.
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(path.split('/'));
        Ok(url)
    }
}

#[async_trait]
impl QuoteStore for HostedStore {
    async fn fixtures_for_date(&self, date: NaiveDate) -> Result<Vec<Fixture>, StoreError> {
        let url = self.endpoint("fixtures")?;
        info!(%date, "fetching fixtures");

        let document: FixtureDocument = self
            .client
            .get(url)
            .query(&[("date", date.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(count = document.fixtures.len(), "fixtures fetched");
        Ok(document
            .fixtures
            .into_iter()
            .map(FixtureRecord::into_domain)
            .collect())
    }

    async fn fixture(&self, id: FixtureId) -> Result<Fixture, StoreError> {
        let url = self.endpoint(&format!("fixtures/{id}"))?;
        info!(fixture = %id, "fetching fixture");

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::FixtureNotFound(id));
        }

        let record: FixtureRecord = response.error_for_status()?.json().await?;
        Ok(record.into_domain())
    }
}
