//! Price provider (bookmaker) identity.

use std::fmt;

use super::ids::ProviderId;

/// A bookmaker that issues price quotes.
///
/// The `url` is the provider's landing page, used by the presentation layer
/// for click-through; it is optional and never interpreted by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    id: ProviderId,
    name: String,
    url: Option<String>,
}

impl Provider {
    /// Create a new provider.
    pub fn new(id: ProviderId, name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url,
        }
    }

    /// The placeholder provider attached to legs whose chosen outcome has no
    /// quote. Distinguishable from real providers via
    /// [`PriceSelection::is_placeholder`](super::PriceSelection::is_placeholder).
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(ProviderId::new(1), "Unknown", None)
    }

    /// Get the provider ID.
    #[must_use]
    pub fn id(&self) -> ProviderId {
        self.id
    }

    /// Get the provider's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the provider's landing page URL, if known.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
