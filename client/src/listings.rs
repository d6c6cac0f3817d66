//! Public listing directory: fetch plus pure client-side filtering.

use crate::error::Result;
use crate::gateway::ApiGateway;
use stayfinder_core::Listing;

/// Fetches the public listing set. Search and filtering stay client-side;
/// see [`stayfinder_core::ListingQuery`].
#[derive(Debug, Clone)]
pub struct ListingDirectory {
    gateway: ApiGateway,
}

impl ListingDirectory {
    /// Directory over a gateway.
    #[must_use]
    pub const fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Fetch all listings, silently dropping entries that are malformed or
    /// missing required display fields (name, city, country).
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or non-2xx responses. Individual
    /// bad entries are not errors; they are dropped.
    pub async fn list(&self) -> Result<Vec<Listing>> {
        let raw: Vec<serde_json::Value> = self
            .gateway
            .get(&self.gateway.config().listings_url(), None)
            .await?;
        let total = raw.len();

        let listings: Vec<Listing> = raw
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<Listing>(entry).ok())
            .filter(Listing::is_displayable)
            .collect();

        if listings.len() < total {
            tracing::debug!(
                dropped = total - listings.len(),
                kept = listings.len(),
                "dropped listings missing display fields"
            );
        }
        Ok(listings)
    }

    /// Fetch a single listing by id.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing
    /// failures.
    pub async fn get(&self, id: &str) -> Result<Listing> {
        self.gateway
            .get(&self.gateway.config().listing_url(id), None)
            .await
    }
}
