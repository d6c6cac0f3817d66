//! Host-facing listing management: create, edit, delete, dashboard stats.

use crate::error::Result;
use crate::gateway::ApiGateway;
use crate::session::Session;
use serde::Deserialize;
use stayfinder_core::{Listing, ListingDraft, ValidationError};

/// Create and update operations on a host's listings.
#[derive(Debug, Clone)]
pub struct HostListingService {
    gateway: ApiGateway,
}

impl HostListingService {
    /// Service over a gateway.
    #[must_use]
    pub const fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Create a listing from a draft.
    ///
    /// Required-field validation runs first and the first missing-field
    /// reason wins; nothing reaches the network on failure. The draft is
    /// then submitted as bracket-flattened multipart form data.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] for a failed precondition; otherwise network,
    /// API, or parsing errors.
    pub async fn create(&self, session: &Session, draft: &ListingDraft) -> Result<Listing> {
        draft.validate()?;
        tracing::debug!(hotel_name = %draft.hotel_name, "creating listing");
        self.gateway
            .post_listing_form(
                &self.gateway.config().listings_url(),
                Some(session.token()),
                draft,
            )
            .await
    }

    /// Fetch an existing listing to pre-populate the edit form.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing
    /// failures.
    pub async fn load_for_edit(&self, id: &str) -> Result<Listing> {
        self.gateway
            .get(&self.gateway.config().listing_url(id), None)
            .await
    }

    /// Submit a full replacement for an existing listing.
    ///
    /// Attached images replace the stored image set; there is no partial
    /// image update.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] for a failed precondition; otherwise network,
    /// API, or parsing errors.
    pub async fn update(
        &self,
        session: &Session,
        id: &str,
        draft: &ListingDraft,
    ) -> Result<Listing> {
        draft.validate()?;
        tracing::debug!(listing_id = %id, "updating listing");
        self.gateway
            .put_listing_form(
                &self.gateway.config().listing_url(id),
                Some(session.token()),
                draft,
            )
            .await
    }
}

/// `DELETE /api/listings/:id` response: how the cascade went.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    /// Dependent bookings the server cancelled, as reported by it.
    #[serde(default)]
    pub cancelled_bookings: u64,
    /// Name of the deleted hotel.
    #[serde(default)]
    pub hotel_name: String,
}

impl DeleteReceipt {
    /// User-facing success notice, mentioning the cancelled-booking count
    /// when there is one.
    #[must_use]
    pub fn notice(&self) -> String {
        if self.cancelled_bookings > 0 {
            format!(
                "Hotel \"{}\" deleted successfully! {} booking(s) were automatically \
                 cancelled and guests have been notified.",
                self.hotel_name, self.cancelled_bookings
            )
        } else {
            format!("Hotel \"{}\" deleted successfully!", self.hotel_name)
        }
    }
}

/// The host dashboard: owns the host's in-memory listing collection.
#[derive(Debug, Clone)]
pub struct HostDashboard {
    gateway: ApiGateway,
    listings: Vec<Listing>,
}

/// Summary numbers for the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    /// Total listings.
    pub listings: usize,
    /// Total room types across all listings.
    pub room_types: usize,
    /// Total rooms currently available across all listings.
    pub available_rooms: u64,
    /// Average star rating, rounded to one decimal. Zero with no listings.
    pub average_rating: f64,
}

impl HostDashboard {
    /// Empty dashboard; call [`load`](Self::load) to populate it.
    #[must_use]
    pub const fn new(gateway: ApiGateway) -> Self {
        Self {
            gateway,
            listings: Vec::new(),
        }
    }

    /// Fetch the host's listings into the local collection.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing
    /// failures.
    pub async fn load(&mut self, session: &Session) -> Result<()> {
        let url = self
            .gateway
            .config()
            .listings_for_host_url(&session.user().id);
        self.listings = self.gateway.get(&url, None).await?;
        tracing::debug!(count = self.listings.len(), "loaded host listings");
        Ok(())
    }

    /// The locally held listing collection.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Summary numbers for the dashboard header.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        let room_types = self.listings.iter().map(|l| l.room_types.len()).sum();
        let available_rooms = self
            .listings
            .iter()
            .flat_map(|l| &l.room_types)
            .map(|r| u64::from(r.available))
            .sum();
        let average_rating = if self.listings.is_empty() {
            0.0
        } else {
            let total: u32 = self.listings.iter().map(|l| u32::from(l.star_rating)).sum();
            #[allow(clippy::cast_precision_loss)] // listing counts are tiny
            let avg = f64::from(total) / self.listings.len() as f64;
            (avg * 10.0).round() / 10.0
        };
        DashboardStats {
            listings: self.listings.len(),
            room_types,
            available_rooms,
            average_rating,
        }
    }

    /// Delete a listing the host owns.
    ///
    /// Deletion is two-step: an unconfirmed call fails locally and never
    /// reaches the network. A confirmed call issues the DELETE, removes
    /// the listing from the local collection without re-fetching, and
    /// returns the server's cascade receipt. Dependent bookings are
    /// cancelled server-side; the client only reports the count.
    ///
    /// # Errors
    ///
    /// [`ValidationError::DeleteNotConfirmed`] when `confirmed` is false;
    /// otherwise network, API, or parsing errors.
    pub async fn delete_listing(
        &mut self,
        session: &Session,
        id: &str,
        confirmed: bool,
    ) -> Result<DeleteReceipt> {
        if !confirmed {
            return Err(ValidationError::DeleteNotConfirmed.into());
        }
        let receipt: DeleteReceipt = self
            .gateway
            .delete(
                &self.gateway.config().listing_url(id),
                Some(session.token()),
            )
            .await?;
        self.listings.retain(|listing| listing.id != id);
        tracing::info!(
            listing_id = %id,
            cancelled_bookings = receipt.cancelled_bookings,
            "listing deleted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_notice_mentions_cascade_count() {
        let receipt = DeleteReceipt {
            cancelled_bookings: 3,
            hotel_name: "Grand Hotel".to_string(),
        };
        assert_eq!(
            receipt.notice(),
            "Hotel \"Grand Hotel\" deleted successfully! 3 booking(s) were \
             automatically cancelled and guests have been notified."
        );

        let clean = DeleteReceipt {
            cancelled_bookings: 0,
            hotel_name: "Grand Hotel".to_string(),
        };
        assert_eq!(clean.notice(), "Hotel \"Grand Hotel\" deleted successfully!");
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_receipt_defaults_for_sparse_bodies() {
        let receipt: DeleteReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt.cancelled_bookings, 0);
        assert_eq!(receipt.hotel_name, "");
    }
}
