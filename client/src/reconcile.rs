//! Host booking reconciliation.
//!
//! Derives, per host, which listings they own and what bookings stand
//! against each. The server's `host=` filter is treated as a hint:
//! ownership is independently re-derived client-side before anything is
//! shown or mutated. Per-listing booking fetches run concurrently, and a
//! failure for one listing degrades to an empty booking list for that
//! listing only.

use crate::error::Result;
use crate::gateway::ApiGateway;
use crate::session::Session;
use futures::future::join_all;
use serde::Serialize;
use stayfinder_core::{Booking, BookingStatus, Listing, ValidationError};

/// One owned listing with its bookings.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingBookings {
    /// The owned listing.
    pub listing: Listing,
    /// Its bookings; empty when the per-listing fetch failed.
    pub bookings: Vec<Booking>,
}

/// Reconciliation result: `(listing, bookings)` pairs in listing fetch
/// order. Order is not guaranteed stable across reloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingBoard {
    entries: Vec<ListingBookings>,
}

impl BookingBoard {
    /// The `(listing, bookings)` pairs.
    #[must_use]
    pub fn entries(&self) -> &[ListingBookings] {
        &self.entries
    }

    /// Whether the host owns no listings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bookings across all owned listings. Drives the empty-state
    /// distinction between "no properties" and "no bookings yet".
    #[must_use]
    pub fn total_bookings(&self) -> usize {
        self.entries.iter().map(|entry| entry.bookings.len()).sum()
    }

    fn find_listing(&self, listing_id: &str) -> Option<&Listing> {
        self.entries
            .iter()
            .map(|entry| &entry.listing)
            .find(|listing| listing.id == listing_id)
    }

    fn apply_status(&mut self, booking_id: &str, status: BookingStatus) {
        for entry in &mut self.entries {
            for booking in &mut entry.bookings {
                if booking.id == booking_id {
                    booking.status = status;
                }
            }
        }
    }
}

/// Wire payload for `PUT /api/bookings/:id/status`.
#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: BookingStatus,
}

/// Loads the reconciliation view and adjudicates bookings against it.
#[derive(Debug, Clone)]
pub struct HostBookingService {
    gateway: ApiGateway,
}

impl HostBookingService {
    /// Service over a gateway.
    #[must_use]
    pub const fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Build the host's booking board.
    ///
    /// Fetches the host's listings (server-filtered by `host=`, then
    /// re-filtered client-side by resolved owner id, which defends against
    /// the server returning a superset), then fetches each retained
    /// listing's bookings concurrently and joins the results in listing
    /// fetch order.
    ///
    /// # Errors
    ///
    /// Returns errors when the listing fetch itself fails. Per-listing
    /// booking fetch failures are isolated, not fatal: that listing just
    /// shows no bookings.
    pub async fn load(&self, session: &Session) -> Result<BookingBoard> {
        let user_id = session.user().id.clone();
        let url = self.gateway.config().listings_for_host_url(&user_id);
        let listings: Vec<Listing> = self.gateway.get(&url, None).await?;

        let own_listings: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| {
                let is_owner = listing.host.id() == user_id;
                if !is_owner {
                    tracing::debug!(
                        listing_id = %listing.id,
                        listing_host = %listing.host.id(),
                        user_id = %user_id,
                        "server host filter returned a listing this user does not own"
                    );
                }
                is_owner
            })
            .collect();

        let fetches = own_listings.into_iter().map(|listing| async move {
            let url = self.gateway.config().listing_bookings_url(&listing.id);
            match self
                .gateway
                .get::<Vec<Booking>>(&url, Some(session.token()))
                .await
            {
                Ok(bookings) => ListingBookings { listing, bookings },
                Err(e) => {
                    tracing::warn!(
                        listing_id = %listing.id,
                        error = %e,
                        "booking fetch failed for one listing, showing it empty"
                    );
                    ListingBookings {
                        listing,
                        bookings: Vec::new(),
                    }
                }
            }
        });
        let entries = join_all(fetches).await;

        tracing::debug!(
            listings = entries.len(),
            bookings = entries.iter().map(|e| e.bookings.len()).sum::<usize>(),
            "reconciliation loaded"
        );
        Ok(BookingBoard { entries })
    }

    /// Transition a booking's status on behalf of the host.
    ///
    /// Two local checks run before any network call: the listing must be
    /// present in the loaded board, and the session user must own it (the
    /// same owner-id resolution used when loading). The ownership check is
    /// a UX guard only; the authoritative check is server-side. On a
    /// successful server update the new status is applied to the matching
    /// booking in the board optimistically, with no re-fetch. On failure
    /// the board is left unchanged.
    ///
    /// # Errors
    ///
    /// [`ValidationError::ListingNotFound`] or
    /// [`ValidationError::NotListingOwner`] locally; otherwise network,
    /// API, or parsing errors from the update call.
    pub async fn update_status(
        &self,
        session: &Session,
        board: &mut BookingBoard,
        booking_id: &str,
        new_status: BookingStatus,
        listing_id: &str,
    ) -> Result<Booking> {
        let Some(listing) = board.find_listing(listing_id) else {
            return Err(ValidationError::ListingNotFound.into());
        };

        let listing_host_id = listing.host.id();
        if listing_host_id != session.user().id {
            tracing::debug!(
                listing_id = %listing_id,
                listing_host = %listing_host_id,
                user_id = %session.user().id,
                "client-side authorization failed for status update"
            );
            return Err(ValidationError::NotListingOwner.into());
        }

        tracing::debug!(
            booking_id = %booking_id,
            new_status = %new_status,
            listing_id = %listing_id,
            "updating booking status"
        );
        let updated: Booking = self
            .gateway
            .put_json(
                &self.gateway.config().booking_status_url(booking_id),
                Some(session.token()),
                &StatusUpdate { status: new_status },
            )
            .await?;

        board.apply_status(booking_id, new_status);
        Ok(updated)
    }
}
