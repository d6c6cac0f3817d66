//! Guest-facing booking operations: intent submission and the bookings
//! view.

use crate::error::Result;
use crate::gateway::ApiGateway;
use crate::session::Session;
use stayfinder_core::{Booking, BookingDraft, ValidationError};

/// Submits booking intents and loads the guest's own bookings.
#[derive(Debug, Clone)]
pub struct BookingService {
    gateway: ApiGateway,
}

impl BookingService {
    /// Service over a gateway.
    #[must_use]
    pub const fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Submit a booking intent.
    ///
    /// Preconditions are checked before any network call, each failing fast
    /// with a distinct reason: no session, missing dates, missing room
    /// type. Date-range and availability validation is entirely
    /// server-side.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] wrapped in [`crate::Error::Validation`] for
    /// failed preconditions; otherwise network, API, or parsing errors.
    pub async fn submit(
        &self,
        session: Option<&Session>,
        draft: &BookingDraft,
    ) -> Result<Booking> {
        let Some(session) = session else {
            return Err(ValidationError::NotAuthenticated.into());
        };
        let request = draft.validate()?;

        tracing::debug!(
            listing_id = %request.listing_id,
            room_type = %request.room_type,
            guests = request.guests,
            "submitting booking"
        );
        self.gateway
            .post_json(
                &self.gateway.config().bookings_url(),
                Some(session.token()),
                &request,
            )
            .await
    }

    /// Load the authenticated user's own bookings.
    ///
    /// Deliberate swallow-all-errors policy: any failure, including a
    /// missing session, resolves silently to an empty set. Failures are
    /// logged, never surfaced.
    pub async fn my_bookings(&self, session: Option<&Session>) -> Vec<Booking> {
        let Some(session) = session else {
            return Vec::new();
        };
        match self
            .gateway
            .get(&self.gateway.config().bookings_url(), Some(session.token()))
            .await
        {
            Ok(bookings) => bookings,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load guest bookings, showing none");
                Vec::new()
            }
        }
    }
}
