//! Booking types and the booking-intent draft.

use crate::error::ValidationError;
use crate::user::User;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Tag prefixing every system-generated `specialRequests` annotation.
pub const SYSTEM_MESSAGE_TAG: &str = "[SYSTEM MESSAGE]";

/// Marker the backend writes into `specialRequests` when it cascade-cancels
/// a booking because its listing was deleted.
///
/// String matching on this literal is a wire contract: the backend must emit
/// exactly this text for the client to recognize cascade-cancellations.
pub const LISTING_REMOVED_MARKER: &str = "[SYSTEM MESSAGE] This booking was automatically \
     cancelled because the hotel has been removed by the host.";

/// Booking status lifecycle.
///
/// Transitions observed in practice are monotonic: `pending` moves to
/// `confirmed` or `cancelled`, and neither of those is ever seen to move
/// again. The client reflects server state; it does not enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting host adjudication.
    Pending,
    /// Confirmed by the host.
    Confirmed,
    /// Cancelled by the host or by the system.
    Cancelled,
}

impl BookingStatus {
    /// Lowercase wire label, as sent in status update requests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a cancelled booking was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancellation {
    /// The listing was deleted and the server cascade-cancelled the booking.
    ListingRemoved,
    /// An ordinary host- or system-side cancellation.
    Manual,
}

/// Reference to the listing a booking is against. Populated on the guest
/// bookings endpoint, a bare id elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingRef {
    /// Populated listing document, reduced to its display fields.
    Embedded(Box<ListingSummary>),
    /// Bare listing id.
    Id(String),
}

impl ListingRef {
    /// Resolve the reference to its listing id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Embedded(summary) => &summary.id,
            Self::Id(id) => id,
        }
    }
}

/// Display fields of a listing embedded in a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    /// Opaque listing identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Hotel name.
    #[serde(default)]
    pub hotel_name: String,
    /// Legacy display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Image paths or absolute URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ListingSummary {
    /// Preferred display name: legacy title when present, else hotel name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.hotel_name)
    }
}

/// Reference to the guest who made a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GuestRef {
    /// Populated user document.
    Embedded(User),
    /// Bare user id.
    Id(String),
}

/// A guest's reservation of a room type for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque booking identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Listing booked against.
    #[serde(default)]
    pub listing: Option<ListingRef>,

    /// Guest who made the booking.
    #[serde(default)]
    pub user: Option<GuestRef>,

    /// Room type label booked.
    #[serde(default)]
    pub room_type: String,

    /// Check-in instant.
    pub check_in: DateTime<Utc>,

    /// Check-out instant. Always on or after check-in.
    pub check_out: DateTime<Utc>,

    /// Guest count.
    pub guests: u32,

    /// Total price, as computed server-side.
    #[serde(default)]
    pub total_price: f64,

    /// Current status.
    pub status: BookingStatus,

    /// Guest-entered special requests, possibly carrying a system marker.
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl Booking {
    /// Number of nights, rounded up to whole nights.
    #[must_use]
    pub fn nights(&self) -> i64 {
        let seconds = (self.check_out - self.check_in).num_seconds().max(0);
        // `i64::div_ceil` is unstable (`int_roundings`); `seconds` is
        // non-negative, so the unsigned equivalent is identical.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
        {
            (seconds as u64).div_ceil(86_400) as i64
        }
    }

    /// Whether the UI offers the confirm/cancel transition for this booking.
    ///
    /// Only pending bookings are adjudicable; this is a client-imposed
    /// restriction, not a modeled state machine.
    #[must_use]
    pub const fn adjudicable(&self) -> bool {
        matches!(self.status, BookingStatus::Pending)
    }

    /// Structured cancellation reason, derived from status and the system
    /// marker in `specialRequests`. `None` for non-cancelled bookings.
    #[must_use]
    pub fn cancellation(&self) -> Option<Cancellation> {
        if self.status != BookingStatus::Cancelled {
            return None;
        }
        let removed = self
            .special_requests
            .as_deref()
            .is_some_and(|text| text.contains(LISTING_REMOVED_MARKER));
        Some(if removed {
            Cancellation::ListingRemoved
        } else {
            Cancellation::Manual
        })
    }

    /// Special requests suitable for the ordinary display surface.
    ///
    /// System-generated annotations are hidden here; they surface through
    /// [`Booking::cancellation`] instead.
    #[must_use]
    pub fn displayable_special_requests(&self) -> Option<&str> {
        self.special_requests
            .as_deref()
            .filter(|text| !text.is_empty() && !text.contains(SYSTEM_MESSAGE_TAG))
    }
}

/// A booking intent as collected by the listing page, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// Listing to book.
    pub listing_id: String,
    /// Selected room type label, when one was chosen.
    pub room_type: Option<String>,
    /// Check-in date, when chosen.
    pub check_in: Option<NaiveDate>,
    /// Check-out date, when chosen.
    pub check_out: Option<NaiveDate>,
    /// Guest count.
    pub guests: u32,
}

impl BookingDraft {
    /// Fresh draft for a listing, with the form's default single guest.
    #[must_use]
    pub fn new(listing_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
            room_type: None,
            check_in: None,
            check_out: None,
            guests: 1,
        }
    }

    /// Check submission preconditions and produce the wire request.
    ///
    /// No date-range or availability validation happens here; that is
    /// entirely server-side.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingDates`] when either date is absent,
    /// [`ValidationError::MissingRoomType`] when no room type is selected.
    pub fn validate(&self) -> Result<BookingRequest, ValidationError> {
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(ValidationError::MissingDates);
        };
        let Some(room_type) = self.room_type.clone() else {
            return Err(ValidationError::MissingRoomType);
        };
        Ok(BookingRequest {
            listing_id: self.listing_id.clone(),
            room_type,
            check_in,
            check_out,
            guests: self.guests,
        })
    }
}

/// Wire payload for `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Listing to book.
    pub listing_id: String,
    /// Room type label.
    pub room_type: String,
    /// Check-in date.
    pub check_in: NaiveDate,
    /// Check-out date.
    pub check_out: NaiveDate,
    /// Guest count.
    pub guests: u32,
}
