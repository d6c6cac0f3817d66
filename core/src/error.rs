//! Client-side validation errors.
//!
//! These are the precondition failures that block a submission before any
//! network call is made. Display strings are user-facing and match what the
//! booking forms surface.

use thiserror::Error;

/// A client-side precondition failure. Never reaches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Booking attempted without an authenticated session.
    #[error("Please login to book")]
    NotAuthenticated,

    /// Check-in or check-out date is missing from the booking draft.
    #[error("Please select check-in and check-out dates")]
    MissingDates,

    /// No room type selected for the booking draft.
    #[error("Please select a room type")]
    MissingRoomType,

    /// A required listing field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A listing draft was submitted without any image.
    #[error("At least one image is required")]
    NoImages,

    /// A room type row in the listing draft is invalid.
    #[error("Room type {index}: {issue}")]
    InvalidRoomType {
        /// 1-based position of the offending room type row.
        index: usize,
        /// What is wrong with it.
        issue: RoomTypeIssue,
    },

    /// Listing deletion was attempted without explicit confirmation.
    #[error("Deletion was not confirmed")]
    DeleteNotConfirmed,

    /// The referenced listing is not part of the loaded collection.
    #[error("Listing not found")]
    ListingNotFound,

    /// The current user does not own the listing they tried to act on.
    ///
    /// This is a UX guard only. The authoritative ownership check happens
    /// server-side; bypassing this guard must still be rejected there.
    #[error("You are not authorized to update bookings for this hotel")]
    NotListingOwner,
}

/// Why a room type row failed validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RoomTypeIssue {
    /// The type label is empty.
    #[error("Type is required")]
    MissingType,

    /// Price is zero or negative.
    #[error("Valid price is required")]
    InvalidPrice,

    /// Capacity is zero.
    #[error("Valid capacity is required")]
    InvalidCapacity,

    /// Available room count is negative.
    #[error("Available rooms cannot be negative")]
    NegativeAvailability,
}
