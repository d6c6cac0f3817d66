//! # StayFinder Core
//!
//! Domain types and pure derived-state logic for the StayFinder booking
//! client: listings, room types, bookings, owner resolution, client-side
//! filtering, draft validation, and the multipart field-flattening scheme
//! the backend expects.
//!
//! Everything in this crate is synchronous and I/O-free. The HTTP surface
//! lives in `stayfinder-client`.

pub mod booking;
pub mod error;
pub mod filter;
pub mod listing;
pub mod multipart;
pub mod user;

// Re-export main types for convenience
pub use booking::{
    Booking, BookingDraft, BookingRequest, BookingStatus, Cancellation, GuestRef, ListingRef,
    ListingSummary, LISTING_REMOVED_MARKER, SYSTEM_MESSAGE_TAG,
};
pub use error::{RoomTypeIssue, ValidationError};
pub use filter::{cities, ListingQuery};
pub use listing::{
    ContactInfo, Currency, ImageAttachment, Listing, ListingDraft, Owner, Policies, RoomType,
    RoomTypeDraft,
};
pub use multipart::flatten_fields;
pub use user::User;
