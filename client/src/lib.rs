//! # StayFinder Client
//!
//! Typed client for the StayFinder booking backend: session lifecycle,
//! listing directory, booking submission, the guest bookings view, host
//! listing management, and host booking reconciliation.
//!
//! All persistence, validation, and business rules (availability, pricing,
//! cancellation cascades) live server-side; this crate is the presentation
//! layer's data plane. Visual rendering and routing are out of scope.
//!
//! ## Example
//!
//! ```no_run
//! use stayfinder_client::{ApiGateway, BookingService, MemoryTokenStore, SessionController};
//! use stayfinder_client::session::Credentials;
//! use stayfinder_core::BookingDraft;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = ApiGateway::from_env();
//!     let mut auth = SessionController::new(gateway.clone(), MemoryTokenStore::new());
//!     auth.login(&Credentials {
//!         email: "guest@example.com".to_string(),
//!         password: "hunter2".to_string(),
//!     })
//!     .await?;
//!
//!     let bookings = BookingService::new(gateway);
//!     let mut draft = BookingDraft::new("listing-id");
//!     draft.room_type = Some("Standard".to_string());
//!     draft.check_in = NaiveDate::from_ymd_opt(2025, 6, 1);
//!     draft.check_out = NaiveDate::from_ymd_opt(2025, 6, 4);
//!
//!     let booking = bookings.submit(auth.session(), &draft).await?;
//!     println!("booked: {}", booking.id);
//!     Ok(())
//! }
//! ```

pub mod bookings;
pub mod config;
pub mod error;
pub mod gateway;
pub mod host;
pub mod listings;
pub mod reconcile;
pub mod session;

// Re-export main types for convenience
pub use bookings::BookingService;
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use gateway::ApiGateway;
pub use host::{DashboardStats, DeleteReceipt, HostDashboard, HostListingService};
pub use listings::ListingDirectory;
pub use reconcile::{BookingBoard, HostBookingService, ListingBookings};
pub use session::{
    Credentials, FsTokenStore, MemoryTokenStore, RegisterProfile, Session, SessionController,
    TokenStore,
};
