//! API endpoint configuration.
//!
//! Every logical operation resolves to one fixed endpoint URL under a
//! single configurable base address.

/// Environment variable overriding the backend base address.
pub const API_URL_ENV: &str = "STAYFINDER_API_URL";

/// Default backend base address for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Placeholder shown when a listing has no image.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x200?text=Hotel+Image";

/// Resolves logical operations to endpoint URLs.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Configuration pointing at an explicit base address.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Configuration from `STAYFINDER_API_URL`, falling back to the local
    /// development default.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// The configured base address, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/auth/register`
    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/api/auth/register", self.base_url)
    }

    /// `POST /api/auth/login`
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.base_url)
    }

    /// `GET /api/auth/user`
    #[must_use]
    pub fn user_url(&self) -> String {
        format!("{}/api/auth/user", self.base_url)
    }

    /// `GET /api/listings`, `POST /api/listings`
    #[must_use]
    pub fn listings_url(&self) -> String {
        format!("{}/api/listings", self.base_url)
    }

    /// `GET /api/listings?host=<id>` — a server-side hint, not a security
    /// boundary; callers re-derive ownership client-side.
    #[must_use]
    pub fn listings_for_host_url(&self, host_id: &str) -> String {
        format!("{}/api/listings?host={host_id}", self.base_url)
    }

    /// `GET`/`PUT`/`DELETE /api/listings/:id`
    #[must_use]
    pub fn listing_url(&self, id: &str) -> String {
        format!("{}/api/listings/{id}", self.base_url)
    }

    /// `GET /api/bookings`, `POST /api/bookings`
    #[must_use]
    pub fn bookings_url(&self) -> String {
        format!("{}/api/bookings", self.base_url)
    }

    /// `GET /api/bookings/listing/:id`
    #[must_use]
    pub fn listing_bookings_url(&self, listing_id: &str) -> String {
        format!("{}/api/bookings/listing/{listing_id}", self.base_url)
    }

    /// `PUT /api/bookings/:id/status`
    #[must_use]
    pub fn booking_status_url(&self, booking_id: &str) -> String {
        format!("{}/api/bookings/{booking_id}/status", self.base_url)
    }

    /// Resolve a stored image path to a fetchable URL.
    ///
    /// Absolute `http(s)` URLs pass through; stored paths are served under
    /// `/uploads/` with any leading `uploads/` segment stripped first; an
    /// empty path resolves to the placeholder image.
    #[must_use]
    pub fn image_url(&self, path: &str) -> String {
        if path.is_empty() {
            return PLACEHOLDER_IMAGE.to_string();
        }
        if path.starts_with("http") {
            return path.to_string();
        }
        let path = path.strip_prefix("uploads/").unwrap_or(path);
        format!("{}/uploads/{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
