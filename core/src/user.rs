//! User identity types.

use serde::{Deserialize, Serialize};

/// An authenticated user, as returned by the auth endpoints.
///
/// The backend addresses users by Mongo-style string ids. Embedded user
/// references (for example a populated `host` field on a listing) carry
/// `_id` instead of `id`, so both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user identifier.
    #[serde(alias = "_id")]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Email address.
    #[serde(default)]
    pub email: String,

    /// Whether this user may manage listings and adjudicate bookings.
    #[serde(default)]
    pub is_host: bool,
}
