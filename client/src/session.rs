//! Session lifecycle: token persistence, restore, login, register, logout.
//!
//! There is no global mutable session. [`Session`] is an immutable snapshot
//! passed explicitly to every authenticated call; [`SessionController`] is
//! its single owner and replaces it atomically on login, register, and
//! logout.

use crate::error::{Error, Result};
use crate::gateway::ApiGateway;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use stayfinder_core::User;

/// File name the persisted token lives under. The token is the only
/// persisted client state.
const TOKEN_FILE: &str = "token";

/// Persistent storage for the single opaque session token.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn load(&self) -> std::io::Result<Option<String>>;

    /// Persist the token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn save(&self, token: &str) -> std::io::Result<()>;

    /// Remove the persisted token.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn clear(&self) -> std::io::Result<()>;
}

/// Token persistence in a state directory on disk.
#[derive(Debug, Clone)]
pub struct FsTokenStore {
    dir: PathBuf,
}

impl FsTokenStore {
    /// Store rooted at the given state directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }
}

impl TokenStore for FsTokenStore {
    fn load(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(token) => {
                let token = token.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.token_path(), token)
    }

    fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(self.token_path()) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if one had been persisted.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> std::io::Result<Option<String>> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Immutable snapshot of an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    /// The opaque session token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The authenticated user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProfile {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Whether to register as a host.
    pub is_host: bool,
}

/// `{token, user}` payload returned by login and register.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: User,
}

/// Owns the current session and its persistence.
pub struct SessionController<S: TokenStore> {
    gateway: ApiGateway,
    store: S,
    session: Option<Session>,
}

impl<S: TokenStore> SessionController<S> {
    /// Controller starting anonymous; call [`restore`](Self::restore) to
    /// pick up a persisted token.
    pub const fn new(gateway: ApiGateway, store: S) -> Self {
        Self {
            gateway,
            store,
            session: None,
        }
    }

    /// Restore a persisted session at startup.
    ///
    /// If a token is persisted, it is verified against the identity
    /// endpoint. Any verification failure treats the token as invalid:
    /// it is purged and the controller stays anonymous. A missing token
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenStore`] only when persisted storage itself
    /// cannot be read.
    pub async fn restore(&mut self) -> Result<()> {
        let token = self
            .store
            .load()
            .map_err(|e| Error::TokenStore(e.to_string()))?;
        let Some(token) = token else {
            return Ok(());
        };

        match self
            .gateway
            .get::<User>(&self.gateway.config().user_url(), Some(&token))
            .await
        {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "restored session from persisted token");
                self.session = Some(Session { token, user });
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted token rejected, purging");
                if let Err(e) = self.store.clear() {
                    tracing::warn!(error = %e, "failed to purge rejected token");
                }
                self.session = None;
            }
        }
        Ok(())
    }

    /// Log in with credentials, persisting the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] carrying the server body unchanged when the
    /// credentials are rejected, or [`Error::TokenStore`] when the token
    /// cannot be persisted.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<&User> {
        let response = self
            .gateway
            .post_json::<AuthResponse, _>(&self.gateway.config().login_url(), None, credentials)
            .await
            .map_err(into_auth_error)?;
        self.install(response)
    }

    /// Register a new account, persisting the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] carrying the server body unchanged when
    /// registration is rejected, or [`Error::TokenStore`] when the token
    /// cannot be persisted.
    pub async fn register(&mut self, profile: &RegisterProfile) -> Result<&User> {
        let response = self
            .gateway
            .post_json::<AuthResponse, _>(&self.gateway.config().register_url(), None, profile)
            .await
            .map_err(into_auth_error)?;
        self.install(response)
    }

    /// Log out: purge the persisted token and drop the session.
    ///
    /// Unconditionally synchronous; no network call is made.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted token on logout");
        }
        self.session = None;
    }

    /// The current session, when authenticated.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The current user, when authenticated.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(Session::user)
    }

    /// Whether a session is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The underlying token store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn install(&mut self, response: AuthResponse) -> Result<&User> {
        self.store
            .save(&response.token)
            .map_err(|e| Error::TokenStore(e.to_string()))?;
        let session = Session {
            token: response.token,
            user: response.user,
        };
        tracing::info!(user_id = %session.user.id, "session established");
        Ok(self.session.insert(session).user())
    }
}

/// Login/register rejections surface the server body unchanged.
fn into_auth_error(error: Error) -> Error {
    match error {
        Error::Api { body, .. } => Error::Auth { body },
        other => other,
    }
}
