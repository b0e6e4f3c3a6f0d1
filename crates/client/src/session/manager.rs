//! In-memory session with write-through persistence.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use common::ClientResult;
use domain::User;

use super::store::{MemorySessionStore, SessionStore, StoredSession};

/// Sole owner of the token lifecycle.
///
/// The session is restored from the store once, at construction. Every
/// mutation updates the in-memory copy first and then writes it through, so a
/// failing store never leaves the process with stale credentials.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    state: RwLock<Option<StoredSession>>,
}

impl SessionManager {
    /// Create a manager and restore any persisted session
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let restored = match store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session");
                None
            }
        };
        debug!(authenticated = restored.is_some(), "Session restored");

        Self {
            store,
            state: RwLock::new(restored),
        }
    }

    /// Manager backed by a process-local store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    pub async fn snapshot(&self) -> Option<StoredSession> {
        self.state.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.as_ref().map(|s| s.token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.state
            .read()
            .await
            .as_ref()
            .and_then(|s| s.refresh_token.clone())
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.as_ref().and_then(|s| s.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }

    /// Start a new session, replacing whatever was stored
    pub async fn begin(
        &self,
        token: String,
        refresh_token: Option<String>,
        user: Option<User>,
    ) -> ClientResult<()> {
        let session = StoredSession {
            token,
            refresh_token,
            user,
        };
        let mut state = self.state.write().await;
        *state = Some(session.clone());
        self.store.save(&session)
    }

    /// Swap in new tokens, keeping the user and, when none is given, the old refresh token
    pub async fn update_tokens(&self, token: String, refresh_token: Option<String>) -> ClientResult<()> {
        let mut state = self.state.write().await;
        let session = match state.take() {
            Some(mut current) => {
                current.token = token;
                if refresh_token.is_some() {
                    current.refresh_token = refresh_token;
                }
                current
            }
            None => StoredSession {
                token,
                refresh_token,
                user: None,
            },
        };
        *state = Some(session.clone());
        self.store.save(&session)
    }

    /// Set the bearer token only
    pub async fn set_token(&self, token: impl Into<String>) -> ClientResult<()> {
        self.update_tokens(token.into(), None).await
    }

    /// Replace the cached user; ignored when no session is active
    pub async fn set_user(&self, user: User) -> ClientResult<()> {
        let mut state = self.state.write().await;
        let Some(session) = state.as_mut() else {
            debug!("No active session, user not cached");
            return Ok(());
        };
        session.user = Some(user);
        let session = session.clone();
        self.store.save(&session)
    }

    /// Drop the session from memory and from the store
    pub async fn clear(&self) -> ClientResult<()> {
        let mut state = self.state.write().await;
        *state = None;
        self.store.clear()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}
