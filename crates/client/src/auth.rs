//! Process-wide authentication state.
//!
//! [`AuthContext`] resolves the current user once at start-up and then tracks
//! it through login, registration, profile updates and logout. Failures are
//! returned as [`ClientError`] so callers can show the message.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use validator::Validate;

use common::{ClientError, ClientResult};
use domain::{dashboard_url, LoginRequest, RegisterRequest, UpdateProfileRequest, User};

use crate::services::AuthService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Whether the initial session check has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Loading,
    Resolved,
}

#[derive(Debug)]
struct AuthState {
    user: Option<User>,
    phase: AuthPhase,
}

/// Account creation seam used by the registration page
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Create a member account and sign it in
    async fn register(&self, request: RegisterRequest) -> ClientResult<User>;
}

/// Current user plus the auth operations that change it
#[derive(Debug)]
pub struct AuthContext {
    auth: AuthService,
    state: RwLock<AuthState>,
}

impl AuthContext {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            state: RwLock::new(AuthState {
                user: None,
                phase: AuthPhase::Loading,
            }),
        }
    }

    /// Resolve the session: fetch the profile when a token is stored.
    ///
    /// A failed profile fetch leaves the context anonymous.
    pub async fn initialize(&self) {
        let user = if self.auth.is_authenticated().await {
            let response = self.auth.profile().await;
            if response.success {
                response.data
            } else {
                debug!(error = response.error_message(), "Stored session is not usable");
                None
            }
        } else {
            None
        };

        let mut state = self.state.write().await;
        state.user = user;
        state.phase = AuthPhase::Resolved;
    }

    /// Sign in; `expected_role` is the sign-in tab the user picked
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        expected_role: Option<&str>,
    ) -> ClientResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            expected_role: expected_role.map(str::to_string),
        };

        let auth = self.auth.login(&request).await.into_result()?;
        let user = auth
            .user
            .ok_or_else(|| ClientError::invalid_response("login did not return a user"))?;

        info!(user_id = %user.id, role = %user.role, "Signed in");
        self.set_user(Some(user.clone())).await;
        Ok(user)
    }

    /// Validate and submit a registration.
    ///
    /// The returned user becomes the current user; the session is only
    /// persisted when the backend issued a token.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<User> {
        request
            .validate()
            .map_err(|e| ClientError::validation(format_validation_errors(&e)))?;

        let auth = self.auth.register(request).await.into_result()?;
        let user = auth
            .user
            .ok_or_else(|| ClientError::invalid_response("registration did not return a user"))?;

        info!(user_id = %user.id, signed_in = auth.token.is_some(), "Registered");
        self.set_user(Some(user.clone())).await;
        Ok(user)
    }

    /// Sign out; local state is cleared even when the server call fails
    pub async fn logout(&self) -> ClientResult<()> {
        let response = self.auth.logout().await;
        self.set_user(None).await;
        if !response.success {
            warn!(error = response.error_message(), "Logged out locally only");
        }
        Ok(())
    }

    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> ClientResult<User> {
        let user = self.auth.update_profile(update).await.into_result()?;
        self.set_user(Some(user.clone())).await;
        Ok(user)
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn phase(&self) -> AuthPhase {
        self.state.read().await.phase
    }

    pub async fn is_loading(&self) -> bool {
        self.phase().await == AuthPhase::Loading
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.check(User::is_admin).await
    }

    pub async fn is_member(&self) -> bool {
        self.check(User::is_member).await
    }

    pub async fn is_super_admin(&self) -> bool {
        self.check(User::is_super_admin).await
    }

    /// Dashboard route for the current user, if signed in
    pub async fn dashboard_url(&self) -> Option<&'static str> {
        self.state.read().await.user.as_ref().map(dashboard_url)
    }

    async fn check(&self, predicate: impl Fn(&User) -> bool) -> bool {
        self.state.read().await.user.as_ref().is_some_and(predicate)
    }

    async fn set_user(&self, user: Option<User>) {
        let mut state = self.state.write().await;
        state.user = user;
        state.phase = AuthPhase::Resolved;
    }
}

#[async_trait]
impl Registrar for AuthContext {
    async fn register(&self, request: RegisterRequest) -> ClientResult<User> {
        AuthContext::register(self, &request).await
    }
}

/// Join field messages in field order
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use common::ClientConfig;
    use domain::UserRole;
    use tokio_test::assert_ok;

    use super::*;
    use crate::http::HttpClient;
    use crate::session::{MemorySessionStore, SessionManager, StoredSession};

    fn context_with(session: SessionManager) -> AuthContext {
        // Nothing listens on port 9; any request fails fast
        let config = ClientConfig::default().with_api_url("http://127.0.0.1:9");
        let http = HttpClient::new(config, Arc::new(session)).unwrap();
        AuthContext::new(AuthService::new(http))
    }

    #[tokio::test]
    async fn starts_loading_and_resolves_anonymous_without_token() {
        let ctx = context_with(SessionManager::in_memory());
        assert!(ctx.is_loading().await);

        ctx.initialize().await;

        assert_eq!(ctx.phase().await, AuthPhase::Resolved);
        assert!(!ctx.is_authenticated().await);
        assert_eq!(ctx.dashboard_url().await, None);
    }

    #[tokio::test]
    async fn failed_profile_fetch_resolves_anonymous() {
        let user = User::new("1", "a@b.co", "Ann", UserRole::Member);
        let session = StoredSession {
            user: Some(user),
            ..StoredSession::new("tok")
        };
        let store = MemorySessionStore::with_session(session);
        let ctx = context_with(SessionManager::new(Arc::new(store)));

        ctx.initialize().await;

        assert!(!ctx.is_loading().await);
        assert!(!ctx.is_authenticated().await);
    }

    #[tokio::test]
    async fn register_rejects_invalid_payload_before_any_request() {
        let ctx = context_with(SessionManager::in_memory());
        let request = RegisterRequest {
            name: "Ann".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            role: Some(UserRole::Member),
            phone: None,
            address: None,
            date_of_birth: None,
            membership_type: None,
        };

        let err = ctx.register(&request).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Validation(
                "Invalid email format, Password must be at least 8 characters".to_string()
            )
        );
    }

    #[tokio::test]
    async fn logout_succeeds_when_server_is_unreachable() {
        let ctx = context_with(SessionManager::in_memory());
        assert_ok!(ctx.logout().await);
        assert!(!ctx.is_authenticated().await);
        assert!(!ctx.is_admin().await);
    }
}
