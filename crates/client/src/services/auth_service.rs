//! Authentication endpoints.

use tracing::{debug, warn};

use common::{ApiResponse, FailureCause};
use domain::{
    AuthResponse, ChangePasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    UpdateProfileRequest, User,
};

use crate::http::HttpClient;

/// Login, registration, profile and token endpoints
#[derive(Debug, Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Log in and store the returned session
    pub async fn login(&self, request: &LoginRequest) -> ApiResponse<AuthResponse> {
        let response: ApiResponse<AuthResponse> = self.http.post("/auth/login", request).await;
        if !response.success {
            return response;
        }

        match response.data.as_ref() {
            Some(auth) if auth.token.is_some() && auth.user.is_some() => {
                self.store_session(auth).await;
                response
            }
            _ => ApiResponse::failure("Invalid response: login did not return a session")
                .with_cause(FailureCause::Decode),
        }
    }

    /// Register an account; the session is stored when the backend issues a token
    pub async fn register(&self, request: &RegisterRequest) -> ApiResponse<AuthResponse> {
        let response: ApiResponse<AuthResponse> = self.http.post("/auth/register", request).await;
        if let Some(auth) = response.data.as_ref().filter(|_| response.success) {
            self.store_session(auth).await;
        }
        response
    }

    /// Current user's profile; refreshes the cached user on success
    pub async fn profile(&self) -> ApiResponse<User> {
        let response: ApiResponse<User> = self.http.get("/auth/profile").await;
        if let Some(user) = response.data.as_ref().filter(|_| response.success) {
            self.cache_user(user.clone()).await;
        }
        response
    }

    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> ApiResponse<User> {
        let response: ApiResponse<User> = self.http.put("/auth/profile", update).await;
        if let Some(user) = response.data.as_ref().filter(|_| response.success) {
            self.cache_user(user.clone()).await;
        }
        response
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResponse<MessageResponse> {
        self.http.post("/auth/change-password", request).await
    }

    /// Exchange the stored refresh token for a new access token
    pub async fn refresh(&self) -> ApiResponse<AuthResponse> {
        let Some(refresh_token) = self.http.session().refresh_token().await else {
            return ApiResponse::failure("No refresh token available");
        };

        let request = domain::RefreshRequest { refresh_token };
        let response: ApiResponse<AuthResponse> = self.http.post("/auth/refresh", &request).await;
        if let Some(auth) = response.data.as_ref().filter(|_| response.success) {
            if let Some(token) = auth.token.clone() {
                if let Err(e) = self
                    .http
                    .session()
                    .update_tokens(token, auth.refresh_token.clone())
                    .await
                {
                    warn!(error = %e, "Refreshed token could not be persisted");
                }
            }
        }
        response
    }

    /// Log out; the local session is cleared whatever the server says
    pub async fn logout(&self) -> ApiResponse<MessageResponse> {
        let response: ApiResponse<MessageResponse> = self.http.post_empty("/auth/logout").await;
        if !response.success {
            warn!(error = response.error_message(), "Server-side logout failed");
        }
        if let Err(e) = self.http.clear_auth_token().await {
            warn!(error = %e, "Session could not be cleared");
        }
        response
    }

    pub async fn is_authenticated(&self) -> bool {
        self.http.session().is_authenticated().await
    }

    /// User cached in the session, if any
    pub async fn cached_user(&self) -> Option<User> {
        self.http.session().user().await
    }

    async fn store_session(&self, auth: &AuthResponse) {
        let Some(token) = auth.token.clone() else {
            debug!("No token issued, session unchanged");
            return;
        };
        if let Err(e) = self
            .http
            .session()
            .begin(token, auth.refresh_token.clone(), auth.user.clone())
            .await
        {
            warn!(error = %e, "Session could not be persisted");
        }
    }

    async fn cache_user(&self, user: User) {
        if let Err(e) = self.http.session().set_user(user).await {
            warn!(error = %e, "User could not be cached");
        }
    }
}
