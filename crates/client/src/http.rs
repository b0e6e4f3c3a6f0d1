//! HTTP client for the golf REST API.
//!
//! Every request returns an [`ApiResponse`] envelope; transport failures,
//! timeouts and non-2xx answers are folded into `success: false` rather than
//! surfaced as errors.

use std::sync::Arc;

use reqwest::{header, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use common::{normalize_envelope, ApiResponse, ClientConfig, ClientError, ClientResult, FailureCause};
use domain::{AuthResponse, RefreshRequest, AUTH_PATH_FRAGMENT, BEARER_TOKEN_PREFIX};

use crate::session::SessionManager;

const REFRESH_ENDPOINT: &str = "/auth/refresh";

/// HTTP client bound to one backend and one session
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<ClientConfig>,
    session: Arc<SessionManager>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: ClientConfig, session: Arc<SessionManager>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: Arc::new(config),
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Store a bearer token for subsequent requests
    pub async fn set_auth_token(&self, token: impl Into<String>) -> ClientResult<()> {
        self.session.set_token(token).await
    }

    /// Forget the stored session
    pub async fn clear_auth_token(&self) -> ClientResult<()> {
        self.session.clear().await
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::GET, endpoint, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match Self::encode(body) {
            Ok(body) => self.request(Method::POST, endpoint, Some(body)).await,
            Err(failure) => failure,
        }
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::POST, endpoint, None).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match Self::encode(body) {
            Ok(body) => self.request(Method::PUT, endpoint, Some(body)).await,
            Err(failure) => failure,
        }
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match Self::encode(body) {
            Ok(body) => self.request(Method::PATCH, endpoint, Some(body)).await,
            Err(failure) => failure,
        }
    }

    /// Make a PATCH request without body
    pub async fn patch_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::PATCH, endpoint, None).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::DELETE, endpoint, None).await
    }

    fn encode<T, B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiResponse<T>> {
        serde_json::to_value(body).map_err(|e| {
            ApiResponse::failure(format!("Invalid request body: {}", e)).with_cause(FailureCause::Decode)
        })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ApiResponse<T> {
        let response = self.send(method.clone(), endpoint, body.as_ref()).await;

        let response = if response.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
            && !is_auth_endpoint(endpoint)
        {
            self.retry_after_refresh(method, endpoint, body.as_ref(), response)
                .await
        } else {
            response
        };

        response.decode()
    }

    /// Perform one round-trip and normalize the answer
    async fn send(&self, method: Method, endpoint: &str, body: Option<&Value>) -> ApiResponse<Value> {
        let url = self.config.url_for(endpoint);
        debug!(method = %method, endpoint, "API request");

        let mut request = self.client.request(method, &url);
        if let Some(token) = self.session.token().await {
            request = request.header(
                header::AUTHORIZATION,
                format!("{}{}", BEARER_TOKEN_PREFIX, token),
            );
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => Self::handle_response(endpoint, response).await,
            Err(e) => Self::transport_failure(endpoint, e),
        }
    }

    /// Handle the HTTP response
    async fn handle_response(endpoint: &str, response: Response) -> ApiResponse<Value> {
        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return Self::transport_failure(endpoint, e),
        };

        let body = if text.trim().is_empty() {
            Some(Value::Null)
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };

        if !status.is_success() {
            let message = body
                .as_ref()
                .and_then(|b| b.get("error").or_else(|| b.get("message")))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| status_line(status));
            debug!(endpoint, status = status.as_u16(), "API request failed");
            return ApiResponse::failure(message).with_cause(FailureCause::Status(status.as_u16()));
        }

        match body {
            Some(body) => normalize_envelope(endpoint, body),
            None => ApiResponse::failure("Invalid response: body is not JSON")
                .with_cause(FailureCause::Decode),
        }
    }

    fn transport_failure(endpoint: &str, err: reqwest::Error) -> ApiResponse<Value> {
        if err.is_timeout() {
            warn!(endpoint, "API request timed out");
            ApiResponse::failure(ClientError::Timeout.to_string()).with_cause(FailureCause::Timeout)
        } else {
            warn!(endpoint, error = %err, "API request failed");
            ApiResponse::failure(err.to_string()).with_cause(FailureCause::Network)
        }
    }

    /// Refresh once and retry once; a failed refresh or a second 401 ends the session
    async fn retry_after_refresh(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        unauthorized: ApiResponse<Value>,
    ) -> ApiResponse<Value> {
        let Some(refresh_token) = self.session.refresh_token().await else {
            return unauthorized;
        };

        if !self.refresh_session(refresh_token).await {
            self.end_session().await;
            return unauthorized;
        }

        let retried = self.send(method, endpoint, body).await;
        if retried.status() == Some(StatusCode::UNAUTHORIZED.as_u16()) {
            warn!(endpoint, "Still unauthorized after token refresh");
            self.end_session().await;
        }
        retried
    }

    async fn refresh_session(&self, refresh_token: String) -> bool {
        debug!("Refreshing access token");
        let request = RefreshRequest { refresh_token };
        let body = match serde_json::to_value(&request) {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Could not encode refresh request");
                return false;
            }
        };

        let response: ApiResponse<AuthResponse> = self
            .send(Method::POST, REFRESH_ENDPOINT, Some(&body))
            .await
            .decode();

        let auth = match response.into_result() {
            Ok(auth) => auth,
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                return false;
            }
        };
        let Some(token) = auth.token else {
            warn!("Token refresh response did not include a token");
            return false;
        };

        if let Err(e) = self.session.update_tokens(token, auth.refresh_token).await {
            warn!(error = %e, "Refreshed token could not be persisted");
        }
        if let Some(user) = auth.user {
            if let Err(e) = self.session.set_user(user).await {
                warn!(error = %e, "Refreshed user could not be persisted");
            }
        }
        true
    }

    async fn end_session(&self) {
        warn!("Clearing session after failed re-authentication");
        if let Err(e) = self.session.clear().await {
            warn!(error = %e, "Session could not be cleared");
        }
    }
}

pub(crate) fn is_auth_endpoint(endpoint: &str) -> bool {
    endpoint.contains(AUTH_PATH_FRAGMENT)
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}
