//! Uniform `{success, data, error}` response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

const AUTH_PATH_FRAGMENT: &str = domain::AUTH_PATH_FRAGMENT;

/// Why an envelope reports failure; not part of the wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// Server answered with a non-2xx status
    Status(u16),
    Timeout,
    Network,
    /// Body could not be decoded into the expected type
    Decode,
}

/// Standard API response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    pub cause: Option<FailureCause>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            cause: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            cause: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_cause(mut self, cause: FailureCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// HTTP status of a failed response, when there was one
    pub fn status(&self) -> Option<u16> {
        match self.cause {
            Some(FailureCause::Status(code)) => Some(code),
            _ => None,
        }
    }

    /// Error text for display, falling back to the message
    pub fn error_message(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Unknown error")
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            message: self.message,
            cause: self.cause,
        }
    }

    /// Error equivalent of a failed envelope
    pub fn to_error(&self) -> ClientError {
        let message = self.error_message().to_string();
        match self.cause {
            Some(FailureCause::Status(code)) => ClientError::from_status(code, message),
            Some(FailureCause::Timeout) => ClientError::Timeout,
            Some(FailureCause::Network) => ClientError::Network(message),
            Some(FailureCause::Decode) => ClientError::InvalidResponse(message),
            None => ClientError::Api {
                status: 200,
                message,
            },
        }
    }

    /// Data of a successful envelope
    pub fn into_result(self) -> ClientResult<T> {
        if !self.success {
            return Err(self.to_error());
        }
        self.data
            .ok_or_else(|| ClientError::invalid_response("response contained no data"))
    }

    /// Success or failure only, ignoring any data
    pub fn into_empty_result(self) -> ClientResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(self.to_error())
        }
    }
}

impl ApiResponse<Value> {
    /// Decode the JSON payload into the caller's type
    pub fn decode<T: DeserializeOwned>(self) -> ApiResponse<T> {
        let ApiResponse {
            success,
            data,
            error,
            message,
            cause,
        } = self;

        let data = match data {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(decoded) => Some(decoded),
                Err(e) if success => {
                    return ApiResponse::failure(format!("Invalid response: {}", e))
                        .with_cause(FailureCause::Decode);
                }
                Err(_) => None,
            },
        };

        ApiResponse {
            success,
            data,
            error,
            message,
            cause,
        }
    }
}

/// Bring a parsed body into the standard envelope.
///
/// Auth endpoints always wrap their body. Any other body that is an object
/// carrying a `success` key is already an envelope and passes through;
/// everything else is wrapped as `{success: true, data: body}`.
pub fn normalize_envelope(endpoint: &str, body: Value) -> ApiResponse<Value> {
    if endpoint.contains(AUTH_PATH_FRAGMENT) {
        return ApiResponse::ok(body);
    }

    match body {
        Value::Object(mut map) if map.contains_key("success") => {
            let success = map.get("success").and_then(Value::as_bool).unwrap_or(false);
            let text = |v: Option<Value>| match v {
                Some(Value::String(s)) => Some(s),
                _ => None,
            };
            ApiResponse {
                success,
                data: map.remove("data"),
                error: text(map.remove("error")),
                message: text(map.remove("message")),
                cause: None,
            }
        }
        other => ApiResponse::ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_body_is_wrapped() {
        let body = json!([{"id": 1}]);
        let response = normalize_envelope("/public/courses", body.clone());
        assert!(response.success);
        assert_eq!(response.data, Some(body));
    }

    #[test]
    fn envelope_passes_through() {
        let response = normalize_envelope(
            "/bookings/tee-time",
            json!({"success": false, "error": "Slot taken"}),
        );
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Slot taken"));
        assert_eq!(response.data, None);
    }

    #[test]
    fn auth_endpoints_always_wrap() {
        let body = json!({"success": true, "token": "t", "user": {}});
        let response = normalize_envelope("/auth/login", body.clone());
        assert!(response.success);
        assert_eq!(response.data, Some(body));
    }

    #[test]
    fn decode_failure_becomes_failed_envelope() {
        let response = ApiResponse::ok(json!({"unexpected": true})).decode::<Vec<u32>>();
        assert!(!response.success);
        assert_eq!(response.cause, Some(FailureCause::Decode));
        assert!(matches!(response.into_result(), Err(ClientError::InvalidResponse(_))));
    }

    #[test]
    fn into_result_maps_status() {
        let response: ApiResponse<()> =
            ApiResponse::failure("Invalid credentials").with_cause(FailureCause::Status(401));
        assert_eq!(
            response.into_result(),
            Err(ClientError::Unauthorized("Invalid credentials".into()))
        );
    }

    #[test]
    fn map_keeps_metadata() {
        let response = ApiResponse::ok(2).with_message("done").map(|n| n * 10);
        assert_eq!(response.data, Some(20));
        assert_eq!(response.message.as_deref(), Some("done"));
    }
}
