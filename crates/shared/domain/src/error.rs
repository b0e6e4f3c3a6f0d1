//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("{0}")]
    Validation(String),

    /// Role value outside the canonical set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Membership tier outside the canonical set
    #[error("Unknown membership tier: {0}")]
    UnknownMembershipTier(String),

    /// Enum value the backend sent that this client does not know
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an unknown-value error for the named enum
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        DomainError::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
