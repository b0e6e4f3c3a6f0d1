//! Common utilities shared by the client crates.
//!
//! This crate provides:
//! - Unified client error handling
//! - The `{success, data, error}` response envelope
//! - Client configuration

pub mod config;
pub mod error;
pub mod response;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use response::{normalize_envelope, ApiResponse, FailureCause};
