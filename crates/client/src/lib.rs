//! Golf client - typed access to the golf club REST API
//!
//! # Layers
//!
//! - **http**: request/response plumbing, bearer auth and token refresh
//! - **session**: the persisted session and its manager
//! - **services**: one wrapper per backend resource
//! - **auth**: the current user and the auth operations
//! - **pages**: guarded page view-models (sign-in, registration, dashboards)
//! - **cli** / **commands**: the `golf` binary
//!
//! # CLI Usage
//!
//! ```bash
//! golf login --email ann@club.test --password fairway123
//! golf dashboard
//! golf book-tee-time --course 3 --date 2026-05-02 --time 08:40 --players 2
//! golf admin users --role member
//! ```

pub mod auth;
pub mod cli;
pub mod commands;
pub mod http;
pub mod pages;
pub mod services;
pub mod session;

pub use auth::{AuthContext, AuthPhase, Registrar};
pub use http::HttpClient;
pub use services::Services;
pub use session::{FileSessionStore, MemorySessionStore, SessionManager, SessionStore, StoredSession};

#[cfg(any(test, feature = "test-utils"))]
pub use auth::MockRegistrar;
