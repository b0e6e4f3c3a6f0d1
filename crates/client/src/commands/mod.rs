//! Commands module - CLI command implementations.
//!
//! Each command group is implemented in its own module; all of them share
//! one [`App`] built from the client configuration.

pub mod account;
pub mod admin;
pub mod bookings;
pub mod courses;
pub mod range;

use std::sync::Arc;

use common::{ClientConfig, ClientResult};

use crate::auth::AuthContext;
use crate::http::HttpClient;
use crate::services::Services;
use crate::session::{FileSessionStore, SessionManager};

/// Services and auth context over the file-backed session
pub struct App {
    pub services: Services,
    pub auth: AuthContext,
}

impl App {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let store = FileSessionStore::new(config.session_file.clone());
        let session = Arc::new(SessionManager::new(Arc::new(store)));
        let http = HttpClient::new(config, session)?;

        let services = Services::new(http);
        let auth = AuthContext::new(services.auth.clone());
        Ok(Self { services, auth })
    }
}
