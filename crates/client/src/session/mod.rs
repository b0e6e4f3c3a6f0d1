//! Session persistence and the session manager.

mod manager;
mod store;

pub use manager::SessionManager;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredSession};
