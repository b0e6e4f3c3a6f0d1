//! Persistent session storage.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use common::{ClientError, ClientResult};
use domain::User;

/// The single persisted session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl StoredSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            refresh_token: None,
            user: None,
        }
    }
}

/// Backing store for the session; serialization happens only here.
pub trait SessionStore: Send + Sync {
    /// Read the stored session, `None` when nothing was saved
    fn load(&self) -> ClientResult<Option<StoredSession>>;

    /// Replace the stored session
    fn save(&self, session: &StoredSession) -> ClientResult<()>;

    /// Remove the stored session; removing nothing is not an error
    fn clear(&self) -> ClientResult<()>;
}

/// JSON file session store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ClientResult<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)
            .map_err(|e| ClientError::session(format!("read {}: {}", self.path.display(), e)))?;
        let session = serde_json::from_str(&json)
            .map_err(|e| ClientError::session(format!("parse {}: {}", self.path.display(), e)))?;
        Ok(Some(session))
    }

    fn save(&self, session: &StoredSession) -> ClientResult<()> {
        self.ensure_dir()
            .map_err(|e| ClientError::session(format!("create session dir: {}", e)))?;
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| ClientError::session(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| ClientError::session(format!("write {}: {}", self.path.display(), e)))
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| ClientError::session(format!("remove {}: {}", self.path.display(), e)))?;
        }
        Ok(())
    }
}

/// Process-local session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a session
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<StoredSession>> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &StoredSession) -> ClientResult<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ClientError::session("session lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
