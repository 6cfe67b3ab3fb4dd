//! Local session file.
//!
//! Stands in for the mobile app's key-value session store: a small JSON file
//! holding the locally-generated token and the user identity. Identity is
//! read from here once and passed explicitly to whatever needs it; nothing
//! reads the session ambiently.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
}

#[derive(Clone, Debug)]
pub struct SessionStore {
    path: String,
}

impl SessionStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// `None` when no session file exists (logged out).
    pub fn load(&self) -> Result<Option<Session>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            token: "token_1_1756000000000".to_string(),
            user_id: 1,
            user_name: "Alice".to_string(),
            user_email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(path.to_string_lossy());

        assert_eq!(store.load().unwrap(), None);

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config/session.json");
        let store = SessionStore::new(path.to_string_lossy());
        store.save(&sample()).unwrap();
        assert!(path.exists());
    }
}
