use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::User;

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

/// The serialized form of a signed-in session.
///
/// Both halves are required: a stored session always carries the user and
/// the token together, and a signed-out state is the absence of the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(user: User, token: String) -> Self {
        Self {
            user,
            token,
            saved_at: Utc::now(),
        }
    }
}

/// Why a stored session could not be read back.
///
/// Never leaves this module: `load` collapses it to `None` so a broken
/// file can never keep the app from reaching the login page.
#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read session file")]
    Io(#[from] std::io::Error),
    #[error("failed to decode session file")]
    Decode(#[from] serde_json::Error),
}

/// Durable storage for the current session, one JSON file under the
/// app's data directory.
pub struct TokenStore {
    data_dir: PathBuf,
}

impl TokenStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    /// Serialize and write the session, overwriting any prior value.
    pub fn save(&self, session: &StoredSession) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Remove the stored session. Idempotent: clearing an empty store is a
    /// no-op, and removal failures are logged rather than surfaced.
    pub fn clear(&self) {
        let path = self.session_path();
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                debug!(error = %e, path = %path.display(), "failed to remove session file");
            }
        }
    }

    fn try_load(&self) -> Result<StoredSession, LoadError> {
        let contents = std::fs::read_to_string(self.session_path())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Read the stored session. Fails closed: a missing, unreadable, or
    /// malformed file yields `None`, never an error.
    pub fn load(&self) -> Option<StoredSession> {
        if !self.session_path().exists() {
            return None;
        }
        match self.try_load() {
            Ok(session) => Some(session),
            Err(e) => {
                debug!(error = %e, "ignoring unreadable session file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_store(tag: &str) -> TokenStore {
        let dir = std::env::temp_dir().join(format!(
            "freelancehq-store-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        TokenStore::new(dir)
    }

    fn cleanup(dir: &Path) {
        let _ = std::fs::remove_dir_all(dir);
    }

    fn sample_session() -> StoredSession {
        StoredSession::new(
            User {
                id: 1,
                email: "a@b.com".to_string(),
                name: Some("Amina".to_string()),
            },
            "tok123".to_string(),
        )
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = test_store("round-trip");
        let session = sample_session();

        store.save(&session).expect("save failed");
        let loaded = store.load().expect("expected a stored session");
        assert_eq!(loaded, session);

        cleanup(&store.data_dir);
    }

    #[test]
    fn test_load_untouched_store_is_none() {
        let store = test_store("untouched");
        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_after_clear_is_none() {
        let store = test_store("clear");
        store.save(&sample_session()).expect("save failed");
        store.clear();
        assert!(store.load().is_none());

        cleanup(&store.data_dir);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = test_store("clear-twice");
        store.clear();
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let store = test_store("corrupt");
        std::fs::create_dir_all(&store.data_dir).expect("mkdir failed");
        std::fs::write(store.session_path(), "{not json at all").expect("write failed");

        assert!(store.load().is_none());

        cleanup(&store.data_dir);
    }

    #[test]
    fn test_wrong_shape_loads_as_none() {
        let store = test_store("wrong-shape");
        std::fs::create_dir_all(&store.data_dir).expect("mkdir failed");
        // Valid JSON, but missing the token field
        std::fs::write(
            store.session_path(),
            r#"{"user": {"id": 1, "email": "a@b.com"}}"#,
        )
        .expect("write failed");

        assert!(store.load().is_none());

        cleanup(&store.data_dir);
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        let store = test_store("overwrite");
        store.save(&sample_session()).expect("save failed");

        let replacement = StoredSession::new(
            User {
                id: 2,
                email: "c@d.com".to_string(),
                name: None,
            },
            "tok456".to_string(),
        );
        store.save(&replacement).expect("save failed");

        let loaded = store.load().expect("expected a stored session");
        assert_eq!(loaded.token, "tok456");
        assert_eq!(loaded.user.id, 2);

        cleanup(&store.data_dir);
    }
}
