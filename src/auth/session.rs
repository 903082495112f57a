use std::sync::Mutex;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::models::User;

use super::store::{StoredSession, TokenStore};

/// Where the session currently stands, as seen by the route guard.
///
/// `Unknown` only exists before the first hydration; once hydrated the
/// state cycles between the other two for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// The signed-in context: user identity plus bearer token.
/// Both are present or both are absent, never one without the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

struct Inner {
    session: Session,
    hydrated: bool,
}

/// Owner of the current session.
///
/// Readable by anyone holding a reference; mutable only through
/// `set_user`, `logout`, and the one-shot `hydrate`. Every mutation
/// updates memory first, notifies subscribers, then writes through to the
/// token store. A crash between the memory update and the write can lose
/// the just-set session; the durable copy wins on the next start and the
/// user signs in again.
pub struct SessionState {
    store: TokenStore,
    inner: Mutex<Inner>,
    status_tx: watch::Sender<AuthStatus>,
}

impl SessionState {
    pub fn new(store: TokenStore) -> Self {
        let (status_tx, _) = watch::channel(AuthStatus::Unknown);
        Self {
            store,
            inner: Mutex::new(Inner {
                session: Session::default(),
                hydrated: false,
            }),
            status_tx,
        }
    }

    /// Current guard-visible status.
    pub fn status(&self) -> AuthStatus {
        *self.status_tx.borrow()
    }

    /// Subscribe to status changes. Receivers see the latest value on
    /// every mutation; there is no event history.
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status_tx.subscribe()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.lock().session.user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().session.token.clone()
    }

    /// Adopt a freshly authenticated session.
    pub fn set_user(&self, user: User, token: String) {
        let stored = StoredSession::new(user.clone(), token.clone());
        {
            let mut inner = self.lock();
            inner.session = Session {
                user: Some(user),
                token: Some(token),
            };
            inner.hydrated = true;
        }
        self.status_tx.send_replace(AuthStatus::Authenticated);
        if let Err(e) = self.store.save(&stored) {
            warn!(error = %e, "failed to persist session");
        }
    }

    /// Drop the session, in memory and on disk.
    pub fn logout(&self) {
        {
            let mut inner = self.lock();
            inner.session = Session::default();
            inner.hydrated = true;
        }
        self.status_tx.send_replace(AuthStatus::Unauthenticated);
        self.store.clear();
    }

    /// Load the stored session into memory, once. Later calls are no-ops,
    /// even after logout; only `set_user` re-establishes a session.
    pub fn hydrate(&self) {
        let status = {
            let mut inner = self.lock();
            if inner.hydrated {
                return;
            }
            inner.hydrated = true;
            match self.store.load() {
                Some(stored) => {
                    debug!(user = %stored.user.email, "session hydrated from disk");
                    inner.session = Session {
                        user: Some(stored.user),
                        token: Some(stored.token),
                    };
                    AuthStatus::Authenticated
                }
                None => AuthStatus::Unauthenticated,
            }
        };
        self.status_tx.send_replace(status);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-mutation; the session is a
        // small value type, so the data is still coherent to read.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_state(tag: &str) -> (SessionState, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "freelancehq-session-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        (SessionState::new(TokenStore::new(dir.clone())), dir)
    }

    fn cleanup(dir: &PathBuf) {
        let _ = std::fs::remove_dir_all(dir);
    }

    fn sample_user() -> User {
        User {
            id: 1,
            email: "a@b.com".to_string(),
            name: None,
        }
    }

    #[test]
    fn test_starts_unknown_and_empty() {
        let (state, dir) = test_state("initial");
        assert_eq!(state.status(), AuthStatus::Unknown);
        assert_eq!(state.session(), Session::default());
        cleanup(&dir);
    }

    #[test]
    fn test_set_user_updates_memory_and_store() {
        let (state, dir) = test_state("set-user");
        state.set_user(sample_user(), "tok123".to_string());

        assert_eq!(state.status(), AuthStatus::Authenticated);
        assert_eq!(state.user(), Some(sample_user()));
        assert_eq!(state.token(), Some("tok123".to_string()));

        // Write-through: the durable copy matches what memory holds
        let stored = TokenStore::new(dir.clone())
            .load()
            .expect("expected a persisted session");
        assert_eq!(stored.user, sample_user());
        assert_eq!(stored.token, "tok123");

        cleanup(&dir);
    }

    #[test]
    fn test_logout_clears_memory_and_store() {
        let (state, dir) = test_state("logout");
        state.set_user(sample_user(), "tok123".to_string());
        state.logout();

        assert_eq!(state.status(), AuthStatus::Unauthenticated);
        assert_eq!(state.session(), Session::default());
        assert!(TokenStore::new(dir.clone()).load().is_none());

        cleanup(&dir);
    }

    #[test]
    fn test_hydrate_adopts_stored_session() {
        let (state, dir) = test_state("hydrate");
        TokenStore::new(dir.clone())
            .save(&StoredSession::new(sample_user(), "tok123".to_string()))
            .expect("save failed");

        state.hydrate();

        assert_eq!(state.status(), AuthStatus::Authenticated);
        assert_eq!(state.token(), Some("tok123".to_string()));
        assert_eq!(state.user(), Some(sample_user()));

        cleanup(&dir);
    }

    #[test]
    fn test_hydrate_empty_store_is_unauthenticated() {
        let (state, dir) = test_state("hydrate-empty");
        state.hydrate();
        assert_eq!(state.status(), AuthStatus::Unauthenticated);
        assert_eq!(state.session(), Session::default());
        cleanup(&dir);
    }

    #[test]
    fn test_hydrate_corrupt_store_is_unauthenticated() {
        let (state, dir) = test_state("hydrate-corrupt");
        std::fs::create_dir_all(&dir).expect("mkdir failed");
        std::fs::write(dir.join("session.json"), "garbage").expect("write failed");

        state.hydrate();
        assert_eq!(state.status(), AuthStatus::Unauthenticated);

        cleanup(&dir);
    }

    #[test]
    fn test_hydrate_runs_only_once() {
        let (state, dir) = test_state("hydrate-once");
        state.hydrate();
        assert_eq!(state.status(), AuthStatus::Unauthenticated);

        // A session appearing on disk afterwards is not picked up
        TokenStore::new(dir.clone())
            .save(&StoredSession::new(sample_user(), "late".to_string()))
            .expect("save failed");
        state.hydrate();
        assert_eq!(state.status(), AuthStatus::Unauthenticated);

        cleanup(&dir);
    }

    #[test]
    fn test_subscribers_observe_transitions() {
        let (state, dir) = test_state("subscribe");
        let rx = state.subscribe();
        assert_eq!(*rx.borrow(), AuthStatus::Unknown);

        state.set_user(sample_user(), "tok123".to_string());
        assert_eq!(*rx.borrow(), AuthStatus::Authenticated);

        state.logout();
        assert_eq!(*rx.borrow(), AuthStatus::Unauthenticated);

        cleanup(&dir);
    }
}
