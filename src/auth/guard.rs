use std::sync::Arc;

use tracing::debug;

use crate::router::{Route, Router};

use super::session::{AuthStatus, SessionState};

/// Decides, on each navigation, whether the target is reachable.
///
/// Consulted after every route change: hydrates the session lazily on the
/// first observation, and rewrites unauthenticated navigation to the
/// login page. Authenticated users are never force-redirected.
pub struct RouteGuard {
    session: Arc<SessionState>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionState>) -> Self {
        Self { session }
    }

    /// Check the current navigation target against the session, redirecting
    /// to the login page when it is not reachable. Returns the status the
    /// decision was based on.
    pub fn observe(&self, router: &mut Router) -> AuthStatus {
        if self.session.status() == AuthStatus::Unknown {
            self.session.hydrate();
        }

        let status = self.session.status();
        if status == AuthStatus::Unauthenticated && router.current() != Route::Login {
            debug!(from = %router.current().path(), "unauthenticated navigation, redirecting to login");
            router.navigate(Route::Login);
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::{StoredSession, TokenStore};
    use crate::models::User;
    use std::path::PathBuf;

    fn test_guard(tag: &str) -> (RouteGuard, Arc<SessionState>, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "freelancehq-guard-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        let session = Arc::new(SessionState::new(TokenStore::new(dir.clone())));
        (RouteGuard::new(Arc::clone(&session)), session, dir)
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
    fn test_empty_store_redirects_to_login() {
        let (guard, session, dir) = test_guard("redirect");
        let mut router = Router::new();

        assert_eq!(session.status(), AuthStatus::Unknown);
        let status = guard.observe(&mut router);

        assert_eq!(status, AuthStatus::Unauthenticated);
        assert_eq!(router.current(), Route::Login);

        cleanup(&dir);
    }

    #[test]
    fn test_authenticated_navigation_is_untouched() {
        let (guard, session, dir) = test_guard("authed");
        session.set_user(sample_user(), "tok123".to_string());

        let mut router = Router::new();
        router.navigate(Route::Clients);
        let status = guard.observe(&mut router);

        assert_eq!(status, AuthStatus::Authenticated);
        assert_eq!(router.current(), Route::Clients);

        cleanup(&dir);
    }

    #[test]
    fn test_login_after_redirect_restores_access() {
        let (guard, session, dir) = test_guard("login-cycle");
        let mut router = Router::new();

        guard.observe(&mut router);
        assert_eq!(router.current(), Route::Login);

        session.set_user(sample_user(), "tok123".to_string());
        router.navigate(Route::Invoices);
        let status = guard.observe(&mut router);

        assert_eq!(status, AuthStatus::Authenticated);
        assert_eq!(router.current(), Route::Invoices);

        cleanup(&dir);
    }

    #[test]
    fn test_login_route_is_not_redirected() {
        let (guard, _session, dir) = test_guard("login-stays");
        let mut router = Router::new();
        router.navigate(Route::Login);

        guard.observe(&mut router);
        assert_eq!(router.current(), Route::Login);

        cleanup(&dir);
    }

    #[test]
    fn test_stored_session_hydrates_on_first_observation() {
        let (guard, session, dir) = test_guard("hydrate");
        TokenStore::new(dir.clone())
            .save(&StoredSession::new(sample_user(), "tok123".to_string()))
            .expect("save failed");

        let mut router = Router::new();
        let status = guard.observe(&mut router);

        assert_eq!(status, AuthStatus::Authenticated);
        assert_eq!(router.current(), Route::Dashboard);
        assert_eq!(session.token(), Some("tok123".to_string()));

        cleanup(&dir);
    }

    #[test]
    fn test_logout_redirects_next_observation() {
        let (guard, session, dir) = test_guard("logout");
        session.set_user(sample_user(), "tok123".to_string());

        let mut router = Router::new();
        router.navigate(Route::Projects);
        guard.observe(&mut router);
        assert_eq!(router.current(), Route::Projects);

        session.logout();
        guard.observe(&mut router);
        assert_eq!(router.current(), Route::Login);

        cleanup(&dir);
    }
}
