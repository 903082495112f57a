//! Authorized HTTP client for the FreelanceHQ REST API.
//!
//! Every outbound request reads the current bearer token from session
//! state immediately before sending; with no token the request goes out
//! unauthenticated and the backend decides what to reject. The client is
//! a pass-through decorator over the transport: no retries, no caching,
//! no response translation.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::auth::SessionState;
use crate::models::{Client, Invoice, Project, User};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Successful authentication payload from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// API client for the FreelanceHQ backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionState>,
}

impl ApiClient {
    pub fn new(base_url: String, session: Arc<SessionState>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Authorization headers for the current session. The token comes
    /// from session state, never from the durable store, so there is a
    /// single source of truth; with no token the header is omitted.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            headers.insert(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if a response is successful, turning non-2xx into an error
    /// carrying the status class and the body's `detail` verbatim.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("failed to parse response from {}", url))
    }

    /// Authenticate with email and password.
    ///
    /// Goes through the same header path as every other request: a
    /// lingering token rides along and the backend ignores it.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.url("/auth/login/");
        debug!(url = %url, "POST login");

        let response = self
            .http
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .context("failed to send login request")?;

        let response = Self::check_response(response).await?;
        response.json().await.context("failed to parse login response")
    }

    // ===== Resource fetches =====

    pub async fn fetch_clients(&self) -> Result<Vec<Client>> {
        self.get("/clients/").await
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects/").await
    }

    pub async fn fetch_project(&self, id: i64) -> Result<Project> {
        self.get(&format!("/projects/{}/", id)).await
    }

    pub async fn fetch_invoices(&self) -> Result<Vec<Invoice>> {
        self.get("/invoices/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::{StoredSession, TokenStore};
    use std::path::PathBuf;

    fn test_session(tag: &str) -> (Arc<SessionState>, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "freelancehq-client-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        (
            Arc::new(SessionState::new(TokenStore::new(dir.clone()))),
            dir,
        )
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
    fn test_bearer_header_present_iff_token_present() {
        let (session, dir) = test_session("headers");
        let api = ApiClient::new("http://api.test".to_string(), Arc::clone(&session))
            .expect("client build failed");

        // No session yet: the header is omitted entirely, not sent empty
        let headers = api.auth_headers().expect("headers failed");
        assert!(headers.get(header::AUTHORIZATION).is_none());

        session.set_user(sample_user(), "tok123".to_string());
        let headers = api.auth_headers().expect("headers failed");
        assert_eq!(
            headers.get(header::AUTHORIZATION).map(|v| v.to_str().unwrap()),
            Some("Bearer tok123")
        );

        // Logout drops the header again
        session.logout();
        let headers = api.auth_headers().expect("headers failed");
        assert!(headers.get(header::AUTHORIZATION).is_none());

        cleanup(&dir);
    }

    #[test]
    fn test_hydrated_session_authorizes_requests() {
        let (session, dir) = test_session("hydrated");
        TokenStore::new(dir.clone())
            .save(&StoredSession::new(sample_user(), "tok123".to_string()))
            .expect("save failed");

        let api = ApiClient::new("http://api.test".to_string(), Arc::clone(&session))
            .expect("client build failed");

        session.hydrate();
        let headers = api.auth_headers().expect("headers failed");
        assert_eq!(
            headers.get(header::AUTHORIZATION).map(|v| v.to_str().unwrap()),
            Some("Bearer tok123")
        );

        cleanup(&dir);
    }

    #[test]
    fn test_urls_join_base_and_path() {
        let (session, dir) = test_session("urls");
        let api = ApiClient::new("http://api.test/api".to_string(), session)
            .expect("client build failed");

        assert_eq!(api.url("/clients/"), "http://api.test/api/clients/");
        assert_eq!(api.url("/projects/7/"), "http://api.test/api/projects/7/");

        cleanup(&dir);
    }
}
