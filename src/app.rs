//! Application state management for the FreelanceHQ TUI.
//!
//! This module contains the core `App` struct: services (config, session,
//! guard, API client), the login form, per-route fetch state, and the
//! background task channel that carries fetch outcomes back to the UI
//! loop.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::{ApiClient, LoginResponse, Resource};
use crate::auth::credentials::CredentialStore;
use crate::auth::{RouteGuard, SessionState, TokenStore};
use crate::config::Config;
use crate::models::{Client, Invoice, Project};
use crate::router::{Route, Router};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background fetch channel.
/// A route loads at most three resources at once; 32 leaves headroom.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for email input.
/// 254 covers the address lengths mail systems actually accept.
const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

/// Number of items to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

/// Environment variables for prefilling the login form
const EMAIL_ENV: &str = "FREELANCEHQ_EMAIL";
const PASSWORD_ENV: &str = "FREELANCEHQ_PASSWORD";

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    Button,
}

// ============================================================================
// Background Fetch Results
// ============================================================================

/// Outcome of one background fetch. Remote failures travel through
/// untranslated; the page that owns the resource decides presentation.
enum FetchResult {
    Clients(Result<Vec<Client>>),
    Projects(Result<Vec<Project>>),
    ProjectDetail(Result<Project>),
    Invoices(Result<Vec<Invoice>>),
    Login(Result<LoginResponse>),
}

/// A fetch outcome tagged with the navigation epoch it started under.
/// Outcomes from an older epoch belong to a view that is gone and are
/// discarded instead of applied.
struct FetchEnvelope {
    epoch: u64,
    result: FetchResult,
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub session: Arc<SessionState>,
    pub guard: RouteGuard,
    pub api: ApiClient,
    pub router: Router,

    // UI state
    pub state: AppState,

    // Login form state
    pub login_email: String,
    pub login_password: String,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,
    pub login_in_flight: bool,

    // Per-route fetch state
    pub clients: Resource<Vec<Client>>,
    pub projects: Resource<Vec<Project>>,
    pub project_detail: Resource<Project>,
    pub invoices: Resource<Vec<Invoice>>,

    // List selections
    pub clients_selection: usize,
    pub projects_selection: usize,
    pub invoices_selection: usize,
    pub tasks_selection: usize,

    // Background fetch channel
    fetch_rx: mpsc::Receiver<FetchEnvelope>,
    fetch_tx: mpsc::Sender<FetchEnvelope>,
    epoch: u64,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        debug!("App::new() starting");
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "failed to load config, using defaults");
                Config::default()
            }
        };

        let data_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("./data"));
        debug!(?data_dir, "data directory configured");

        let session = Arc::new(SessionState::new(TokenStore::new(data_dir)));
        let guard = RouteGuard::new(Arc::clone(&session));
        let api = ApiClient::new(config.api_base_url(), Arc::clone(&session))?;

        let (fetch_tx, fetch_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        // Prefill the login form from env, config, and the keychain
        let login_email = std::env::var(EMAIL_ENV)
            .ok()
            .or_else(|| config.last_email.clone())
            .unwrap_or_default();

        let login_password = std::env::var(PASSWORD_ENV)
            .ok()
            .or_else(|| {
                if login_email.is_empty() {
                    None
                } else {
                    CredentialStore::recall(&login_email)
                }
            })
            .unwrap_or_default();

        let login_focus = if login_email.is_empty() {
            LoginFocus::Email
        } else {
            LoginFocus::Password
        };

        Ok(Self {
            config,
            session,
            guard,
            api,
            router: Router::new(),

            state: AppState::Normal,

            login_email,
            login_password,
            login_focus,
            login_error: None,
            login_in_flight: false,

            clients: Resource::new(),
            projects: Resource::new(),
            project_detail: Resource::new(),
            invoices: Resource::new(),

            clients_selection: 0,
            projects_selection: 0,
            invoices_selection: 0,
            tasks_selection: 0,

            fetch_rx,
            fetch_tx,
            epoch: 0,

            status_message: None,
        })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Initial navigation at process start: the home route, subject to the
    /// guard (which hydrates the session on this first observation).
    pub fn start(&mut self) {
        self.navigate(Route::Dashboard);
    }

    /// Navigate to a route. The guard sees every navigation and may
    /// rewrite it to the login page; the epoch bump retires any fetch
    /// still in flight for the previous view.
    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
        self.guard.observe(&mut self.router);
        self.epoch += 1;
        self.reset_selection();
        self.load_current_route();
    }

    /// Refetch whatever the current route shows.
    pub fn reload(&mut self) {
        self.epoch += 1;
        self.load_current_route();
    }

    fn reset_selection(&mut self) {
        match self.router.current() {
            Route::Clients => self.clients_selection = 0,
            Route::Projects => self.projects_selection = 0,
            Route::Invoices => self.invoices_selection = 0,
            Route::ProjectDetail(_) => self.tasks_selection = 0,
            _ => {}
        }
    }

    /// Start the fetches the current route needs.
    fn load_current_route(&mut self) {
        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        let epoch = self.epoch;

        match self.router.current() {
            Route::Dashboard => {
                self.clients.start();
                self.projects.start();
                self.invoices.start();
                tokio::spawn(async move {
                    let (clients, projects, invoices) = tokio::join!(
                        api.fetch_clients(),
                        api.fetch_projects(),
                        api.fetch_invoices(),
                    );
                    Self::send_result(&tx, epoch, FetchResult::Clients(clients)).await;
                    Self::send_result(&tx, epoch, FetchResult::Projects(projects)).await;
                    Self::send_result(&tx, epoch, FetchResult::Invoices(invoices)).await;
                });
            }
            Route::Clients => {
                self.clients.start();
                tokio::spawn(async move {
                    let result = api.fetch_clients().await;
                    Self::send_result(&tx, epoch, FetchResult::Clients(result)).await;
                });
            }
            Route::Projects => {
                self.projects.start();
                tokio::spawn(async move {
                    let result = api.fetch_projects().await;
                    Self::send_result(&tx, epoch, FetchResult::Projects(result)).await;
                });
            }
            Route::ProjectDetail(id) => {
                self.project_detail.start();
                tokio::spawn(async move {
                    let result = api.fetch_project(id).await;
                    Self::send_result(&tx, epoch, FetchResult::ProjectDetail(result)).await;
                });
            }
            Route::Invoices => {
                self.invoices.start();
                tokio::spawn(async move {
                    let result = api.fetch_invoices().await;
                    Self::send_result(&tx, epoch, FetchResult::Invoices(result)).await;
                });
            }
            Route::Billing | Route::Login | Route::NotFound => {}
        }
    }

    /// Helper to send fetch results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<FetchEnvelope>, epoch: u64, result: FetchResult) {
        if tx.send(FetchEnvelope { epoch, result }).await.is_err() {
            error!("failed to send fetch result - channel closed");
        }
    }

    // =========================================================================
    // Background Task Processing
    // =========================================================================

    /// Drain completed background fetches and apply their outcomes.
    pub fn check_background_tasks(&mut self) {
        while let Ok(envelope) = self.fetch_rx.try_recv() {
            self.process_fetch_result(envelope);
        }
    }

    fn process_fetch_result(&mut self, envelope: FetchEnvelope) {
        if envelope.epoch != self.epoch {
            // The view that asked for this is gone
            debug!(
                envelope_epoch = envelope.epoch,
                current_epoch = self.epoch,
                "discarding stale fetch result"
            );
            return;
        }

        match envelope.result {
            FetchResult::Clients(result) => {
                settle_logged("clients", &mut self.clients, result);
            }
            FetchResult::Projects(result) => {
                settle_logged("projects", &mut self.projects, result);
            }
            FetchResult::ProjectDetail(result) => {
                settle_logged("project detail", &mut self.project_detail, result);
            }
            FetchResult::Invoices(result) => {
                settle_logged("invoices", &mut self.invoices, result);
            }
            FetchResult::Login(result) => self.finish_login(result),
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Submit the login form.
    pub fn submit_login(&mut self) {
        if self.login_in_flight {
            return;
        }
        if self.login_email.is_empty() || self.login_password.is_empty() {
            self.login_error = Some("Email and password are required".to_string());
            return;
        }

        self.login_error = None;
        self.login_in_flight = true;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        let epoch = self.epoch;
        let email = self.login_email.clone();
        let password = self.login_password.clone();

        tokio::spawn(async move {
            let result = api.login(&email, &password).await;
            Self::send_result(&tx, epoch, FetchResult::Login(result)).await;
        });
    }

    fn finish_login(&mut self, result: Result<LoginResponse>) {
        self.login_in_flight = false;

        match result {
            Ok(LoginResponse { user, token }) => {
                info!(email = %user.email, "login successful");

                if let Err(e) = CredentialStore::remember(&self.login_email, &self.login_password)
                {
                    warn!(error = %e, "failed to store credentials");
                }

                self.config.last_email = Some(self.login_email.clone());
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "failed to save config");
                }

                self.status_message = Some(format!("Signed in as {}", user.email));
                self.session.set_user(user, token);
                self.login_password.clear();
                self.navigate(Route::Dashboard);
            }
            Err(e) => {
                error!(error = %e, "login failed");
                // The server's detail text, shown as-is on the form
                self.login_error = Some(e.to_string());
            }
        }
    }

    /// Sign out: clears the session; the guard redirects to the login page.
    pub fn sign_out(&mut self) {
        self.session.logout();
        self.epoch += 1;
        self.clients = Resource::new();
        self.projects = Resource::new();
        self.project_detail = Resource::new();
        self.invoices = Resource::new();
        self.guard.observe(&mut self.router);
        self.login_focus = if self.login_email.is_empty() {
            LoginFocus::Email
        } else {
            LoginFocus::Password
        };
        self.status_message = Some("Signed out".to_string());
        info!("signed out");
    }

    // =========================================================================
    // Login Form Input
    // =========================================================================

    pub fn login_input_char(&mut self, c: char) {
        match self.login_focus {
            LoginFocus::Email => {
                if self.login_email.len() < MAX_EMAIL_LENGTH && !c.is_control() {
                    self.login_email.push(c);
                }
            }
            LoginFocus::Password => {
                if self.login_password.len() < MAX_PASSWORD_LENGTH && !c.is_control() {
                    self.login_password.push(c);
                }
            }
            LoginFocus::Button => {}
        }
    }

    pub fn login_input_backspace(&mut self) {
        match self.login_focus {
            LoginFocus::Email => {
                self.login_email.pop();
            }
            LoginFocus::Password => {
                self.login_password.pop();
            }
            LoginFocus::Button => {}
        }
    }

    // =========================================================================
    // List Selection
    // =========================================================================

    /// Number of selectable rows on the current route.
    fn selectable_len(&self) -> usize {
        match self.router.current() {
            Route::Clients => self.clients.data.as_ref().map_or(0, |list| list.len()),
            Route::Projects => self.projects.data.as_ref().map_or(0, |list| list.len()),
            Route::Invoices => self.invoices.data.as_ref().map_or(0, |list| list.len()),
            Route::ProjectDetail(_) => self
                .project_detail
                .data
                .as_ref()
                .map_or(0, |p| p.tasks.len()),
            _ => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.router.current() {
            Route::Clients => Some(&mut self.clients_selection),
            Route::Projects => Some(&mut self.projects_selection),
            Route::Invoices => Some(&mut self.invoices_selection),
            Route::ProjectDetail(_) => Some(&mut self.tasks_selection),
            _ => None,
        }
    }

    pub fn move_selection_down(&mut self, amount: usize) {
        let len = self.selectable_len();
        if let Some(selection) = self.selection_mut() {
            if len > 0 {
                *selection = (*selection + amount).min(len - 1);
            }
        }
    }

    pub fn move_selection_up(&mut self, amount: usize) {
        if let Some(selection) = self.selection_mut() {
            *selection = selection.saturating_sub(amount);
        }
    }

    /// Open the detail route for the selected project.
    pub fn open_selected_project(&mut self) {
        if self.router.current() != Route::Projects {
            return;
        }
        let id = self
            .projects
            .data
            .as_ref()
            .and_then(|list| list.get(self.projects_selection))
            .map(|p| p.id);
        if let Some(id) = id {
            self.navigate(Route::ProjectDetail(id));
        }
    }
}

/// Apply a fetch outcome to its resource slot, logging failures.
fn settle_logged<T>(name: &'static str, slot: &mut Resource<T>, result: Result<T>) {
    if let Err(e) = &result {
        warn!(resource = name, error = %e, "fetch failed");
    }
    slot.settle(result);
}
