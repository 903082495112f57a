// Allow dead code: infrastructure methods for future use
#![allow(dead_code)]

use anyhow::{Context, Result};
use keyring::Entry;
use tracing::debug;

const SERVICE_NAME: &str = "freelancehq-tui";

/// Remembered passwords, held by the OS keychain and keyed by the
/// account email. Only used to prefill the login form; the session
/// itself lives in the token store.
pub struct CredentialStore;

impl CredentialStore {
    /// Remember the password for an email after a successful sign-in.
    pub fn remember(email: &str, password: &str) -> Result<()> {
        Entry::new(SERVICE_NAME, email)
            .context("failed to open keyring entry")?
            .set_password(password)
            .context("failed to store password in keychain")
    }

    /// Recall a remembered password, if the keychain has one. Keychain
    /// errors count as "nothing remembered" so a locked or absent keyring
    /// never blocks the login form.
    pub fn recall(email: &str) -> Option<String> {
        match Entry::new(SERVICE_NAME, email).and_then(|e| e.get_password()) {
            Ok(password) => Some(password),
            Err(e) => {
                debug!(error = %e, "no remembered password");
                None
            }
        }
    }

    /// Forget the remembered password for an email.
    pub fn forget(email: &str) -> Result<()> {
        Entry::new(SERVICE_NAME, email)
            .context("failed to open keyring entry")?
            .delete_credential()
            .context("failed to delete credential from keychain")
    }
}
