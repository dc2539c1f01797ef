//! Console configuration.
//!
//! Everything comes from the environment; nothing is hardcoded beyond the
//! local-development defaults.

use std::path::PathBuf;

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the backend API (no trailing slash).
    pub api_url: String,

    /// Directory holding persisted client state (the credential file).
    pub state_dir: PathBuf,

    /// Credentials for the scripted sign-in, when provided.
    pub sign_in: Option<SignInConfig>,
}

/// Scripted sign-in credentials.
#[derive(Debug, Clone)]
pub struct SignInConfig {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl ConsoleConfig {
    /// Read configuration from the environment.
    ///
    /// - `BREWDESK_API_URL` (default `http://localhost:5000`)
    /// - `BREWDESK_STATE_DIR` (default `.brewdesk`)
    /// - `BREWDESK_EMAIL` / `BREWDESK_PASSWORD` (optional, for the
    ///   scripted sign-in)
    #[must_use]
    pub fn from_env() -> Self {
        let api_url = std::env::var("BREWDESK_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let state_dir = std::env::var("BREWDESK_STATE_DIR")
            .map_or_else(|_| PathBuf::from(".brewdesk"), PathBuf::from);

        let sign_in = match (
            std::env::var("BREWDESK_EMAIL"),
            std::env::var("BREWDESK_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) => Some(SignInConfig { email, password }),
            _ => None,
        };

        Self {
            api_url,
            state_dir,
            sign_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        // Not touching the real environment here; just the defaults path.
        let config = ConsoleConfig {
            api_url: "http://localhost:5000".to_string(),
            state_dir: PathBuf::from(".brewdesk"),
            sign_in: None,
        };
        assert_eq!(config.api_url, "http://localhost:5000");
        assert!(config.sign_in.is_none());
    }
}
