//! Credential persistence.
//!
//! The token and the serialized user are stored together and cleared
//! together - there is no state where one survives without the other.
//! [`SessionTokens`] layers a live in-memory copy of the token over the
//! durable store and implements the API client's [`TokenSource`], so every
//! outgoing request reads the token the session last wrote, and a 401
//! wipes both copies in one synchronous step.

use crate::error::SessionError;
use crate::state::UserProfile;
use brewdesk_api::TokenSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// The persisted credential pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Bearer token.
    pub token: String,
    /// The signed-in user.
    pub user: UserProfile,
}

/// Durable storage for the credential pair.
///
/// Implementations must treat `load` as a one-shot hydration: corrupt data
/// is discarded (not retried), and both fields round-trip together.
pub trait CredentialStore: Send + Sync {
    /// Read the stored credentials. Absent or unparseable data yields
    /// `None`; corrupt data is discarded as a side effect.
    fn load(&self) -> Option<StoredCredentials>;

    /// Persist the credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the pair could not be
    /// written durably. Callers must not treat the session as established
    /// when this fails.
    fn save(&self, credentials: &StoredCredentials) -> Result<(), SessionError>;

    /// Remove any stored credentials. Idempotent.
    fn clear(&self);
}

/// File-backed credential store.
///
/// Stores the pair as one JSON document in the console's state directory.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// File name within the state directory.
    const FILE_NAME: &'static str = "credentials.json";

    /// Create a store rooted at the given state directory.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: state_dir.into().join(Self::FILE_NAME),
        }
    }

    /// The file the credentials live in.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<StoredCredentials> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(credentials) => Some(credentials),
            Err(error) => {
                // Corrupt data is discarded, not retried.
                tracing::warn!(error = %error, "Discarding corrupt stored credentials");
                self.clear();
                None
            },
        }
    }

    fn save(&self, credentials: &StoredCredentials) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::Storage {
                message: e.to_string(),
            })?;
        }
        let json = serde_json::to_string_pretty(credentials).map_err(|e| SessionError::Storage {
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json).map_err(|e| SessionError::Storage {
            message: e.to_string(),
        })
    }

    fn clear(&self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %error, "Failed to remove stored credentials");
            }
        }
    }
}

/// Live token cell shared between the session reducer and the API client.
///
/// The reducer writes on sign-in/sign-out; the client reads on every call
/// and clears on 401. The lock is required: unlike the serializing event
/// loop the original console ran on, this runtime interleaves reads and
/// writes from different tasks.
pub struct SessionTokens {
    current: RwLock<Option<String>>,
    store: Arc<dyn CredentialStore>,
}

impl SessionTokens {
    /// Create the cell over a durable store. The live copy starts empty
    /// until bootstrap installs the persisted token.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(None),
            store,
        })
    }

    /// Install a token into the live cell.
    #[allow(clippy::missing_panics_doc)] // lock poisoning is unrecoverable
    pub fn install(&self, token: &str) {
        #[allow(clippy::unwrap_used)]
        let mut guard = self.current.write().unwrap();
        *guard = Some(token.to_string());
    }
}

impl TokenSource for SessionTokens {
    fn token(&self) -> Option<String> {
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        self.current.read().unwrap().clone()
    }

    fn clear(&self) {
        {
            #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
            let mut guard = self.current.write().unwrap();
            *guard = None;
        }
        self.store.clear();
    }
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("has_token", &self.token().is_some())
            .finish_non_exhaustive()
    }
}
