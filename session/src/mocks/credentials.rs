//! In-memory credential store.

use crate::credentials::{CredentialStore, StoredCredentials};
use crate::error::SessionError;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Credential store backed by process memory.
///
/// Saves can be made to fail to exercise the "token is written only after
/// the full exchange succeeds" contract.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    stored: Mutex<Option<StoredCredentials>>,
    fail_saves: AtomicBool,
}

impl InMemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with credentials.
    #[must_use]
    pub fn with_credentials(credentials: StoredCredentials) -> Self {
        Self {
            stored: Mutex::new(Some(credentials)),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `save` fail.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Option<StoredCredentials> {
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        self.stored.lock().unwrap().clone()
    }

    fn save(&self, credentials: &StoredCredentials) -> Result<(), SessionError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SessionError::Storage {
                message: "simulated storage failure".to_string(),
            });
        }
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        let mut guard = self.stored.lock().unwrap();
        *guard = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) {
        #[allow(clippy::unwrap_used)] // lock poisoning is unrecoverable
        let mut guard = self.stored.lock().unwrap();
        *guard = None;
    }
}
