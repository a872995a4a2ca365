//! Durable slot for the bearer token.

use std::cell::RefCell;

use thiserror::Error;

/// The token could not be written or removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token storage error: {0}")]
pub struct StorageError(pub String);

/// Persists exactly one bearer token across restarts.
pub trait TokenStore {
    /// Stored token, if any. Read failures count as "no token".
    fn load(&self) -> Option<String>;
    /// Overwrite the stored token.
    fn save(&self, token: &str) -> Result<(), StorageError>;
    /// Remove the stored token. Removing a missing token succeeds.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Process-local store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    /// Store pre-seeded with `token`, as if persisted by an earlier run.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}
