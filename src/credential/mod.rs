//! Credential-token presence checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard never touches storage directly. It asks an injected
//! [`CredentialProvider`] whether a token is stored, which keeps it testable
//! without a browser and lets the CLI and tests swap in their own stores.
//!
//! TRADE-OFFS
//! ==========
//! Only presence is observable. Tokens are never parsed or validated here, and
//! an empty string counts as absent, matching how the browser client treats a
//! blank `localStorage` entry.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

mod browser;
mod file;

use std::sync::{PoisonError, RwLock};

pub use browser::LocalStorageCredentials;
pub use file::{FileCredentials, StorageError};

/// Storage key the login flow writes the token under.
pub const TOKEN_KEY: &str = "token";

/// Capability answering "is a credential token stored right now?".
pub trait CredentialProvider {
    fn has_token(&self) -> bool;
}

impl<F> CredentialProvider for F
where
    F: Fn() -> bool,
{
    fn has_token(&self) -> bool {
        self()
    }
}

/// Presence rule shared by every store.
pub fn is_present(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

/// In-process token slot.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: RwLock<Option<String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl CredentialProvider for MemoryCredentials {
    fn has_token(&self) -> bool {
        is_present(self.token.read().unwrap_or_else(PoisonError::into_inner).as_deref())
    }
}
