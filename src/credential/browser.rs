//! Browser `localStorage` credential lookup.
//!
//! Reads are hydrate-only; outside the browser the store is always empty so
//! server rendering and native tests see an unauthenticated session.

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;

use super::{CredentialProvider, TOKEN_KEY, is_present};

#[derive(Debug, Clone)]
pub struct LocalStorageCredentials {
    key: String,
}

impl Default for LocalStorageCredentials {
    fn default() -> Self {
        Self::new(TOKEN_KEY)
    }
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the raw token from `localStorage`.
    pub fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = match web_sys::window().map(|w| w.local_storage()) {
                Some(Ok(Some(storage))) => storage,
                _ => return None,
            };
            match storage.get_item(&self.key) {
                Ok(value) => value,
                Err(_) => None,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn has_token(&self) -> bool {
        is_present(self.read().as_deref())
    }
}
