//! File-backed key/value store standing in for browser `localStorage`.
//!
//! The file holds one flat JSON object of string values, e.g.
//! `{"token": "abc"}`. A missing or blank file is an empty store.

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{CredentialProvider, is_present};

/// Errors produced by the file store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed storage file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
    key: String,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self { path: path.into(), key: key.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current token value, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the file exists but cannot be read or
    /// parsed.
    pub fn read(&self) -> Result<Option<String>, StorageError> {
        let mut entries = self.load()?;
        Ok(entries.remove(&self.key))
    }

    /// Store `token`, keeping any other keys in the file.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the existing file is unreadable or the
    /// write fails.
    pub fn write(&self, token: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(self.key.clone(), token.to_owned());
        self.save(&entries)
    }

    /// Remove the token. Returns whether one was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the file is unreadable or the write
    /// fails.
    pub fn remove(&self) -> Result<bool, StorageError> {
        let mut entries = self.load()?;
        if entries.remove(&self.key).is_none() {
            return Ok(false);
        }
        self.save(&entries)?;
        Ok(true)
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(StorageError::Io { path: self.path.clone(), source }),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StorageError::Malformed { path: self.path.clone(), source })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|source| StorageError::Malformed { path: self.path.clone(), source })?;
        fs::write(&self.path, raw).map_err(io_err)
    }
}

impl CredentialProvider for FileCredentials {
    fn has_token(&self) -> bool {
        match self.read() {
            Ok(token) => is_present(token.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "credential store unreadable; treating token as absent");
                false
            }
        }
    }
}
