//! Router configuration parsed from environment variables.

use std::path::PathBuf;

use crate::credential::TOKEN_KEY;
use crate::guard::{DEFAULT_DASHBOARD_ROUTE, DEFAULT_LOGIN_PATH, DEFAULT_LOGIN_ROUTE};

pub const DEFAULT_STORE_PATH: &str = ".asset-router/storage.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    pub token_key: String,
    pub store_path: PathBuf,
    pub routes_file: Option<PathBuf>,
    pub login_route: String,
    pub login_path: String,
    pub dashboard_route: String,
    pub log_filter: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            token_key: TOKEN_KEY.to_owned(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            routes_file: None,
            login_route: DEFAULT_LOGIN_ROUTE.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            dashboard_route: DEFAULT_DASHBOARD_ROUTE.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl RouterConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `ASSET_ROUTER_TOKEN_KEY`: storage key for the token (default `token`)
    /// - `ASSET_ROUTER_STORE`: file-backed token store path
    /// - `ASSET_ROUTER_ROUTES`: JSON/YAML route file replacing the built-in table
    /// - `ASSET_ROUTER_LOGIN_ROUTE`: default `login`
    /// - `ASSET_ROUTER_LOGIN_PATH`: default `/auth/login`
    /// - `ASSET_ROUTER_DASHBOARD_ROUTE`: default `dashboard`
    /// - `ASSET_ROUTER_LOG`: tracing filter directive (default `warn`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a login path not starting with `/`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Same as [`RouterConfig::from_env`] but reading from an arbitrary source.
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a login path not starting with `/`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let login_path = get("ASSET_ROUTER_LOGIN_PATH").unwrap_or(defaults.login_path);
        if !login_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                var: "ASSET_ROUTER_LOGIN_PATH",
                reason: format!("'{login_path}' must start with '/'"),
            });
        }

        Ok(Self {
            token_key: get("ASSET_ROUTER_TOKEN_KEY").unwrap_or(defaults.token_key),
            store_path: get("ASSET_ROUTER_STORE").map_or(defaults.store_path, PathBuf::from),
            routes_file: get("ASSET_ROUTER_ROUTES").map(PathBuf::from),
            login_route: get("ASSET_ROUTER_LOGIN_ROUTE").unwrap_or(defaults.login_route),
            login_path,
            dashboard_route: get("ASSET_ROUTER_DASHBOARD_ROUTE").unwrap_or(defaults.dashboard_route),
            log_filter: get("ASSET_ROUTER_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
