//! Navigation guard enforcing the authentication gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts call [`NavigationGuard::evaluate`] once per transition attempt,
//! before committing it. The guard reads the credential provider and returns
//! an [`Outcome`]; it never writes storage or host state.
//!
//! Rules, in order:
//! 1. Destination requires auth and no token is stored: redirect to login.
//! 2. Destination is the login route (by name or by path) and a token is
//!    stored: redirect to the dashboard.
//! 3. Otherwise: allow.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use crate::config::RouterConfig;
use crate::credential::CredentialProvider;
use crate::routes::{RouteDescriptor, RouteError, RouteTable};

pub const DEFAULT_LOGIN_ROUTE: &str = "login";
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_DASHBOARD_ROUTE: &str = "dashboard";

/// Decision for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Proceed to the destination unchanged.
    Allow,
    /// Abandon the destination and go to the named route instead.
    Redirect { route: String },
}

impl Outcome {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Redirect { route } => Some(route.as_str()),
        }
    }
}

/// Destination and origin of one transition attempt.
#[derive(Debug, Clone, Copy)]
pub struct NavigationIntent<'a> {
    pub to: &'a RouteDescriptor,
    pub from: Option<&'a RouteDescriptor>,
}

impl<'a> NavigationIntent<'a> {
    pub fn new(to: &'a RouteDescriptor, from: Option<&'a RouteDescriptor>) -> Self {
        Self { to, from }
    }

    /// An intent with no origin (initial page load).
    pub fn to(to: &'a RouteDescriptor) -> Self {
        Self { to, from: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationGuard {
    login_route: String,
    login_path: String,
    dashboard_route: String,
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_ROUTE, DEFAULT_LOGIN_PATH, DEFAULT_DASHBOARD_ROUTE)
    }
}

impl NavigationGuard {
    pub fn new(
        login_route: impl Into<String>,
        login_path: impl Into<String>,
        dashboard_route: impl Into<String>,
    ) -> Self {
        Self {
            login_route: login_route.into(),
            login_path: login_path.into(),
            dashboard_route: dashboard_route.into(),
        }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(&config.login_route, &config.login_path, &config.dashboard_route)
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn dashboard_route(&self) -> &str {
        &self.dashboard_route
    }

    /// Whether `route` is the login destination. Name and path are both
    /// checked; either one is enough. The path check uses the descriptor's
    /// declared path, not the concrete path navigated to; the two are equal
    /// for a login route without parameters.
    pub fn is_login(&self, route: &RouteDescriptor) -> bool {
        route.name == self.login_route || route.path == self.login_path
    }

    /// Make sure both redirect targets exist in `table`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownRoute`] naming the first missing target.
    pub fn check_table(&self, table: &RouteTable) -> Result<(), RouteError> {
        for name in [&self.login_route, &self.dashboard_route] {
            if table.by_name(name).is_none() {
                return Err(RouteError::UnknownRoute(name.clone()));
            }
        }
        Ok(())
    }

    /// Decide the outcome of one transition attempt.
    pub fn evaluate<C>(&self, intent: NavigationIntent<'_>, credentials: &C) -> Outcome
    where
        C: CredentialProvider + ?Sized,
    {
        let to = intent.to;
        let from = intent.from.map_or("", |r| r.name.as_str());
        let authenticated = credentials.has_token();

        let outcome = if to.requires_auth && !authenticated {
            Outcome::Redirect { route: self.login_route.clone() }
        } else if self.is_login(to) && authenticated {
            Outcome::Redirect { route: self.dashboard_route.clone() }
        } else {
            Outcome::Allow
        };

        match &outcome {
            Outcome::Allow => tracing::debug!(to = %to.name, from, authenticated, "navigation allowed"),
            Outcome::Redirect { route } => {
                tracing::info!(to = %to.name, from, redirect = %route, "navigation redirected");
            }
        }
        outcome
    }
}
