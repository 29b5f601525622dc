//! Minimal host that runs the guard and commits navigations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for the browser router when driving the guard from the CLI or
//! tests: resolve a path, ask the guard, follow redirects by route name, then
//! commit. Redirect targets are run through the guard again, the same way the
//! browser router re-enters its hooks on a redirect.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;

use crate::credential::CredentialProvider;
use crate::guard::{NavigationGuard, NavigationIntent, Outcome};
use crate::routes::{Params, ResolvedRoute, RouteError, RouteTable};

/// Redirects followed in one navigation before giving up.
pub const MAX_REDIRECTS: usize = 8;

/// Errors produced while navigating.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches path '{0}'")]
    NoMatch(String),

    #[error("redirect target '{0}' is not in the route table")]
    UnknownRedirect(String),

    #[error("redirect loop after {} hops: {}", .chain.len(), .chain.join(" -> "))]
    RedirectLoop { chain: Vec<String> },

    #[error(transparent)]
    Route(#[from] RouteError),
}

/// A committed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: ResolvedRoute,
    /// Route names redirected through, in order.
    pub redirects: Vec<String>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

pub struct Navigator<C> {
    table: RouteTable,
    guard: NavigationGuard,
    credentials: C,
    current: Option<ResolvedRoute>,
}

impl<C: CredentialProvider> Navigator<C> {
    pub fn new(table: RouteTable, guard: NavigationGuard, credentials: C) -> Self {
        Self { table, guard, credentials, current: None }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Route committed by the last successful navigation.
    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    /// Evaluate one guard step for `path` from the current route, without
    /// following redirects or committing.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoMatch`] when no route matches `path`.
    pub fn check(&self, path: &str) -> Result<Outcome, NavigationError> {
        let to = self.resolve(path)?;
        Ok(self.evaluate(&to))
    }

    /// Navigate to a concrete path.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] when the path matches nothing, a redirect
    /// names an unknown route, or redirects do not settle within
    /// [`MAX_REDIRECTS`] hops.
    pub fn navigate(&mut self, path: &str) -> Result<Navigation, NavigationError> {
        let mut target = self.resolve(path)?;
        let mut redirects = Vec::new();

        while let Outcome::Redirect { route } = self.evaluate(&target) {
            if redirects.len() >= MAX_REDIRECTS {
                redirects.push(route);
                tracing::warn!(path, chain = ?redirects, "redirect loop");
                return Err(NavigationError::RedirectLoop { chain: redirects });
            }
            target = self.table.resolve_named(&route, &Params::new()).map_err(|e| match e {
                RouteError::UnknownRoute(name) => NavigationError::UnknownRedirect(name),
                other => NavigationError::Route(other),
            })?;
            redirects.push(route);
        }

        tracing::debug!(path = %target.path, route = %target.name(), redirects = redirects.len(), "navigation committed");
        self.current = Some(target.clone());
        Ok(Navigation { route: target, redirects })
    }

    /// Navigate to a route by name.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Route`] when the name is unknown or a
    /// parameter is missing, otherwise as [`Navigator::navigate`].
    pub fn navigate_named(&mut self, name: &str, params: &Params) -> Result<Navigation, NavigationError> {
        let href = self.table.href(name, params)?;
        self.navigate(&href)
    }

    fn resolve(&self, path: &str) -> Result<ResolvedRoute, NavigationError> {
        self.table.resolve(path).ok_or_else(|| NavigationError::NoMatch(path.to_owned()))
    }

    fn evaluate(&self, to: &ResolvedRoute) -> Outcome {
        let from = self.current.as_ref().map(|r| &r.descriptor);
        self.guard.evaluate(NavigationIntent::new(&to.descriptor, from), &self.credentials)
    }
}
