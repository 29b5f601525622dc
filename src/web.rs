//! Leptos wiring for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should share one guard effect so every page applies
//! identical redirect behavior. The browser router still owns matching views
//! and committing transitions; this module only redirects.
//!
//! TRADE-OFFS
//! ==========
//! `install_navigation_guard` needs a live router context, so its effect runs
//! only in the browser. The effect body is [`apply_redirect`], which the unit
//! tests drive directly with a recording `navigate` callback.

#[cfg(test)]
#[path = "web_test.rs"]
mod tests;

use std::sync::Arc;

use leptos::prelude::{Effect, Get};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::credential::CredentialProvider;
use crate::guard::{NavigationGuard, NavigationIntent, Outcome};
use crate::routes::{Params, RouteTable};

/// Route table, guard and token source bundled for a browser host.
pub struct RouteGate<C> {
    pub table: RouteTable,
    pub guard: NavigationGuard,
    pub credentials: C,
}

impl<C: CredentialProvider> RouteGate<C> {
    pub fn new(table: RouteTable, guard: NavigationGuard, credentials: C) -> Self {
        Self { table, guard, credentials }
    }

    /// Path to redirect to for a browser location, or `None` to stay.
    /// Unknown paths are left to the router's fallback view.
    pub fn redirect_for(&self, path: &str) -> Option<String> {
        let to = self.table.resolve(path)?;
        match self.guard.evaluate(NavigationIntent::to(&to.descriptor), &self.credentials) {
            Outcome::Allow => None,
            Outcome::Redirect { route } => match self.table.href(&route, &Params::new()) {
                Ok(href) => Some(href),
                Err(e) => {
                    tracing::warn!(error = %e, path, "guard redirect target unavailable");
                    None
                }
            },
        }
    }
}

/// Redirect whenever the router location lands somewhere the guard rejects.
pub fn install_navigation_guard<C, F>(gate: Arc<RouteGate<C>>, navigate: F)
where
    C: CredentialProvider + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        apply_redirect(&*gate, &path, &navigate);
    });
}

/// Send the router to the guard's redirect for `path`, replacing the current
/// history entry. Returns whether a redirect was issued.
pub fn apply_redirect<C, F>(gate: &RouteGate<C>, path: &str, navigate: &F) -> bool
where
    C: CredentialProvider,
    F: Fn(&str, NavigateOptions),
{
    match gate.redirect_for(path) {
        Some(target) => {
            tracing::debug!(from = path, to = %target, "guard redirect");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            true
        }
        None => false,
    }
}
