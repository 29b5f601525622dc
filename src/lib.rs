//! # asset-router
//!
//! Route table and navigation guard for the asset management admin console.
//!
//! The crate holds the declarative route table (paths, names, opaque view
//! references, `requiresAuth` flags), the guard that keeps signed-out users
//! off protected pages and signed-in users off the login page, and the hosts
//! that drive it: a small [`navigator::Navigator`] for the CLI and tests, and
//! a Leptos effect in [`web`] for the browser client.

pub mod config;
pub mod credential;
pub mod guard;
pub mod logging;
pub mod navigator;
pub mod routes;
pub mod web;

pub use config::RouterConfig;
pub use credential::{CredentialProvider, FileCredentials, LocalStorageCredentials, MemoryCredentials};
pub use guard::{NavigationGuard, NavigationIntent, Outcome};
pub use navigator::{Navigation, NavigationError, Navigator};
pub use routes::{ResolvedRoute, RouteDescriptor, RouteError, RouteTable};
