//! Declarative route table for the admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table maps URL paths to opaque view references plus a single metadata
//! flag (`requiresAuth`). It is data supplied by the application, built once
//! at startup and never mutated; the navigation guard and its hosts only read
//! it.
//!
//! DESIGN
//! ======
//! Resolution picks the most specific matching pattern (literal segments
//! beat parameters, position by position) and falls back to declaration order
//! on ties, so `/assets/scanner` wins over `/assets/:id`. Literal segments
//! compare case-insensitively and captured parameters are percent-decoded,
//! the same way the browser router treats them.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub mod pattern;
mod table;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use pattern::{Params, PathPattern, Segment};
pub use table::LAYOUT_ROUTE;

/// Errors produced while building or querying a route table.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// A route path could not be parsed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    /// A route was declared without a name.
    #[error("route name must not be empty (path '{path}')")]
    EmptyName { path: String },

    /// Two routes share a name.
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    /// A lookup named a route that is not in the table.
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    /// Building a path for a route left a parameter unfilled.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    /// A route file had an extension other than json/yaml/yml.
    #[error("unsupported route file format: {0}")]
    UnsupportedFormat(String),

    #[error("route file read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON route table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML route table: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One entry of the navigation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    /// Opaque reference to the view the host renders for this route.
    #[serde(default)]
    pub view: String,
    #[serde(default)]
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), view: view.into(), requires_auth: false }
    }

    /// Mark the route as reachable only with a stored credential.
    #[must_use]
    pub fn protected(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// A descriptor matched against a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub descriptor: RouteDescriptor,
    /// The concrete path that was navigated to.
    pub path: String,
    pub params: Params,
}

impl ResolvedRoute {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

#[derive(Debug, Clone)]
struct Entry {
    descriptor: RouteDescriptor,
    pattern: PathPattern,
}

/// Immutable, validated set of route descriptors.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Validate and index a list of descriptors.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] for an unparsable path, an empty name, or a
    /// name used twice.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteError> {
        let mut entries = Vec::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());

        for descriptor in routes {
            if descriptor.name.trim().is_empty() {
                return Err(RouteError::EmptyName { path: descriptor.path });
            }
            let pattern = PathPattern::parse(&descriptor.path)?;
            if by_name.insert(descriptor.name.clone(), entries.len()).is_some() {
                return Err(RouteError::DuplicateName(descriptor.name));
            }
            entries.push(Entry { descriptor, pattern });
        }

        Ok(Self { entries, by_name })
    }

    /// The admin console's own route list.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`RouteTable::new`].
    pub fn application() -> Result<Self, RouteError> {
        Self::new(table::application_routes())
    }

    /// Parse a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] for malformed JSON or an invalid table.
    pub fn from_json(raw: &str) -> Result<Self, RouteError> {
        let routes: Vec<RouteDescriptor> = serde_json::from_str(raw)?;
        Self::new(routes)
    }

    /// Parse a YAML sequence of descriptors.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] for malformed YAML or an invalid table.
    pub fn from_yaml(raw: &str) -> Result<Self, RouteError> {
        let routes: Vec<RouteDescriptor> = serde_yaml::from_str(raw)?;
        Self::new(routes)
    }

    /// Load a route file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] when the file cannot be read, has an
    /// unsupported extension, or does not describe a valid table.
    pub fn load(path: &Path) -> Result<Self, RouteError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let raw = match ext.as_str() {
            "json" | "yaml" | "yml" => std::fs::read_to_string(path)?,
            _ => return Err(RouteError::UnsupportedFormat(path.display().to_string())),
        };

        let table = if ext == "json" { Self::from_json(&raw)? } else { Self::from_yaml(&raw)? };
        tracing::debug!(path = %path.display(), routes = table.len(), "route table loaded");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.by_name.get(name).map(|&idx| &self.entries[idx].descriptor)
    }

    /// Match a concrete path against the table.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let mut best: Option<(Vec<u8>, &Entry, Params)> = None;

        for entry in &self.entries {
            let Some(params) = entry.pattern.matches(path) else {
                continue;
            };
            let rank = entry.pattern.specificity();
            let better = match &best {
                Some((best_rank, _, _)) => rank > *best_rank,
                None => true,
            };
            if better {
                best = Some((rank, entry, params));
            }
        }

        best.map(|(_, entry, params)| ResolvedRoute {
            descriptor: entry.descriptor.clone(),
            path: path.to_owned(),
            params,
        })
    }

    /// Resolve a route by name, filling its path from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownRoute`] or [`RouteError::MissingParam`].
    pub fn resolve_named(&self, name: &str, params: &Params) -> Result<ResolvedRoute, RouteError> {
        let entry = self.entry(name)?;
        let path = build_path(entry, params)?;
        let params = entry
            .pattern
            .param_names()
            .filter_map(|key| params.get(key).map(|value| (key.to_owned(), value.clone())))
            .collect();
        Ok(ResolvedRoute { descriptor: entry.descriptor.clone(), path, params })
    }

    /// Concrete path for a named route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownRoute`] or [`RouteError::MissingParam`].
    pub fn href(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        build_path(self.entry(name)?, params)
    }

    fn entry(&self, name: &str) -> Result<&Entry, RouteError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| RouteError::UnknownRoute(name.to_owned()))
    }
}

fn build_path(entry: &Entry, params: &Params) -> Result<String, RouteError> {
    entry.pattern.build(params).map_err(|param| RouteError::MissingParam {
        route: entry.descriptor.name.clone(),
        param: param.to_owned(),
    })
}
