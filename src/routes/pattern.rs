//! Path patterns with named `:param` segments.
//!
//! DESIGN
//! ======
//! A pattern is a list of segments, each either literal text or a named
//! parameter. Empty segments are ignored on both sides, so trailing slashes
//! and doubled slashes do not affect matching. Literal segments match without
//! regard to ASCII case. Parameter values are percent-decoded on capture and
//! percent-encoded again when a path is built.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

use super::RouteError;

/// Concrete parameter values keyed by parameter name.
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// Parsed form of a route path such as `/assets/:id/edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a route path.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] when the path does not start with
    /// `/`, or a parameter name is empty or repeated.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        if !raw.starts_with('/') {
            return Err(invalid(raw, "must start with '/'"));
        }

        let mut segments = Vec::new();
        for part in split_segments(raw) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid(raw, "empty parameter name"));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(p) if p == name)) {
                    return Err(invalid(raw, "duplicate parameter name"));
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Static(part.to_owned()));
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match a concrete path, returning the captured parameters on success.
    /// Any query string or fragment on `path` is ignored.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split_segments(strip_query(path)).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), decode_segment(part));
                }
            }
        }
        Some(params)
    }

    /// Per-segment rank used to order competing matches. Literal segments
    /// outrank parameters at the same position.
    pub(crate) fn specificity(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Static(_) => 2,
                Segment::Param(_) => 1,
            })
            .collect()
    }

    /// Fill parameters into the pattern. On failure returns the name of the
    /// first missing parameter.
    pub fn build<'a>(&'a self, params: &Params) -> Result<String, &'a str> {
        if self.segments.is_empty() {
            return Ok("/".to_owned());
        }

        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(text) => out.push_str(text),
                Segment::Param(name) => match params.get(name) {
                    Some(value) => out.push_str(&urlencoding::encode(value)),
                    None => return Err(name.as_str()),
                },
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn invalid(raw: &str, reason: &'static str) -> RouteError {
    RouteError::InvalidPattern { pattern: raw.to_owned(), reason }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Undecodable input (invalid UTF-8 after decoding) is kept as written.
fn decode_segment(part: &str) -> String {
    match urlencoding::decode(part) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => part.to_owned(),
    }
}

fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}
