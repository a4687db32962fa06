//! Error taxonomy for the whole pipeline.
//!
//! Every failure is local to one JSON node and carries the path to it; nothing
//! is recovered or retried, callers just propagate upward.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: missing required field `{field}`")]
    MissingField { path: NodePath, field: &'static str },

    #[error("{path}: unknown {kind} tag `{tag}`")]
    UnknownTag {
        path: NodePath,
        kind: &'static str,
        tag: String,
    },

    #[error("{path}: expected {expected}")]
    Shape {
        path: NodePath,
        expected: &'static str,
    },

    #[error("{path}: {feature} is not supported")]
    Unsupported {
        path: NodePath,
        feature: &'static str,
    },

    #[error("replace mode needs at least one pool, but `pools` is empty")]
    EmptyTable,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Path to a JSON node, rendered jq-style: `$.pools[0].conditions[2].term`.
///
/// Built top-down while decoding; child paths clone the rendered string, which
/// is fine for a single-pass compiler that only allocates on descent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(String);

impl NodePath {
    pub fn root() -> Self {
        NodePath("$".to_string())
    }

    pub fn field(&self, name: &str) -> Self {
        NodePath(format!("{}.{name}", self.0))
    }

    pub fn index(&self, i: usize) -> Self {
        NodePath(format!("{}[{i}]", self.0))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
