//! Exact-match lookup contract shared by the definition and response trees.
//!
//! Missing nodes are an expected, recoverable condition. Two or more nodes
//! sharing an id is an integrity defect and must never be resolved by
//! silently picking the first match.

use std::fmt;
use thiserror::Error;

/// The tree level a lookup was addressed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Section,
    Page,
    Question,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Section => "section",
            NodeKind::Page => "page",
            NodeKind::Question => "question",
        };
        write!(f, "{}", s)
    }
}

/// Failure modes of an id lookup against either tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No node with the requested id exists at this level.
    #[error("{kind} not found: {id}")]
    NotFound { kind: NodeKind, id: String },

    /// More than one node carries the requested id. Integrity defect.
    #[error("{kind} id '{id}' matches {count} nodes")]
    Ambiguous {
        kind: NodeKind,
        id: String,
        count: usize,
    },
}

impl LookupError {
    /// Returns true for the ambiguous-reference defect case.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, LookupError::Ambiguous { .. })
    }
}

/// Resolves an id against a node list: exactly one match or an error.
pub(crate) fn resolve_single<'a, T>(
    nodes: &'a [T],
    id: &str,
    kind: NodeKind,
    node_id: impl Fn(&T) -> &str,
) -> Result<&'a T, LookupError> {
    let mut matches = nodes.iter().filter(|n| node_id(n) == id);
    match (matches.next(), matches.next()) {
        (None, _) => Err(LookupError::NotFound {
            kind,
            id: id.to_string(),
        }),
        (Some(node), None) => Ok(node),
        (Some(_), Some(_)) => Err(LookupError::Ambiguous {
            kind,
            id: id.to_string(),
            count: nodes.iter().filter(|n| node_id(n) == id).count(),
        }),
    }
}

/// Resolves an id where absence is a normal outcome. Ambiguity still errors.
pub(crate) fn resolve_optional<'a, T>(
    nodes: &'a [T],
    id: &str,
    kind: NodeKind,
    node_id: impl Fn(&T) -> &str,
) -> Result<Option<&'a T>, LookupError> {
    match resolve_single(nodes, id, kind, node_id) {
        Ok(node) => Ok(Some(node)),
        Err(LookupError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
