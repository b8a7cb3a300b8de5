/*!
# Errors

All fallible graph operations return [`Result<T>`] carrying a [`GraphError`].

Errors fall into the categories given by [`ErrorCategory`]:
- **NotFound**: a vertex referenced by the call is not part of the graph,
- **InvalidOperation**: the request violates a structural property of the graph
  (edges in a null graph, incompatible joins, a cycle in a DAG, ...),
- **Io**: a render sink failed to write.

Removal of vertices/edges does not raise; it reports absence via a `bool`.
*/

use thiserror::Error;

use crate::repr::GraphKind;

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NotFound,
    InvalidOperation,
    Io,
}

/// Errors that can occur during graph operations
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} not found in graph")]
    VertexNotFound(String),

    #[error("cannot add edges to a {kind}")]
    EdgesForbidden { kind: GraphKind },

    #[error("a {kind} holds exactly one vertex")]
    VertexLimit { kind: GraphKind },

    #[error("cannot join {reason}")]
    IncompatibleJoin { reason: &'static str },

    #[error("adding edge {src} -> {dest} would create a cycle in a DAG")]
    WouldCreateCycle { src: String, dest: String },

    #[error("adding edge {src} -- {dest} would break the bipartite property")]
    WouldBreakBipartition { src: String, dest: String },

    #[error("failed to render graph: {0}")]
    Render(#[from] std::io::Error),
}

impl GraphError {
    /// Returns the category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            GraphError::VertexNotFound(_) => ErrorCategory::NotFound,
            GraphError::Render(_) => ErrorCategory::Io,
            _ => ErrorCategory::InvalidOperation,
        }
    }

    /// Returns *true* if the error references a missing vertex
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// Returns *true* if the error rejects a structurally invalid request
    pub fn is_invalid_operation(&self) -> bool {
        self.category() == ErrorCategory::InvalidOperation
    }

    pub(crate) fn not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::VertexNotFound(format!("{vertex:?}"))
    }
}

/// Result type used throughout this crate
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert!(GraphError::not_found(&3).is_not_found());
        assert!(
            GraphError::EdgesForbidden {
                kind: GraphKind::Null
            }
            .is_invalid_operation()
        );
        assert!(
            GraphError::IncompatibleJoin {
                reason: "directed and undirected graphs"
            }
            .is_invalid_operation()
        );
        let io = GraphError::from(std::io::Error::other("closed"));
        assert_eq!(io.category(), ErrorCategory::Io);
    }

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::not_found(&"x").to_string(),
            "vertex \"x\" not found in graph"
        );
        assert_eq!(
            GraphError::EdgesForbidden {
                kind: GraphKind::Null
            }
            .to_string(),
            "cannot add edges to a Null Graph"
        );
    }
}
