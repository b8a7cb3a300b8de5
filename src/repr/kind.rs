use std::fmt::Display;

/// The named kinds of graphs.
///
/// A kind fixes the directedness/weightedness of a graph at construction and selects the
/// [`EdgePolicy`] that is consulted whenever the graph is mutated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Vertices but no edges
    Null,
    /// Exactly one vertex and no edges
    Trivial,
    Undirected,
    Directed,
    /// Label only: connectivity is queried, not enforced
    Connected,
    /// Label only: connectivity is queried, not enforced
    Disconnected,
    /// Every pair of distinct vertices is connected
    Complete,
    /// Label only: cycles are queried via `has_cycle`
    Cyclic { directed: bool },
    /// Directed graph rejecting edges that close a cycle
    DirectedAcyclic,
    /// Undirected graph rejecting edges that close an odd cycle
    Bipartite,
    Weighted { directed: bool },
    /// Plain graph with arbitrary flags, e.g. the result of a union
    Custom { directed: bool, weighted: bool },
}

/// How a graph validates mutations
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Every edge is accepted
    None,
    /// Every edge is rejected
    ForbidEdges,
    /// New vertices are connected to all existing vertices
    AutoComplete,
    /// Edges are rolled back if the graph stops being acyclic
    RejectsCycle,
    /// Edges are rolled back if the graph stops being bipartite
    RejectsOddCycle,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        match *self {
            GraphKind::Directed | GraphKind::DirectedAcyclic => true,
            GraphKind::Cyclic { directed } | GraphKind::Weighted { directed } => directed,
            GraphKind::Custom { directed, .. } => directed,
            _ => false,
        }
    }

    pub fn is_weighted(&self) -> bool {
        match *self {
            GraphKind::Weighted { .. } => true,
            GraphKind::Custom { weighted, .. } => weighted,
            _ => false,
        }
    }

    /// Returns the policy applied by `add_vertex`/`add_edge`
    pub fn edge_policy(&self) -> EdgePolicy {
        match self {
            GraphKind::Null | GraphKind::Trivial => EdgePolicy::ForbidEdges,
            GraphKind::Complete => EdgePolicy::AutoComplete,
            GraphKind::DirectedAcyclic => EdgePolicy::RejectsCycle,
            GraphKind::Bipartite => EdgePolicy::RejectsOddCycle,
            _ => EdgePolicy::None,
        }
    }

    /// Returns *true* if the kind limits the graph to a single vertex
    pub fn is_trivial(&self) -> bool {
        matches!(self, GraphKind::Trivial)
    }

    /// Human readable name, e.g. `"Directed Acyclic Graph"`
    pub fn name(&self) -> &'static str {
        match self {
            GraphKind::Null => "Null Graph",
            GraphKind::Trivial => "Trivial Graph",
            GraphKind::Undirected => "Undirected Graph",
            GraphKind::Directed => "Directed Graph",
            GraphKind::Connected => "Connected Graph",
            GraphKind::Disconnected => "Disconnected Graph",
            GraphKind::Complete => "Complete Graph",
            GraphKind::Cyclic { .. } => "Cyclic Graph",
            GraphKind::DirectedAcyclic => "Directed Acyclic Graph",
            GraphKind::Bipartite => "Bipartite Graph",
            GraphKind::Weighted { .. } => "Weighted Graph",
            GraphKind::Custom { .. } => "Graph",
        }
    }
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert!(GraphKind::DirectedAcyclic.is_directed());
        assert!(!GraphKind::Bipartite.is_directed());
        assert!(GraphKind::Cyclic { directed: true }.is_directed());
        assert!(!GraphKind::Cyclic { directed: false }.is_weighted());
        assert!(GraphKind::Weighted { directed: false }.is_weighted());
        assert!(
            GraphKind::Custom {
                directed: true,
                weighted: true
            }
            .is_weighted()
        );
    }

    #[test]
    fn policies() {
        assert_eq!(GraphKind::Null.edge_policy(), EdgePolicy::ForbidEdges);
        assert_eq!(GraphKind::Trivial.edge_policy(), EdgePolicy::ForbidEdges);
        assert_eq!(GraphKind::Complete.edge_policy(), EdgePolicy::AutoComplete);
        assert_eq!(
            GraphKind::DirectedAcyclic.edge_policy(),
            EdgePolicy::RejectsCycle
        );
        assert_eq!(
            GraphKind::Bipartite.edge_policy(),
            EdgePolicy::RejectsOddCycle
        );
        assert_eq!(GraphKind::Connected.edge_policy(), EdgePolicy::None);
    }
}
