use std::{collections::BTreeMap, ops::Add};

use itertools::Itertools;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::*;
use crate::algo::{BipartiteTest, CycleMetrics};

/// Adjacency entries of a single vertex in insertion order
pub type Neighborhood<V> = SmallVec<[(V, Weight); 4]>;

/// A generic adjacency-list graph over value-labelled vertices.
///
/// The graph is parameterized at construction by a [`GraphKind`], which fixes whether it is
/// directed/weighted and which [`EdgePolicy`] guards its mutations.
#[derive(Clone, Debug)]
pub struct Graph<V: Vertex> {
    kind: GraphKind,
    adjacency: BTreeMap<V, Neighborhood<V>>,
}

/// Records which endpoints an edge insertion had to create, so it can be undone
#[derive(Debug, Copy, Clone, Default)]
struct Insertion {
    src_added: bool,
    dest_added: bool,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: Vertex> Graph<V> {
    /// Creates an empty graph of the given kind.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexLimit`] for [`GraphKind::Trivial`]: a trivial graph cannot
    /// exist without its vertex, use [`Graph::trivial`] instead.
    pub fn new(kind: GraphKind) -> Result<Self> {
        if kind.is_trivial() {
            return Err(GraphError::VertexLimit { kind });
        }
        Ok(Self::empty(kind))
    }

    fn empty(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: BTreeMap::new(),
        }
    }

    /// Creates an empty plain graph with the given flags
    pub fn with_flags(directed: bool, weighted: bool) -> Self {
        Self::empty(GraphKind::Custom { directed, weighted })
    }

    /// Creates an edgeless graph; adding edges fails
    pub fn null() -> Self {
        Self::empty(GraphKind::Null)
    }

    /// Creates a graph consisting of exactly the vertex `u`; adding edges or further vertices fails
    pub fn trivial(u: V) -> Self {
        let mut graph = Self::empty(GraphKind::Trivial);
        graph.insert_vertex(u);
        graph
    }

    pub fn undirected() -> Self {
        Self::empty(GraphKind::Undirected)
    }

    pub fn directed() -> Self {
        Self::empty(GraphKind::Directed)
    }

    pub fn connected() -> Self {
        Self::empty(GraphKind::Connected)
    }

    pub fn disconnected() -> Self {
        Self::empty(GraphKind::Disconnected)
    }

    /// Creates a complete graph; every added vertex is connected to all existing vertices
    pub fn complete() -> Self {
        Self::empty(GraphKind::Complete)
    }

    pub fn cyclic(directed: bool) -> Self {
        Self::empty(GraphKind::Cyclic { directed })
    }

    /// Creates a DAG; edges closing a directed cycle are rejected
    pub fn directed_acyclic() -> Self {
        Self::empty(GraphKind::DirectedAcyclic)
    }

    /// Creates a bipartite graph; edges closing an odd cycle are rejected
    pub fn bipartite() -> Self {
        Self::empty(GraphKind::Bipartite)
    }

    pub fn weighted(directed: bool) -> Self {
        Self::empty(GraphKind::Weighted { directed })
    }

    /// Creates a graph of the given kind and inserts all edges
    ///
    /// # Errors
    /// Fails for [`GraphKind::Trivial`] (see [`Graph::new`]) or if the kind rejects one of
    /// the edges.
    pub fn from_edges<I, E>(kind: GraphKind, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<V>>,
    {
        let mut graph = Self::new(kind)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Returns the kind this graph was constructed with
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns a map from each vertex to its adjacency entries
    pub fn adjacency(&self) -> &BTreeMap<V, Neighborhood<V>> {
        &self.adjacency
    }

    /// Inserts a vertex without consulting the edge policy
    fn insert_vertex(&mut self, u: V) -> bool {
        if self.adjacency.contains_key(&u) {
            return false;
        }
        self.adjacency.insert(u, Neighborhood::new());
        true
    }

    /// Inserts an edge without consulting the edge policy
    fn insert_edge(&mut self, u: V, v: V, weight: Weight) -> Insertion {
        trace!(src = ?u, dest = ?v, weight, "insert edge");
        let src_added = self.insert_vertex(u.clone());
        let dest_added = self.insert_vertex(v.clone());

        if self.kind.is_directed() {
            self.neighborhood_mut(&u).push((v, weight));
        } else {
            self.neighborhood_mut(&u).push((v.clone(), weight));
            self.neighborhood_mut(&v).push((u, weight));
        }

        Insertion {
            src_added,
            dest_added,
        }
    }

    /// Undoes the most recent `insert_edge(u, v, _)`
    fn undo_insertion(&mut self, u: &V, v: &V, insertion: Insertion) {
        debug!(src = ?u, dest = ?v, kind = %self.kind, "roll back edge");
        self.neighborhood_mut(u).pop();
        if !self.kind.is_directed() {
            self.neighborhood_mut(v).pop();
        }

        if insertion.dest_added {
            self.adjacency.remove(v);
        }
        if insertion.src_added {
            self.adjacency.remove(u);
        }
    }

    /// Inserts an edge and keeps it only if `holds` is still true afterwards
    fn insert_validated<P, E>(
        &mut self,
        u: V,
        v: V,
        weight: Weight,
        holds: P,
        violation: E,
    ) -> Result<()>
    where
        P: Fn(&Self) -> bool,
        E: FnOnce(&V, &V) -> GraphError,
    {
        let insertion = self.insert_edge(u.clone(), v.clone(), weight);
        if holds(self) {
            return Ok(());
        }

        self.undo_insertion(&u, &v, insertion);
        let err = violation(&u, &v);
        warn!(%err, "rejected edge");
        Err(err)
    }

    fn neighborhood_mut(&mut self, u: &V) -> &mut Neighborhood<V> {
        self.adjacency.entry(u.clone()).or_default()
    }

    /// Merges `other` into this graph.
    ///
    /// All vertices of `other` are added, followed by every edge of `other` whose destination
    /// is not yet a neighbor of its source. Edges pass through [`GraphEditing::add_edge`], so the
    /// policy of this graph applies.
    ///
    /// # Errors
    /// Returns [`GraphError::IncompatibleJoin`] (before mutating anything) if directedness or
    /// weightedness differ, and forwards rejections of this graph's policy.
    pub fn join(&mut self, other: &Self) -> Result<()> {
        if self.is_directed() != other.is_directed() {
            return Err(GraphError::IncompatibleJoin {
                reason: "directed and undirected graphs",
            });
        }
        if self.is_weighted() != other.is_weighted() {
            return Err(GraphError::IncompatibleJoin {
                reason: "weighted and unweighted graphs",
            });
        }

        for u in other.vertices() {
            self.add_vertex(u.clone())?;
        }

        for Edge { src, dest, weight } in other.edges() {
            if !self.has_edge(&src, &dest) {
                self.add_edge(src, dest, weight)?;
            }
        }

        Ok(())
    }

    /// Returns a new plain graph containing the union of both graphs; neither operand is modified.
    ///
    /// # Errors
    /// Returns [`GraphError::IncompatibleJoin`] if directedness or weightedness differ.
    pub fn union(&self, other: &Self) -> Result<Self> {
        let mut result = Self::with_flags(self.is_directed(), self.is_weighted());
        for u in self.vertices() {
            result.insert_vertex(u.clone());
        }
        for Edge { src, dest, weight } in self.edges() {
            result.insert_edge(src, dest, weight);
        }

        result.join(other)?;
        Ok(result)
    }
}

impl<V: Vertex> GraphType for Graph<V> {
    fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    fn is_weighted(&self) -> bool {
        self.kind.is_weighted()
    }
}

impl<V: Vertex> GraphOrder for Graph<V> {
    type V = V;

    fn number_of_vertices(&self) -> NumVertices {
        self.adjacency.len()
    }

    fn number_of_edges(&self) -> NumEdges {
        let entries: NumEdges = self.adjacency.values().map(|nbs| nbs.len()).sum();
        if self.is_directed() {
            entries
        } else {
            entries / 2
        }
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    fn vertex_ref(&self, u: &V) -> Option<&V> {
        self.adjacency.get_key_value(u).map(|(key, _)| key)
    }

    fn has_vertex(&self, u: &V) -> bool {
        self.adjacency.contains_key(u)
    }
}

impl<V: Vertex> AdjacencyList for Graph<V> {
    fn adjacency_of(&self, u: &V) -> &[(V, Weight)] {
        self.adjacency
            .get(u)
            .map(|nbs| nbs.as_slice())
            .unwrap_or_default()
    }
}

impl<V: Vertex> GraphEditing for Graph<V> {
    fn add_vertex(&mut self, u: V) -> Result<bool> {
        if self.has_vertex(&u) {
            return Ok(false);
        }

        if self.kind.is_trivial() {
            warn!(vertex = ?u, "trivial graph rejects a second vertex");
            return Err(GraphError::VertexLimit { kind: self.kind });
        }

        if self.kind.edge_policy() == EdgePolicy::AutoComplete {
            let existing = self.adjacency.keys().cloned().collect_vec();
            debug!(vertex = ?u, degree = existing.len(), "connect new vertex to all others");
            self.insert_vertex(u.clone());
            for v in existing {
                self.insert_edge(v, u.clone(), DEFAULT_WEIGHT);
            }
        } else {
            self.insert_vertex(u);
        }

        Ok(true)
    }

    fn add_edge(&mut self, u: V, v: V, weight: Weight) -> Result<()> {
        match self.kind.edge_policy() {
            EdgePolicy::ForbidEdges => {
                warn!(src = ?u, dest = ?v, kind = %self.kind, "edges are forbidden");
                Err(GraphError::EdgesForbidden { kind: self.kind })
            }
            EdgePolicy::None | EdgePolicy::AutoComplete => {
                self.insert_edge(u, v, weight);
                Ok(())
            }
            EdgePolicy::RejectsCycle => self.insert_validated(
                u,
                v,
                weight,
                |graph| graph.is_acyclic(),
                |u, v| GraphError::WouldCreateCycle {
                    src: format!("{u:?}"),
                    dest: format!("{v:?}"),
                },
            ),
            EdgePolicy::RejectsOddCycle => self.insert_validated(
                u,
                v,
                weight,
                |graph| graph.is_bipartite(),
                |u, v| GraphError::WouldBreakBipartition {
                    src: format!("{u:?}"),
                    dest: format!("{v:?}"),
                },
            ),
        }
    }

    fn delete_vertex(&mut self, u: &V) -> bool {
        if !self.has_vertex(u) {
            return false;
        }

        if self.kind.is_trivial() {
            warn!(vertex = ?u, "trivial graph keeps its only vertex");
            return false;
        }

        self.adjacency.remove(u);
        for nbs in self.adjacency.values_mut() {
            nbs.retain(|(v, _)| v != u);
        }

        true
    }

    fn delete_edge(&mut self, u: &V, v: &V) -> bool {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return false;
        }

        let nbs = self.neighborhood_mut(u);
        let before = nbs.len();
        nbs.retain(|(x, _)| x != v);
        let found = nbs.len() != before;

        if self.is_undirected() {
            self.neighborhood_mut(v).retain(|(x, _)| x != u);
        }

        found
    }
}

impl<V: Vertex> Add<&Graph<V>> for &Graph<V> {
    type Output = Result<Graph<V>>;

    fn add(self, rhs: &Graph<V>) -> Self::Output {
        self.union(rhs)
    }
}
