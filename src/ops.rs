use itertools::Itertools;

use crate::*;

/// Provides the fixed flags of a graph
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if edge weights are meaningful for this graph.
    /// Weights are stored either way; this only changes how the graph is presented.
    fn is_weighted(&self) -> bool;

    /// Returns *true* if edges have no orientation
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the vertex-set and edge-count of a graph
pub trait GraphOrder {
    /// The vertex type of the graph
    type V: Vertex;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of edges of the graph.
    /// Undirected edges are counted once even though they are stored at both endpoints.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over V in ascending order
    fn vertices(&self) -> impl Iterator<Item = &Self::V> + '_;

    /// Returns the graph's own copy of `u` if `u` is a vertex of the graph.
    ///
    /// Algorithms use it to hold references that live as long as the graph borrow.
    fn vertex_ref(&self, u: &Self::V) -> Option<&Self::V>;

    /// Returns *true* if `u` is a vertex of the graph
    fn has_vertex(&self, u: &Self::V) -> bool {
        self.vertex_ref(u).is_some()
    }

    /// Returns `Ok(())` if `u` is a vertex of the graph and [`GraphError::VertexNotFound`] otherwise
    fn ensure_vertex(&self, u: &Self::V) -> Result<()> {
        if self.has_vertex(u) {
            Ok(())
        } else {
            Err(GraphError::not_found(u))
        }
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphOrder + GraphType + Sized {
    /// Returns the stored `(neighbor, weight)` entries of `u` in insertion order.
    /// Returns an empty slice if `u` is not a vertex.
    ///
    /// For directed graphs these are the out-neighbors.
    fn adjacency_of(&self, u: &Self::V) -> &[(Self::V, Weight)];

    /// Returns an iterator over the (open) neighborhood of a given vertex in insertion order.
    /// Parallel edges yield the neighbor multiple times.
    fn neighbors_of(&self, u: &Self::V) -> impl Iterator<Item = &Self::V> + '_ {
        self.adjacency_of(u).iter().map(|(v, _)| v)
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of `u` in insertion order
    fn weighted_neighbors_of(&self, u: &Self::V) -> impl Iterator<Item = (&Self::V, Weight)> + '_ {
        self.adjacency_of(u).iter().map(|(v, w)| (v, *w))
    }

    /// Returns *true* if an edge `u -> v` is stored
    fn has_edge(&self, u: &Self::V, v: &Self::V) -> bool {
        self.neighbors_of(u).any(|x| x == v)
    }

    /// Returns the number of (outgoing) adjacency entries of `u`
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `u` is not a vertex.
    fn degree_of(&self, u: &Self::V) -> Result<NumVertices> {
        self.ensure_vertex(u)?;
        Ok(self.adjacency_of(u).len())
    }

    /// Returns the number of edges pointing at `u`.
    /// For undirected graphs this equals [`AdjacencyList::degree_of`].
    ///
    /// Computed by scanning all adjacency lists in `O(V + E)`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `u` is not a vertex.
    fn in_degree_of(&self, u: &Self::V) -> Result<NumVertices> {
        if self.is_undirected() {
            return self.degree_of(u);
        }

        self.ensure_vertex(u)?;
        Ok(self
            .vertices()
            .map(|x| self.neighbors_of(x).filter(|&v| v == u).count())
            .sum())
    }

    /// Returns an iterator over the degrees of all vertices in vertex order
    fn degrees(&self) -> impl Iterator<Item = NumVertices> + '_ {
        self.vertices().map(|u| self.adjacency_of(u).len())
    }

    /// Returns the minimum degree in the graph (0 if there are no vertices)
    fn min_degree(&self) -> NumVertices {
        self.degrees().min().unwrap_or(0)
    }

    /// Returns the maximum degree in the graph (0 if there are no vertices)
    fn max_degree(&self) -> NumVertices {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a distribution `(degree, number of vertices)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumVertices, NumVertices)> {
        self.degrees().counts().into_iter().sorted().collect_vec()
    }

    /// Returns an iterator over all edges where each edge is reported exactly once.
    ///
    /// In undirected graphs an edge `{u, v}` is reported as `(u, v)` with `u < v`;
    /// a self-loop (stored twice at its vertex) is reported once per insertion.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::V>> + '_ {
        let directed = self.is_directed();
        self.vertices().flat_map(move |u| {
            let mut loops = 0usize;
            self.adjacency_of(u).iter().filter_map(move |(v, w)| {
                if directed || u < v {
                    return Some(Edge::new(u.clone(), v.clone(), *w));
                }
                if u == v {
                    loops += 1;
                    if loops % 2 == 1 {
                        return Some(Edge::new(u.clone(), v.clone(), *w));
                    }
                }
                None
            })
        })
    }

    /// Returns all edges (as by [`AdjacencyList::edges`]) in sorted order
    fn ordered_edges(&self) -> Vec<Edge<Self::V>> {
        self.edges().sorted().collect_vec()
    }
}

/// Provides functions to insert/delete vertices and edges
pub trait GraphEditing: AdjacencyList {
    /// Adds a vertex to the graph.
    /// Returns `Ok(true)` if the vertex was newly inserted and `Ok(false)` if it already existed.
    ///
    /// # Errors
    /// Implementations may reject vertices that would violate a structural invariant.
    fn add_vertex(&mut self, u: Self::V) -> Result<bool>;

    /// Adds multiple vertices, stopping at the first rejected one
    ///
    /// # Errors
    /// Forwards the first error of [`GraphEditing::add_vertex`].
    fn add_vertices<I>(&mut self, vertices: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::V>,
    {
        for u in vertices {
            self.add_vertex(u)?;
        }
        Ok(())
    }

    /// Adds the edge `(u, v)` with the given weight, inserting missing endpoints.
    ///
    /// # Errors
    /// Implementations may reject edges that would violate a structural invariant.
    /// A rejected edge leaves the graph unchanged.
    fn add_edge(&mut self, u: Self::V, v: Self::V, weight: Weight) -> Result<()>;

    /// Adds the edge `(u, v)` with [`DEFAULT_WEIGHT`]
    ///
    /// # Errors
    /// See [`GraphEditing::add_edge`].
    fn add_unweighted_edge(&mut self, u: Self::V, v: Self::V) -> Result<()> {
        self.add_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Adds all edges of an iterator, stopping at the first rejected one
    ///
    /// # Errors
    /// Forwards the first error of [`GraphEditing::add_edge`].
    fn add_edges<I, E>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::V>>,
    {
        for e in edges {
            let Edge { src, dest, weight } = e.into();
            self.add_edge(src, dest, weight)?;
        }
        Ok(())
    }

    /// Deletes a vertex together with every edge incident to it.
    /// Returns *true* if the vertex existed and was deleted.
    fn delete_vertex(&mut self, u: &Self::V) -> bool;

    /// Deletes the edge `(u, v)` (all parallel copies).
    /// Returns *true* if an entry `u -> v` existed and was deleted.
    fn delete_edge(&mut self, u: &Self::V, v: &Self::V) -> bool;
}
