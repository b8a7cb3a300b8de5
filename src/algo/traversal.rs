/*!
Graph traversal algorithms and traversal-derived structures.

This module provides:
- Lazy traversal iterators: [`BfsSearch`] yields [`BfsItem`]s (vertex, predecessor, level),
  [`DfsSearch`] yields [`DfsEvent`]s (discovery and finish of each vertex).
- [`TraversalTree`], the spanning tree implied by a finished traversal.
- A high-level [`Traversal`] trait that exposes traversals directly as methods on graphs.

Both searches keep their frontier in explicit containers (a queue for BFS, a stack of
frames for DFS), so traversal depth is bounded by the heap and not by the call stack.
Neighbors are explored in insertion order.
*/

use super::*;
use fxhash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Item yielded by a [`BfsSearch`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BfsItem<V> {
    pub vertex: V,
    /// Parent in the BFS tree; `None` for (re)start vertices
    pub predecessor: Option<V>,
    /// Number of edges between the start vertex and `vertex`
    pub level: NumVertices,
}

/// Breadth-first search over the (out-)neighborhoods of a graph.
///
/// Every vertex is reported at most once. Items are produced level by level;
/// within a level, vertices appear in the order they were discovered.
pub struct BfsSearch<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: FxHashSet<&'a G::V>,
    queue: VecDeque<BfsItem<&'a G::V>>,
    incoming: Option<FxHashMap<&'a G::V, Vec<&'a G::V>>>,
    stop_at: Option<&'a G::V>,
}

impl<'a, G: AdjacencyList> BfsSearch<'a, G> {
    /// Creates a new search starting at `start`.
    /// `start` should be a reference into `graph` (see [`GraphOrder::vertex_ref`]).
    pub fn new(graph: &'a G, start: &'a G::V) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from([BfsItem {
                vertex: start,
                predecessor: None,
                level: 0,
            }]),
            incoming: None,
            stop_at: None,
        }
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: &'a G::V) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: &'a G::V) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Additionally follows edges against their orientation, i.e. searches the underlying
    /// undirected graph. Has no effect on undirected graphs.
    pub fn ignoring_direction(mut self) -> Self {
        if self.graph.is_directed() {
            let mut incoming: FxHashMap<&'a G::V, Vec<&'a G::V>> = FxHashMap::default();
            let graph = self.graph;
            for u in graph.vertices() {
                for v in graph.neighbors_of(u) {
                    incoming.entry(v).or_default().push(u);
                }
            }
            self.incoming = Some(incoming);
        }
        self
    }

    /// Returns the set of vertices discovered so far
    pub fn visited(&self) -> &FxHashSet<&'a G::V> {
        &self.visited
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit(&self, u: &G::V) -> bool {
        self.visited.contains(u)
    }

    /// Tries to restart the search at the smallest yet unvisited vertex and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        let graph = self.graph;
        match graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(u) => {
                self.visited.insert(u);
                self.queue.push_back(BfsItem {
                    vertex: u,
                    predecessor: None,
                    level: 0,
                });
                true
            }
        }
    }
}

impl<'a, G: AdjacencyList> Iterator for BfsSearch<'a, G> {
    type Item = BfsItem<&'a G::V>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.pop_front()?;

        if self.stop_at == Some(item.vertex) {
            self.queue.clear();
            return Some(item);
        }

        let graph = self.graph;
        let incoming = self
            .incoming
            .as_ref()
            .and_then(|map| map.get(item.vertex))
            .into_iter()
            .flatten()
            .copied();

        for v in graph.neighbors_of(item.vertex).chain(incoming) {
            if self.visited.insert(v) {
                self.queue.push_back(BfsItem {
                    vertex: v,
                    predecessor: Some(item.vertex),
                    level: item.level + 1,
                });
            }
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.number_of_vertices() - self.visited.len()),
        )
    }
}

/// Event yielded by a [`DfsSearch`].
///
/// Timestamps are shared between both kinds of events and start at 1, so
/// `discovery < finish` holds for every vertex and the intervals of two
/// vertices are either nested or disjoint.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DfsEvent<V> {
    Discover {
        vertex: V,
        predecessor: Option<V>,
        depth: NumVertices,
        time: usize,
    },
    Finish {
        vertex: V,
        time: usize,
    },
}

impl<V: Copy> DfsEvent<V> {
    /// Returns the vertex the event refers to
    pub fn vertex(&self) -> V {
        match *self {
            DfsEvent::Discover { vertex, .. } | DfsEvent::Finish { vertex, .. } => vertex,
        }
    }

    /// Returns the timestamp of the event
    pub fn time(&self) -> usize {
        match *self {
            DfsEvent::Discover { time, .. } | DfsEvent::Finish { time, .. } => time,
        }
    }
}

struct DfsFrame<'a, V> {
    vertex: &'a V,
    next_neighbor: usize,
}

/// Depth-first search producing the same order as the recursive formulation:
/// a vertex descends into its first undiscovered neighbor (in insertion order) before
/// looking at any other neighbor.
pub struct DfsSearch<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: FxHashSet<&'a G::V>,
    stack: Vec<DfsFrame<'a, G::V>>,
    start: Option<&'a G::V>,
    time: usize,
}

impl<'a, G: AdjacencyList> DfsSearch<'a, G> {
    /// Creates a new search starting at `start`.
    /// `start` should be a reference into `graph` (see [`GraphOrder::vertex_ref`]).
    pub fn new(graph: &'a G, start: &'a G::V) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            stack: Vec::new(),
            start: Some(start),
            time: 0,
        }
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit(&self, u: &G::V) -> bool {
        self.visited.contains(u)
    }

    fn discover(
        &mut self,
        vertex: &'a G::V,
        predecessor: Option<&'a G::V>,
    ) -> DfsEvent<&'a G::V> {
        self.visited.insert(vertex);
        self.time += 1;
        let depth = self.stack.len();
        self.stack.push(DfsFrame {
            vertex,
            next_neighbor: 0,
        });
        DfsEvent::Discover {
            vertex,
            predecessor,
            depth,
            time: self.time,
        }
    }
}

impl<'a, G: AdjacencyList> Iterator for DfsSearch<'a, G> {
    type Item = DfsEvent<&'a G::V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.discover(start, None));
        }

        let graph = self.graph;
        let frame = self.stack.last_mut()?;
        let u = frame.vertex;
        let adjacency = graph.adjacency_of(u);

        while let Some((v, _)) = adjacency.get(frame.next_neighbor) {
            frame.next_neighbor += 1;
            if !self.visited.contains(v) {
                return Some(self.discover(v, Some(u)));
            }
        }

        self.stack.pop();
        self.time += 1;
        Some(DfsEvent::Finish {
            vertex: u,
            time: self.time,
        })
    }
}

/// The spanning tree implied by a finished traversal.
///
/// Stores the visiting order together with parent, depth and (for DFS) discovery/finish
/// timestamps of every reached vertex. Children are kept in discovery order.
#[derive(Debug, Clone)]
pub struct TraversalTree<V: Vertex> {
    order: Vec<V>,
    parents: FxHashMap<V, V>,
    depths: FxHashMap<V, NumVertices>,
    children: FxHashMap<V, Vec<V>>,
    discovered: FxHashMap<V, usize>,
    finished: FxHashMap<V, usize>,
}

impl<V: Vertex> TraversalTree<V> {
    fn empty() -> Self {
        Self {
            order: Vec::new(),
            parents: FxHashMap::default(),
            depths: FxHashMap::default(),
            children: FxHashMap::default(),
            discovered: FxHashMap::default(),
            finished: FxHashMap::default(),
        }
    }

    fn visit(&mut self, vertex: &V, parent: Option<&V>, depth: NumVertices) {
        self.order.push(vertex.clone());
        self.depths.insert(vertex.clone(), depth);
        if let Some(p) = parent {
            self.parents.insert(vertex.clone(), p.clone());
            self.children
                .entry(p.clone())
                .or_default()
                .push(vertex.clone());
        }
    }

    /// Consumes a BFS and records the implied tree
    pub fn from_bfs<'a, I>(search: I) -> Self
    where
        V: 'a,
        I: IntoIterator<Item = BfsItem<&'a V>>,
    {
        let mut tree = Self::empty();
        for item in search {
            tree.visit(item.vertex, item.predecessor, item.level);
        }
        tree
    }

    /// Consumes a DFS and records the implied tree including timestamps
    pub fn from_dfs<'a, I>(search: I) -> Self
    where
        V: 'a,
        I: IntoIterator<Item = DfsEvent<&'a V>>,
    {
        let mut tree = Self::empty();
        for event in search {
            match event {
                DfsEvent::Discover {
                    vertex,
                    predecessor,
                    depth,
                    time,
                } => {
                    tree.visit(vertex, predecessor, depth);
                    tree.discovered.insert(vertex.clone(), time);
                }
                DfsEvent::Finish { vertex, time } => {
                    tree.finished.insert(vertex.clone(), time);
                }
            }
        }
        tree
    }

    /// Returns the start vertex of the traversal
    pub fn root(&self) -> Option<&V> {
        self.order.first()
    }

    /// Returns the reached vertices in visiting order
    pub fn order(&self) -> &[V] {
        &self.order
    }

    pub fn into_order(self) -> Vec<V> {
        self.order
    }

    /// Returns the number of reached vertices
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns *true* if `u` was reached by the traversal
    pub fn contains(&self, u: &V) -> bool {
        self.depths.contains_key(u)
    }

    /// Returns the parent of `u`; `None` for the root and unreached vertices
    pub fn parent_of(&self, u: &V) -> Option<&V> {
        self.parents.get(u)
    }

    /// Returns the tree children of `u` in discovery order
    pub fn children_of(&self, u: &V) -> &[V] {
        self.children.get(u).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the BFS level / DFS depth of `u`
    pub fn depth_of(&self, u: &V) -> Option<NumVertices> {
        self.depths.get(u).copied()
    }

    /// Returns the DFS discovery time of `u` (`None` for BFS trees)
    pub fn discovery_time_of(&self, u: &V) -> Option<usize> {
        self.discovered.get(u).copied()
    }

    /// Returns the DFS finish time of `u` (`None` for BFS trees)
    pub fn finish_time_of(&self, u: &V) -> Option<usize> {
        self.finished.get(u).copied()
    }
}

/// Provides traversal methods on graphs.
///
/// All methods fail with [`GraphError::VertexNotFound`] if the start vertex is not part of the graph.
pub trait Traversal: AdjacencyList {
    /// Returns a lazy BFS starting at `start`
    fn bfs_search(&self, start: &Self::V) -> Result<BfsSearch<'_, Self>> {
        let start = self
            .vertex_ref(start)
            .ok_or_else(|| GraphError::not_found(start))?;
        Ok(BfsSearch::new(self, start))
    }

    /// Returns a lazy DFS starting at `start`
    fn dfs_search(&self, start: &Self::V) -> Result<DfsSearch<'_, Self>> {
        let start = self
            .vertex_ref(start)
            .ok_or_else(|| GraphError::not_found(start))?;
        Ok(DfsSearch::new(self, start))
    }

    /// Returns all vertices reachable from `start` in **breadth-first** order.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, prelude::*};
    ///
    /// let g: Graph<u32> = Graph::from_edges(GraphKind::Undirected, [(1, 2), (1, 3), (2, 4)]).unwrap();
    /// assert_eq!(g.bfs(&1).unwrap(), vec![1, 2, 3, 4]);
    /// assert!(g.bfs(&9).is_err());
    /// ```
    fn bfs(&self, start: &Self::V) -> Result<Vec<Self::V>> {
        Ok(self
            .bfs_search(start)?
            .map(|item| item.vertex.clone())
            .collect())
    }

    /// Returns all vertices reachable from `start` in **depth-first** discovery order.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, prelude::*};
    ///
    /// let g: Graph<u32> = Graph::from_edges(GraphKind::Undirected, [(1, 2), (1, 3), (2, 4)]).unwrap();
    /// assert_eq!(g.dfs(&1).unwrap(), vec![1, 2, 4, 3]);
    /// ```
    fn dfs(&self, start: &Self::V) -> Result<Vec<Self::V>> {
        Ok(self
            .dfs_search(start)?
            .filter_map(|event| match event {
                DfsEvent::Discover { vertex, .. } => Some(vertex.clone()),
                DfsEvent::Finish { .. } => None,
            })
            .collect())
    }

    /// Returns the BFS tree rooted at `start`
    fn bfs_tree(&self, start: &Self::V) -> Result<TraversalTree<Self::V>> {
        Ok(TraversalTree::from_bfs(self.bfs_search(start)?))
    }

    /// Returns the DFS tree rooted at `start` with discovery/finish timestamps
    fn dfs_tree(&self, start: &Self::V) -> Result<TraversalTree<Self::V>> {
        Ok(TraversalTree::from_dfs(self.dfs_search(start)?))
    }
}

impl<G: AdjacencyList> Traversal for G {}
