/*!
# Bipartite Graph Algorithms

This module provides traits and algorithms for working with **bipartite graphs**.

Functionality includes:
- Defining and handling bipartitions of a graph
- Testing whether a graph is bipartite
- Computing a valid bipartition if one exists

Edge orientation is ignored: a directed graph is bipartite iff its underlying undirected graph is.
*/

use super::*;
use fxhash::FxHashSet;

/// A trait for representing a bipartition of the vertex set.
///
/// - Vertices in the set are considered to be on the **right** (1) side
/// - Vertices not in the set are considered to be on the **left** (0) side
pub trait Bipartition<V> {
    /// Returns `true` if the vertex is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: &V) -> bool {
        !self.is_on_right_side(u)
    }

    /// Returns `true` if the vertex is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: &V) -> bool;
}

impl<V: Vertex> Bipartition<V> for FxHashSet<V> {
    #[inline]
    fn is_on_right_side(&self, u: &V) -> bool {
        self.contains(u)
    }
}

impl<V: Vertex> Bipartition<V> for std::collections::BTreeSet<V> {
    #[inline]
    fn is_on_right_side(&self, u: &V) -> bool {
        self.contains(u)
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: AdjacencyList {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. whether every edge has one endpoint on each side.
    /// Self-loops are never valid.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use vgraphs::{algo::*, gens::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::undirected();
    /// g.connect_path(0..10).unwrap();
    ///
    /// assert!(g.is_bipartition(&BTreeSet::from([0, 2, 4, 6, 8])));
    /// assert!(!g.is_bipartition(&BTreeSet::from([0, 1])));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition<Self::V>,
    {
        self.edges().all(|Edge { src, dest, .. }| {
            bipartition.is_on_left_side(&src) != bipartition.is_on_left_side(&dest)
        })
    }

    /// Computes a valid bipartition of the graph, if one exists.
    /// The returned set holds the right side; the smallest vertex of each
    /// component is always on the left side.
    ///
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, gens::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::undirected();
    /// g.connect_path(0..10).unwrap();
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.len(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<FxHashSet<Self::V>> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }

    /// Tests whether the graph is bipartite.
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G: AdjacencyList> BipartiteTest for G {}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G: AdjacencyList>(graph: &G) -> FxHashSet<G::V> {
    let mut bipartition = FxHashSet::default();

    let Some(first) = graph.vertices().next() else {
        return bipartition;
    };
    let mut bfs = BfsSearch::new(graph, first).ignoring_direction();

    loop {
        for (vertex, pred) in bfs
            .by_ref()
            .filter_map(|item| Some((item.vertex, item.predecessor?)))
        {
            if !bipartition.contains(pred) {
                bipartition.insert(vertex.clone());
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}
