/*!
# Cycles

Queries about the cycle structure of a graph:
- [`CycleMetrics::is_acyclic`] / [`CycleMetrics::has_cycle`] and a [`TopoSearch`] for directed graphs,
- [`CycleMetrics::girth`], the length of a shortest cycle, by a BFS from every vertex,
- [`CycleMetrics::circumference`], the length of a longest simple cycle, by exhaustive backtracking.

In undirected graphs a self-loop is a cycle of length 1 and two parallel edges form a cycle of
length 2 for the girth; the circumference only considers cycles through at least 3 vertices
(2 in directed graphs).
*/

use super::*;
use fxhash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses a variant of Kahn's algorithm:
/// - Initializes with all vertices of in-degree 0.
/// - Repeatedly removes a vertex, decreasing in-degrees of its successors,
///   and pushes new vertices of in-degree 0.
/// - Stops once all vertices are output or a cycle is detected.
///
/// On undirected graphs every edge counts in both directions, so only isolated
/// vertices are ever reported.
pub struct TopoSearch<'a, G: AdjacencyList> {
    graph: &'a G,
    in_degs: FxHashMap<&'a G::V, NumVertices>,
    stack: Vec<&'a G::V>,
}

impl<'a, G: AdjacencyList> TopoSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        let mut in_degs: FxHashMap<&'a G::V, NumVertices> =
            graph.vertices().map(|u| (u, 0)).collect();
        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                if let Some(d) = in_degs.get_mut(v) {
                    *d += 1;
                }
            }
        }

        // reversed so that the smallest source is popped first
        let stack = graph
            .vertices()
            .filter(|u| in_degs.get(u) == Some(&0))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

impl<'a, G: AdjacencyList> Iterator for TopoSearch<'a, G> {
    type Item = &'a G::V;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        let graph = self.graph;
        for v in graph.neighbors_of(u) {
            if let Some(d) = self.in_degs.get_mut(v) {
                *d -= 1;
                if *d == 0 {
                    self.stack.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.number_of_vertices()))
    }
}

pub trait CycleMetrics: Traversal {
    /// Returns an iterator yielding vertices in a **topological order**.
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns a topological order of all vertices, or `None` if the graph is not acyclic.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, prelude::*};
    ///
    /// let g: Graph<u32> = Graph::from_edges(GraphKind::Directed, [(3, 1), (1, 2)]).unwrap();
    /// assert_eq!(g.topological_order(), Some(vec![3, 1, 2]));
    /// ```
    fn topological_order(&self) -> Option<Vec<Self::V>> {
        let order: Vec<_> = self.topo_search().cloned().collect();
        (order.len() == self.number_of_vertices()).then_some(order)
    }

    /// Returns *true* if the graph has no cycle.
    ///
    /// Directed graphs are tested by a topological search; undirected graphs are forests
    /// iff every connected component with `k` vertices has exactly `k - 1` edges.
    fn is_acyclic(&self) -> bool {
        if self.is_directed() {
            self.topo_search().count() == self.number_of_vertices()
        } else {
            let components = self.connected_components().count();
            self.number_of_edges() + components == self.number_of_vertices()
        }
    }

    /// Returns *true* if the graph contains a cycle.
    ///
    /// Self-loops and parallel edges count as cycles (matching [`CycleMetrics::girth`]), while
    /// [`CycleMetrics::circumference`] only counts cycles through at least 3 vertices. Hence a
    /// graph whose only cycles are loops, parallel edges or directed 2-cycles has a cycle but
    /// no circumference.
    fn has_cycle(&self) -> bool {
        !self.is_acyclic()
    }

    /// Returns the length of a shortest cycle or `None` if the graph is acyclic.
    ///
    /// Runs a BFS from every vertex in `O(V * (V + E))`.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, gens::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::undirected();
    /// g.connect_cycle(0..6).unwrap();
    /// assert_eq!(g.girth(), Some(6));
    ///
    /// g.add_unweighted_edge(0, 3).unwrap();
    /// assert_eq!(g.girth(), Some(4));
    /// ```
    fn girth(&self) -> Option<NumVertices> {
        let directed = self.is_directed();
        let mut girth: Option<NumVertices> = None;

        for root in self.vertices() {
            let mut levels: FxHashMap<&Self::V, NumVertices> = FxHashMap::default();
            levels.insert(root, 0);
            let mut queue = VecDeque::from([(root, None::<&Self::V>)]);

            while let Some((u, parent)) = queue.pop_front() {
                let du = levels[u];
                // lower bound on every cycle closed from here on
                let bound = if directed { du + 1 } else { 2 * du };
                if girth.is_some_and(|g| bound >= g) {
                    break;
                }

                let mut skipped_tree_edge = false;
                for v in self.neighbors_of(u) {
                    let closed = if directed {
                        if v == root {
                            Some(du + 1)
                        } else {
                            if !levels.contains_key(v) {
                                levels.insert(v, du + 1);
                                queue.push_back((v, Some(u)));
                            }
                            None
                        }
                    } else if !skipped_tree_edge && parent == Some(v) {
                        // exactly one entry towards the parent is the tree edge
                        skipped_tree_edge = true;
                        None
                    } else if let Some(&dv) = levels.get(v) {
                        Some(du + dv + 1)
                    } else {
                        levels.insert(v, du + 1);
                        queue.push_back((v, Some(u)));
                        None
                    };

                    if let Some(len) = closed {
                        girth = Some(girth.map_or(len, |g| g.min(len)));
                    }
                }
            }
        }

        girth
    }

    /// Returns the length of a longest simple cycle or `None` if there is none.
    ///
    /// Cycles must pass through at least 3 vertices, regardless of orientation; self-loops,
    /// parallel edges and directed 2-cycles `u -> v -> u` never count.
    ///
    /// This is an exhaustive search with exponential running time; only use it on small graphs.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, gens::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::undirected();
    /// g.connect_clique(0..4).unwrap();
    /// assert_eq!(g.circumference(), Some(4));
    /// ```
    fn circumference(&self) -> Option<NumVertices> {
        const MIN_LENGTH: NumVertices = 3;
        let mut longest: Option<NumVertices> = None;

        for start in self.vertices() {
            // every cycle is found from each of its vertices; restricting the path to
            // vertices larger than `start` reports it exactly from its smallest one
            let mut on_path: FxHashSet<&Self::V> = FxHashSet::default();
            on_path.insert(start);
            let mut stack: Vec<(&Self::V, usize)> = vec![(start, 0)];

            while let Some(frame) = stack.last_mut() {
                let (u, next) = *frame;
                let Some((v, _)) = self.adjacency_of(u).get(next) else {
                    on_path.remove(u);
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                if v == start {
                    let length = stack.len();
                    if length >= MIN_LENGTH && longest.is_none_or(|l| l < length) {
                        longest = Some(length);
                    }
                } else if v > start && on_path.insert(v) {
                    stack.push((v, 0));
                }
            }
        }

        longest
    }
}

impl<G: AdjacencyList> CycleMetrics for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, repr::*};

    #[test]
    fn topological_order() {
        let graph: Graph<u32> =
            Graph::from_edges(GraphKind::Directed, [(0, 1), (0, 2), (2, 1), (1, 3)]).unwrap();
        assert_eq!(graph.topological_order(), Some(vec![0, 2, 1, 3]));
        assert!(graph.is_acyclic());
        assert!(!graph.has_cycle());

        let mut cyclic = graph.clone();
        cyclic.add_unweighted_edge(3, 0).unwrap();
        assert_eq!(cyclic.topological_order(), None);
        assert!(cyclic.has_cycle());
    }

    #[test]
    fn undirected_acyclicity() {
        let mut graph: Graph<u32> = Graph::undirected();
        assert!(graph.is_acyclic());

        graph.connect_path(0..5).unwrap();
        graph.add_unweighted_edge(7, 8).unwrap();
        assert!(graph.is_acyclic());

        let mut parallel = graph.clone();
        parallel.add_unweighted_edge(7, 8).unwrap();
        assert!(parallel.has_cycle());

        let mut looped = graph.clone();
        looped.add_unweighted_edge(2, 2).unwrap();
        assert!(looped.has_cycle());

        graph.add_unweighted_edge(0, 4).unwrap();
        assert!(graph.has_cycle());
    }

    #[test]
    fn girth_of_cycles() {
        for n in 3..10u32 {
            let mut graph: Graph<u32> = Graph::undirected();
            graph.connect_cycle(0..n).unwrap();
            assert_eq!(graph.girth(), Some(n as usize));

            let mut directed: Graph<u32> = Graph::directed();
            directed.connect_cycle(0..n).unwrap();
            assert_eq!(directed.girth(), Some(n as usize));
        }
    }

    #[test]
    fn girth_of_trees_and_dags() {
        let mut path: Graph<u32> = Graph::undirected();
        path.connect_path(0..6).unwrap();
        assert_eq!(path.girth(), None);

        // undirected this would be a triangle
        let dag: Graph<u32> =
            Graph::from_edges(GraphKind::Directed, [(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(dag.girth(), None);
    }

    #[test]
    fn girth_counts_loops_and_parallel_edges() {
        let mut graph: Graph<u32> = Graph::undirected();
        graph.connect_cycle(0..5).unwrap();

        let mut parallel = graph.clone();
        parallel.add_unweighted_edge(1, 2).unwrap();
        assert_eq!(parallel.girth(), Some(2));

        let mut looped = graph.clone();
        looped.add_unweighted_edge(3, 3).unwrap();
        assert_eq!(looped.girth(), Some(1));

        let directed: Graph<u32> =
            Graph::from_edges(GraphKind::Directed, [(0, 1), (1, 0), (1, 2)]).unwrap();
        assert_eq!(directed.girth(), Some(2));
    }

    #[test]
    fn girth_prefers_short_cycle_far_from_first_vertex() {
        // long cycle through 0, triangle hanging off at the far end
        let mut graph: Graph<u32> = Graph::undirected();
        graph.connect_cycle(0..8).unwrap();
        graph.connect_cycle([4, 10, 11]).unwrap();
        assert_eq!(graph.girth(), Some(3));
    }

    #[test]
    fn circumference() {
        let mut clique: Graph<u32> = Graph::undirected();
        clique.connect_clique(0..4).unwrap();
        assert_eq!(clique.circumference(), Some(4));

        let mut k5: Graph<u32> = Graph::undirected();
        k5.connect_clique(0..5).unwrap();
        assert_eq!(k5.circumference(), Some(5));

        let mut path: Graph<u32> = Graph::undirected();
        path.connect_path(0..5).unwrap();
        assert_eq!(path.circumference(), None);

        // two triangles sharing vertex 2
        let mut bowtie: Graph<u32> = Graph::undirected();
        bowtie.connect_cycle([0, 1, 2]).unwrap();
        bowtie.connect_cycle([2, 3, 4]).unwrap();
        assert_eq!(bowtie.circumference(), Some(3));
    }

    #[test]
    fn circumference_ignores_loops_and_parallel_edges() {
        let graph: Graph<u32> =
            Graph::from_edges(GraphKind::Undirected, [(0, 0), (0, 1), (0, 1)]).unwrap();
        assert_eq!(graph.circumference(), None);
        assert_eq!(graph.girth(), Some(1));

        let parallel: Graph<u32> =
            Graph::from_edges(GraphKind::Undirected, [(0, 1), (0, 1), (1, 2)]).unwrap();
        assert!(parallel.has_cycle());
        assert_eq!(parallel.girth(), Some(2));
        assert_eq!(parallel.circumference(), None);
    }

    #[test]
    fn directed_circumference() {
        let two_cycle: Graph<u32> =
            Graph::from_edges(GraphKind::Directed, [(0, 1), (1, 0), (2, 2)]).unwrap();
        assert_eq!(two_cycle.circumference(), None);
        assert_eq!(two_cycle.girth(), Some(1));
        assert!(two_cycle.has_cycle());

        let lone_two_cycle: Graph<u32> =
            Graph::from_edges(GraphKind::Directed, [(0, 1), (1, 0)]).unwrap();
        assert_eq!(lone_two_cycle.circumference(), None);
        assert_eq!(lone_two_cycle.girth(), Some(2));

        let mut triangle: Graph<u32> = Graph::directed();
        triangle.connect_cycle(0..3).unwrap();
        triangle.add_unweighted_edge(1, 0).unwrap();
        assert_eq!(triangle.circumference(), Some(3));

        let mut graph: Graph<u32> = Graph::directed();
        graph.connect_cycle(0..6).unwrap();
        graph.add_unweighted_edge(0, 3).unwrap();
        assert_eq!(graph.circumference(), Some(6));
        assert_eq!(graph.girth(), Some(4));
    }
}
