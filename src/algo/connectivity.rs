use itertools::Itertools;

use super::*;

pub trait Connectivity: Traversal {
    /// Returns *true* if every vertex is reachable from the smallest vertex.
    ///
    /// Directed graphs only follow edges along their orientation, so the answer depends on
    /// which vertex is the smallest. Graphs without vertices are connected.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::undirected();
    /// assert!(g.is_connected());
    ///
    /// g.add_edges([(1, 2), (3, 4)]).unwrap();
    /// assert!(!g.is_connected());
    ///
    /// g.add_unweighted_edge(2, 3).unwrap();
    /// assert!(g.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        match self.vertices().next() {
            None => true,
            Some(first) => BfsSearch::new(self, first).count() == self.number_of_vertices(),
        }
    }

    /// Returns an iterator over the connected components of the underlying undirected graph.
    /// Components are emitted in the order of their smallest vertex; vertices within a
    /// component appear in BFS order.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Same as [`Connectivity::connected_components`] but skips isolated vertices
    fn connected_components_no_singletons(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self).include_singletons(false)
    }
}

impl<G: AdjacencyList> Connectivity for G {}

pub struct ConnectedComponents<'a, G: AdjacencyList> {
    bfs: Option<BfsSearch<'a, G>>,
    include_singletons: bool,
}

impl<'a, G: AdjacencyList> ConnectedComponents<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: graph
                .vertices()
                .next()
                .map(|first| BfsSearch::new(graph, first).ignoring_direction()),
            include_singletons: true,
        }
    }

    /// Each vertex without incident edges (other than self-loops) forms its own component.
    /// By setting `include = false`, those components are not returned.
    pub fn set_include_singletons(&mut self, include: bool) {
        self.include_singletons = include;
    }

    pub fn include_singletons(mut self, include: bool) -> Self {
        self.set_include_singletons(include);
        self
    }
}

impl<G: AdjacencyList> Iterator for ConnectedComponents<'_, G> {
    type Item = Vec<G::V>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().map(|item| item.vertex.clone()).collect_vec();
            if !cc.is_empty() && (self.include_singletons || cc.len() > 1) {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
