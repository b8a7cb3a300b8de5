/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph:

- **Paths**
- **Cycles**
- **Cliques**

Missing vertices are inserted on the fly.

# Example

```rust
use vgraphs::{gens::*, prelude::*};

let mut g: Graph<u32> = Graph::directed();
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();
g.connect_clique([0, 2, 4]).unwrap();

assert_eq!(
    g.ordered_edges().into_iter().map(|e| (e.src, e.dest)).collect::<Vec<_>>(),
    vec![(0, 1), (0, 2), (0, 4), (1, 2), (2, 0), (2, 3), (2, 4), (3, 4), (4, 0), (4, 2), (4, 2)]
);
```
*/

use std::collections::BTreeSet;

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Every method stops at the first rejected edge and forwards its error;
/// edges inserted before remain in the graph.
pub trait GeneratorSubstructures: GraphEditing {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// Each consecutive pair of vertices is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use vgraphs::{gens::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::directed();
    /// g.connect_path([0, 1, 2, 3]).unwrap();
    ///
    /// assert!(g.has_edge(&0, &1));
    /// assert!(g.has_edge(&1, &2));
    /// assert!(g.has_edge(&2, &3));
    /// ```
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Self::V>,
    {
        for (u, v) in vertices_on_path.into_iter().tuple_windows() {
            self.add_unweighted_edge(u, v)?;
        }
        Ok(())
    }

    /// Connects the given vertices with a **cycle**.
    ///
    /// - Consecutive vertices are connected by edges.
    /// - Additionally, the last vertex is connected back to the first.
    ///
    /// A single vertex receives a self-loop.
    ///
    /// # Example
    /// ```rust
    /// use vgraphs::{gens::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::directed();
    /// g.connect_cycle([0, 1, 2]).unwrap();
    ///
    /// assert!(g.has_edge(&0, &1));
    /// assert!(g.has_edge(&1, &2));
    /// assert!(g.has_edge(&2, &0));
    /// ```
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Self::V>,
    {
        let mut iter = vertices_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first.clone();
            for cur in iter {
                self.add_unweighted_edge(prev, cur.clone())?;
                prev = cur;
            }

            self.add_unweighted_edge(prev, first)?;
        }
        Ok(())
    }

    /// Connects all given vertices into a **clique** (complete subgraph) without self-loops.
    /// Duplicate vertices are ignored.
    ///
    /// Undirected graphs receive one edge per pair, directed graphs one edge per direction.
    ///
    /// # Example
    /// ```rust
    /// use vgraphs::{gens::*, prelude::*};
    ///
    /// let mut g: Graph<u32> = Graph::undirected();
    /// g.connect_clique([0, 1, 2, 1]).unwrap();
    ///
    /// assert_eq!(g.number_of_edges(), 3);
    /// assert!(g.has_edge(&2, &0));
    /// ```
    fn connect_clique<C>(&mut self, vertices: C) -> Result<()>
    where
        C: IntoIterator<Item = Self::V>,
    {
        let vertices: BTreeSet<Self::V> = vertices.into_iter().collect();
        let directed = self.is_directed();

        for u in &vertices {
            for v in &vertices {
                if u == v || (!directed && u > v) {
                    continue;
                }
                self.add_unweighted_edge(u.clone(), v.clone())?;
            }
        }
        Ok(())
    }
}

impl<G: GraphEditing> GeneratorSubstructures for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    fn edge_pairs(g: &Graph<u32>) -> Vec<(u32, u32)> {
        g.ordered_edges()
            .into_iter()
            .map(|e| (e.src, e.dest))
            .collect_vec()
    }

    #[test]
    fn test_connect_path() {
        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_path([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_path([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_path([2, 1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&2, &1));
            assert!(!g.has_edge(&1, &2));
        }

        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(edge_pairs(&g), vec![(0, 3), (1, 4), (3, 1)]);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_cycle([1]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(&1, &1));
        }

        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(edge_pairs(&g), vec![(0, 3), (1, 4), (3, 1), (4, 0)]);
        }

        {
            let mut g: Graph<u32> = Graph::undirected();
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(edge_pairs(&g), vec![(0, 3), (0, 4), (1, 3), (1, 4)]);
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_clique([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_clique([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g: Graph<u32> = Graph::directed();
            g.connect_clique([1, 2, 4]).unwrap();
            assert_eq!(g.number_of_edges(), 6);
        }

        {
            let mut g: Graph<u32> = Graph::undirected();
            g.connect_clique([1, 2, 4]).unwrap();
            assert_eq!(g.number_of_edges(), 3);
            assert_eq!(g.min_degree(), 2);
        }
    }

    #[test]
    fn policies_apply() {
        let mut dag: Graph<u32> = Graph::directed_acyclic();
        dag.connect_path(0..4).unwrap();
        assert!(dag.connect_cycle(4..7).is_err());
        // edges before the closing one stay
        assert!(dag.has_edge(&4, &5) && dag.has_edge(&5, &6));
        assert!(!dag.has_edge(&6, &4));

        let mut null: Graph<u32> = Graph::null();
        assert!(null.connect_path([0, 1]).is_err());
        assert!(null.connect_path([0]).is_ok());

        let mut bipartite: Graph<u32> = Graph::bipartite();
        bipartite.connect_cycle(0..4).unwrap();
        assert!(bipartite.connect_cycle(10..13).is_err());
    }
}
