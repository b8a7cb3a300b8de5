/*!
# Distances

Unweighted shortest-path distances (number of edges) computed by BFS. Edge weights are
ignored. Directed graphs only follow edges along their orientation, so `distance(u, v)`
and `distance(v, u)` may differ.

Absent paths are reported as `None`; in particular [`Distances::diameter`] and
[`Distances::radius`] are `None` as soon as some ordered pair of vertices is disconnected.
*/

use super::*;

pub trait Distances: Traversal {
    /// Returns the number of edges on a shortest path from `src` to `dest`,
    /// or `None` if `dest` is unreachable.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is not a vertex.
    ///
    /// # Examples
    /// ```
    /// use vgraphs::{algo::*, prelude::*};
    ///
    /// let g: Graph<u32> = Graph::from_edges(GraphKind::Directed, [(1, 2), (2, 3)]).unwrap();
    /// assert_eq!(g.distance(&1, &3).unwrap(), Some(2));
    /// assert_eq!(g.distance(&3, &1).unwrap(), None);
    /// assert_eq!(g.distance(&2, &2).unwrap(), Some(0));
    /// ```
    fn distance(&self, src: &Self::V, dest: &Self::V) -> Result<Option<NumVertices>> {
        let search = self.bfs_search(src)?;
        let dest = self
            .vertex_ref(dest)
            .ok_or_else(|| GraphError::not_found(dest))?;

        Ok(search
            .stop_at(dest)
            .find(|item| item.vertex == dest)
            .map(|item| item.level))
    }

    /// Returns the largest distance from `u` to any other vertex,
    /// or `None` if some vertex is unreachable from `u`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `u` is not a vertex.
    fn eccentricity(&self, u: &Self::V) -> Result<Option<NumVertices>> {
        let mut reached = 0;
        let mut max_level = 0;
        for item in self.bfs_search(u)? {
            reached += 1;
            max_level = max_level.max(item.level);
        }

        Ok((reached == self.number_of_vertices()).then_some(max_level))
    }

    /// Returns the maximum eccentricity over all vertices.
    ///
    /// Graphs with at most one vertex have diameter `Some(0)`.
    fn diameter(&self) -> Option<NumVertices> {
        self.vertices()
            .map(|u| self.eccentricity(u).ok().flatten())
            .try_fold(0, |diameter, ecc| Some(diameter.max(ecc?)))
    }

    /// Returns the minimum eccentricity over all vertices.
    ///
    /// Graphs with at most one vertex have radius `Some(0)`.
    fn radius(&self) -> Option<NumVertices> {
        self.vertices()
            .map(|u| self.eccentricity(u).ok().flatten())
            .try_fold(None, |radius: Option<NumVertices>, ecc| {
                let ecc = ecc?;
                Some(Some(radius.map_or(ecc, |r| r.min(ecc))))
            })
            .map(|radius| radius.unwrap_or(0))
    }
}

impl<G: AdjacencyList> Distances for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, repr::*};

    #[test]
    fn path_distances() {
        let mut graph: Graph<u32> = Graph::undirected();
        graph.connect_path(0..5).unwrap();

        assert_eq!(graph.distance(&0, &4).unwrap(), Some(4));
        assert_eq!(graph.distance(&4, &0).unwrap(), Some(4));
        assert_eq!(graph.distance(&1, &3).unwrap(), Some(2));
        assert_eq!(graph.eccentricity(&2).unwrap(), Some(2));
        assert_eq!(graph.eccentricity(&0).unwrap(), Some(4));
        assert_eq!(graph.diameter(), Some(4));
        assert_eq!(graph.radius(), Some(2));
    }

    #[test]
    fn unreachable() {
        let graph: Graph<u32> =
            Graph::from_edges(GraphKind::Undirected, [(1, 2), (3, 4)]).unwrap();
        assert_eq!(graph.distance(&1, &4).unwrap(), None);
        assert_eq!(graph.eccentricity(&1).unwrap(), None);
        assert_eq!(graph.diameter(), None);
        assert_eq!(graph.radius(), None);
    }

    #[test]
    fn missing_vertices() {
        let graph: Graph<u32> = Graph::from_edges(GraphKind::Undirected, [(1, 2)]).unwrap();
        assert!(graph.distance(&1, &9).unwrap_err().is_not_found());
        assert!(graph.distance(&9, &1).unwrap_err().is_not_found());
        assert!(graph.eccentricity(&9).unwrap_err().is_not_found());
    }

    #[test]
    fn tiny_graphs() {
        let empty: Graph<u32> = Graph::undirected();
        assert_eq!(empty.diameter(), Some(0));
        assert_eq!(empty.radius(), Some(0));

        let single = Graph::trivial(5u32);
        assert_eq!(single.diameter(), Some(0));
        assert_eq!(single.radius(), Some(0));
        assert_eq!(single.distance(&5, &5).unwrap(), Some(0));
    }

    #[test]
    fn directed_cycle() {
        let mut graph: Graph<u32> = Graph::directed();
        graph.connect_cycle(0..4).unwrap();
        assert_eq!(graph.distance(&0, &3).unwrap(), Some(3));
        assert_eq!(graph.distance(&3, &0).unwrap(), Some(1));
        assert_eq!(graph.diameter(), Some(3));
        assert_eq!(graph.radius(), Some(3));
    }

    #[test]
    fn directed_path_is_not_strongly_connected() {
        let graph: Graph<u32> = Graph::from_edges(GraphKind::Directed, [(1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.eccentricity(&1).unwrap(), Some(2));
        assert_eq!(graph.diameter(), None);
    }

    #[test]
    fn weights_are_ignored() {
        let graph: Graph<u32> = Graph::from_edges(
            GraphKind::Weighted { directed: false },
            [(1, 2, 100), (2, 3, 100), (1, 3, 1000)],
        )
        .unwrap();
        assert_eq!(graph.distance(&1, &3).unwrap(), Some(1));
    }
}
