//! Seeded random graphs and invariant checks shared by the tests of this crate.
#![cfg(test)]

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{ops::*, repr::*};

/// Installs a subscriber printing `RUST_LOG`-filtered events of the running test.
/// Safe to call from every test; only the first call installs it.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a list of `m` random edges (including loops and duplicates) for vertices `0..n`
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: u32, m: usize) -> Vec<(u32, u32)> {
    (0..m)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec()
}

/// Creates a graph of the given (non-trivial) kind by offering `m` random edges; rejected edges
/// are skipped
pub(crate) fn random_graph<R: Rng>(rng: &mut R, kind: GraphKind, n: u32, m: usize) -> Graph<u32> {
    let mut graph = Graph::new(kind).unwrap();
    for (u, v) in random_edges(rng, n, m) {
        let _ = graph.add_unweighted_edge(u, v);
    }
    graph
}

/// Asserts that every undirected adjacency entry is mirrored at the other endpoint
pub(crate) fn assert_symmetric(graph: &Graph<u32>) {
    for u in graph.vertices() {
        for v in graph.neighbors_of(u).unique() {
            let forward = graph.neighbors_of(u).filter(|&x| x == v).count();
            let backward = graph.neighbors_of(v).filter(|&x| x == u).count();
            assert_eq!(forward, backward, "asymmetric entries between {u} and {v}");
            if u == v {
                assert_eq!(forward % 2, 0, "self-loop of {u} stored an odd number of times");
            }
        }
    }
}

mod tests {
    use super::*;
    use crate::algo::*;

    const KINDS: [GraphKind; 2] = [GraphKind::Undirected, GraphKind::Directed];

    #[test]
    fn edge_counts_match_edge_iterator() {
        init_tracing();
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for kind in KINDS {
            for n in [5u32, 20, 50] {
                for m in [n as usize, 3 * n as usize] {
                    let graph = random_graph(rng, kind, n, m);
                    assert_eq!(graph.number_of_edges(), m);
                    assert_eq!(graph.edges().count(), m);

                    let entries: usize = graph.degrees().sum();
                    let expected = if kind.is_directed() { m } else { 2 * m };
                    assert_eq!(entries, expected);

                    if kind == GraphKind::Undirected {
                        assert_symmetric(&graph);
                    }
                }
            }
        }
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut graph = random_graph(rng, GraphKind::Undirected, 30, 60);
        let before = graph.clone();

        for u in graph.vertices().cloned().collect_vec() {
            assert!(!graph.add_vertex(u).unwrap());
        }
        assert_eq!(graph.adjacency(), before.adjacency());
    }

    #[test]
    fn delete_vertex_scrubs_entries() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for kind in KINDS {
            let mut graph = random_graph(rng, kind, 20, 60);
            let victims = graph.vertices().step_by(3).cloned().collect_vec();

            for u in &victims {
                assert!(graph.delete_vertex(u));
                assert!(!graph.delete_vertex(u));
            }

            for u in graph.vertices() {
                assert!(graph.neighbors_of(u).all(|v| !victims.contains(v)));
            }
            assert_eq!(graph.edges().count(), graph.number_of_edges());
            if !kind.is_directed() {
                assert_symmetric(&graph);
            }
        }
    }

    #[test]
    fn delete_edge_removes_all_copies() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let mut graph = random_graph(rng, GraphKind::Undirected, 10, 60);

        for (u, v) in random_edges(rng, 10, 30) {
            let existed = graph.has_edge(&u, &v);
            assert_eq!(graph.delete_edge(&u, &v), existed);
            assert!(!graph.has_edge(&u, &v));
            assert!(!graph.has_edge(&v, &u));
        }
        assert_symmetric(&graph);
    }

    #[test]
    fn dag_stays_acyclic() {
        init_tracing();
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for _ in 0..10 {
            let graph = random_graph(rng, GraphKind::DirectedAcyclic, 15, 60);
            assert!(graph.is_acyclic());

            let order = graph.topological_order().unwrap();
            let rank = |u: &u32| order.iter().position(|x| x == u).unwrap();
            for e in graph.edges() {
                assert!(rank(&e.src) < rank(&e.dest));
            }

            // rejected edges must not leave their endpoints behind
            for u in graph.vertices() {
                assert!(graph.degree_of(u).unwrap() + graph.in_degree_of(u).unwrap() > 0);
            }
        }
    }

    #[test]
    fn bipartite_stays_bipartite() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for _ in 0..10 {
            let graph = random_graph(rng, GraphKind::Bipartite, 15, 60);
            let right = graph.compute_bipartition().unwrap();
            assert!(graph.is_bipartition(&right));
            assert!(graph.girth().is_none_or(|g| g % 2 == 0));
        }
    }

    #[test]
    fn union_leaves_operands_untouched() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        let a = random_graph(rng, GraphKind::Undirected, 10, 15);
        let b = random_graph(rng, GraphKind::Undirected, 10, 15);
        let (a_before, b_before) = (a.clone(), b.clone());

        let union = (&a + &b).unwrap();
        assert_eq!(a.adjacency(), a_before.adjacency());
        assert_eq!(b.adjacency(), b_before.adjacency());

        for u in a.vertices().chain(b.vertices()) {
            assert!(union.has_vertex(u));
        }
        for e in a.edges().chain(b.edges()) {
            assert!(union.has_edge(&e.src, &e.dest));
        }
        assert_symmetric(&union);
    }

    #[test]
    fn traversals_agree_with_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for kind in KINDS {
            let graph = random_graph(rng, kind, 25, 40);
            for start in graph.vertices() {
                let bfs = graph.bfs_tree(start).unwrap();
                let dfs = graph.dfs(start).unwrap();
                assert_eq!(
                    bfs.order().iter().sorted().collect_vec(),
                    dfs.iter().sorted().collect_vec()
                );

                for u in graph.vertices() {
                    assert_eq!(graph.distance(start, u).unwrap(), bfs.depth_of(u));
                }
            }
        }
    }

    #[test]
    fn girth_bounded_by_circumference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);

        for kind in KINDS {
            for _ in 0..10 {
                let graph = random_graph(rng, kind, 8, 12);
                if let Some(circumference) = graph.circumference() {
                    assert!(circumference >= 3);
                    assert!(graph.girth().is_some_and(|girth| girth <= circumference));
                }
                assert_eq!(graph.girth().is_some(), graph.has_cycle());
            }
        }
    }
}
