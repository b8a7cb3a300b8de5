/*!
`vgraphs` is a graph data structure & algorithms library for graphs whose vertices are
arbitrary **v**alues (integers, characters, strings, ...).

# Representation

There is a single storage backend, [`Graph<V>`](crate::repr::Graph): an ordered map from every
vertex to the list of `(neighbor, weight)` pairs of its (outgoing) edges in insertion order.
Parallel edges and self-loops are allowed. Vertices are any type implementing [`Vertex`]
(`Clone + Ord + Hash + Debug`); edges are [`Edge<V>`] with a signed integer [`Weight`].

### Kinds of graphs

Every graph carries a [`GraphKind`](crate::repr::GraphKind) fixed at construction. Besides
directedness and weightedness, a kind may enforce a structural invariant on every mutation:

- null and trivial graphs reject edges (and trivial graphs any second vertex),
- complete graphs connect every new vertex to all existing ones,
- directed acyclic graphs reject edges closing a cycle,
- bipartite graphs reject edges closing an odd cycle.

Rejected mutations leave the graph unchanged and return a [`GraphError`].

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes vertices, edges, errors, basic graph operations and the graph itself,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS/DFS
  (`graph.bfs(&start)`), distances, girth/circumference, bipartiteness and connectivity,
- [`gens`] includes generators for deterministic substructures such as paths/cycles/cliques,
- [`render`] writes (optionally colored) adjacency lists, property summaries and traversal traces.

In most use-cases, `use vgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use vgraphs::{algo::*, prelude::*};

let mut dag: Graph<&str> = Graph::directed_acyclic();
dag.add_edges([("shirt", "tie"), ("tie", "jacket")]).unwrap();

// would close a cycle and is rolled back
assert!(dag.add_unweighted_edge("jacket", "shirt").is_err());
assert_eq!(dag.topological_order(), Some(vec!["shirt", "tie", "jacket"]));
```

# Logging

Mutations and policy decisions are reported through [`tracing`]; the library never installs a
subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod ops;
pub mod render;
pub mod repr;
pub(crate) mod testing;
pub mod vertex;

pub use edge::*;
pub use error::*;
pub use vertex::*;

/// `vgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph
/// operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
