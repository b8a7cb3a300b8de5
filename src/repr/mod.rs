/*!
# Graph Representation

There is a single storage backend, [`Graph`]: an ordered map from each vertex to the list of
`(neighbor, weight)` pairs of its (outgoing) edges, kept in insertion order.

What differs between the classic kinds of graphs (null, trivial, complete, DAG, bipartite, ...)
is captured by [`GraphKind`] and its [`EdgePolicy`]. The policy is consulted by the one
`add_edge`/`add_vertex` entry point:

- `ForbidEdges` rejects every edge (null and trivial graphs),
- `AutoComplete` connects each new vertex to all existing ones (complete graphs),
- `RejectsCycle` / `RejectsOddCycle` insert the edge, re-validate the whole graph and roll the
  edge back if the graph stopped being acyclic / bipartite.

Validation rescans the whole graph (`O(V + E)` per inserted edge).
*/

use crate::{ops::*, *};

mod graph;
mod kind;

pub use graph::*;
pub use kind::*;
