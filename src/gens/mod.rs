/*!
# Graph Generators

Deterministic generators that add common **substructures** (paths, cycles, cliques) to an
existing graph. All edges are inserted through [`GraphEditing::add_edge`], so the
[`EdgePolicy`](crate::repr::EdgePolicy) of the target graph applies: closing a cycle inside a
[`GraphKind::DirectedAcyclic`](crate::repr::GraphKind) graph fails like any other cycle-creating edge.
*/

use crate::{ops::*, *};

mod substructures;

pub use substructures::*;
