/*!
# Vertex Representation

Vertices are arbitrary **values**: integers, characters, strings or any user type that is
totally ordered, hashable and cloneable. A vertex is identified by its value alone, so adding
the same value twice refers to the same vertex.

The ordering is used to iterate vertices deterministically and to pick one orientation of an
undirected edge when copying or joining graphs. Hashing is used by the algorithms for their
visited-sets and parent-maps.
*/

use std::{fmt::Debug, hash::Hash};

/// Bound for types usable as vertices
pub trait Vertex: Clone + Ord + Hash + Debug {}

impl<V> Vertex for V where V: Clone + Ord + Hash + Debug {}

/// Edge weights are signed integers; they are carried along but not interpreted by any algorithm
pub type Weight = i64;

/// Weight attached to edges inserted without an explicit weight
pub const DEFAULT_WEIGHT: Weight = 1;

/// Counts of vertices/edges and hop-distances
pub type NumVertices = usize;

/// We count edges with the same width as vertices
pub type NumEdges = usize;
