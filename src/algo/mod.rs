/*!
# Graph Algorithms

Algorithms are provided as traits with blanket implementations for every [`AdjacencyList`],
so bringing them into scope is enough:
```rust
use vgraphs::{algo::*, prelude::*};

let mut g: Graph<u32> = Graph::undirected();
g.add_edges([(1, 2), (2, 3)]).unwrap();
assert_eq!(g.distance(&1, &3).unwrap(), Some(2));
```
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod bipartite;
mod connectivity;
mod cycles;
mod distance;
mod traversal;

use crate::{ops::*, *};

pub use bipartite::*;
pub use connectivity::*;
pub use cycles::*;
pub use distance::*;
pub use traversal::*;
