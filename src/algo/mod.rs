/*!
# Graph Algorithms

This module provides the traversal and shortest-path algorithms of this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to BFS/DFS folds, Dijkstra, A*, Bellman-Ford, Floyd-Warshall and distance matrices.

Every algorithm comes in two flavours:
- as a trait method on explicit graphs (e.g. `graph.shortest_path(&s, &t, &algebra)`), implemented
  for everything that implements [`WeightedAdjacency`],
- as an `implicit_*` function over a successor closure for state spaces that are never materialized.

Weights are only ever combined and compared through a [`WeightAlgebra`].
*/

mod a_star;
mod bellman_ford;
mod dijkstra;
mod distance_matrix;
mod floyd_warshall;
mod frontier;
mod traversal;

use crate::prelude::*;

pub use a_star::*;
pub use bellman_ford::*;
pub use dijkstra::*;
pub use distance_matrix::*;
pub use floyd_warshall::*;
pub use frontier::*;
pub use traversal::*;
