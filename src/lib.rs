/*!
`wgraphs` is a library for traversals and shortest-path searches on graphs that are
- **w**eighted with arbitrary weight types : Weights are combined and compared through an injected [`WeightAlgebra`](crate::weight::WeightAlgebra)
- possibly too large (or infinite) to materialize : Every search is also available over a successor function

# Representation

Nodes are opaque identifiers: anything that is `Clone + Eq + Hash + Debug` is a [`NodeId`](crate::node::NodeId).
Algorithms never access a graph directly but only through the read-only traits in [`ops`], most importantly
[`WeightedAdjacency`](crate::ops::WeightedAdjacency) which yields `(neighbor, weight)`-pairs in a stable order.

### Directed vs Undirected

We support both **directed** and **undirected** graphs:

- In a **directed** graph, the edge `(u, v)` only appears in the successors of `u`.
- In an **undirected** graph, the container stores every edge in both orientations with the same weight,
  so algorithms never need to distinguish between both kinds.

### Available Representations

See the [`repr`] module for the reference container [`WeightedAdjArray`](crate::repr::WeightedAdjArray)
which stores nodes in insertion order and overwrites duplicate edges (last write wins).

# Design

Every search is driven by a *frontier* whose discipline determines the algorithm: FIFO for BFS, LIFO for DFS and a
priority heap with insertion-order tie-breaking for Dijkstra/A*. Identical graphs built in identical order thus
always produce identical paths.

Algorithms on explicit graphs are implemented via traits on the graph itself (`graph.shortest_path(&s, &t, &algebra)`),
while configurable computations such as [`DistanceMatrix`](crate::algo::DistanceMatrix) follow the *Builder* / *Setter*
pattern. The `implicit_*` functions take a successor closure and optionally a `visited_by` key function that projects
a rich state onto its identity for deduplication.

Negative answers such as an unreachable target are plain `Option`/enum values; negative cycles are reported explicitly,
either as an enum variant or as the [`NegativeCycle`](crate::error::NegativeCycle) error.

# Usage

There are *2* core submodules you probably want to interact with:
- [`prelude`] includes node and weight definitions, the graph operation traits, result types and the reference container,
- [`algo`] includes traversals (`graph.walk(start, Strategy::BreadthFirst)`), Dijkstra, A*, Bellman-Ford,
  Floyd-Warshall, distance matrices and all their implicit variants.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let g = WeightedAdjArrayDir::from_edges([(1, 2, 1), (2, 3, 2), (1, 3, 4)]);
let alg = NumericAlgebra::<i32>::new();

assert_eq!(g.walk(1, Strategy::DepthFirst), vec![1, 2, 3]);
assert_eq!(g.shortest_path(&1, &3, &alg), Some(Path::new(vec![1, 2, 3], 3)));
assert_eq!(g.floyd_warshall(&alg).unwrap().get(&1, &3), Some(&3));
```

# Logging

Algorithms report their decisions and summaries through the [`log`](https://crates.io/crates/log) facade
(`debug` for regime choices and negative-cycle detection, `trace` for search statistics).
No logger is installed by this library.
*/

pub mod algo;
pub mod error;
pub mod node;
pub mod ops;
pub mod path;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod weight;

/// `wgraphs::prelude` includes node and weight definitions, all graph operation traits, result types and the reference container.
pub mod prelude {
    pub use super::{error::*, node::*, ops::*, path::*, repr::*, weight::*};
}
