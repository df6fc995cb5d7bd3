/*!
# Graph Representations

The algorithms of this crate only consume the query traits in [`ops`](crate::ops).
This module provides one reference container implementing them:

- [`WeightedAdjArray`]: hash-indexed adjacency arrays storing `(neighbor, weight)`-pairs,
  parameterized by a direction marker; aliases [`WeightedAdjArrayDir`] and [`WeightedAdjArrayUndir`].

Nodes are opaque keys that are interned into dense indices on insertion.
Neighborhoods preserve insertion order, which makes every algorithm deterministic
for graphs built by the same sequence of insertions.
*/

use crate::{node::*, ops::*};

mod adj_array;
mod neighborhood;

pub use adj_array::*;
pub use neighborhood::*;
