/*!
# Node Identifiers

In contrast to graphs whose nodes are numbered `0` to `n - 1`, nodes here are **opaque keys**:
any type that can be cloned, compared for equality, hashed and printed for diagnostics
qualifies. Integers, strings, coordinates or small structs all work out of the box.

Algorithms never inspect a node beyond these capabilities, so the same engine serves
explicit graphs (where a node is a key of the container) and implicit state spaces
(where the deduplication key produced by `visited_by` plays the same role).
*/

use std::{fmt::Debug, hash::Hash};

/// Marker trait for everything usable as a node identifier or dedup key.
///
/// Implemented automatically for all `Clone + Eq + Hash + Debug` types.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}
