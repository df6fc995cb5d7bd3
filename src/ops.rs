/*!
# Graph Query Interface

Algorithms in this crate never mutate a graph and only rely on the read-only traits of this
module. Any container (the reference [`WeightedAdjArray`](crate::repr::WeightedAdjArray),
a wrapper around a foreign graph library, a database-backed view, ...) becomes usable by
implementing [`GraphNodeOrder`] and [`WeightedAdjacency`].

Undirected graphs are expected to be **symmetrized by the container**: if `(v, w)` is
yielded by `successors(u)`, then `(u, w)` is yielded by `successors(v)`. Algorithms thus
never need to distinguish between both kinds.
*/

use std::fmt::Debug;

use crate::node::NodeId;

/// Direction marker of a graph representation.
pub trait GraphDir: Debug + Clone + Copy + Default {
    /// *true* iff edges have an orientation
    const DIRECTED: bool;
}

/// Marker for directed graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Exposes whether a graph is directed or undirected.
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node set of a graph
pub trait GraphNodeOrder {
    /// Identifier type of nodes
    type Node: NodeId;

    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> usize;

    /// Returns an iterator over all nodes in a stable (insertion) order.
    fn vertices(&self) -> impl Iterator<Item = Self::Node> + '_;

    /// Returns *true* if `u` is a node of the graph
    fn contains_node(&self, u: &Self::Node) -> bool;

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Read-only access to weighted neighborhoods.
pub trait WeightedAdjacency: GraphNodeOrder {
    /// Weight attached to every edge
    type Weight: Clone;

    /// Iterator over `(neighbor, weight)`-pairs of a node
    type Neighbors<'a>: Iterator<Item = (Self::Node, Self::Weight)> + 'a
    where
        Self: 'a;

    /// Returns the outgoing edges of `u` as `(v, weight)`-pairs in a stable order.
    /// Unknown nodes have no successors.
    ///
    /// For undirected graphs, this is the full neighborhood of `u`.
    fn successors(&self, u: &Self::Node) -> Self::Neighbors<'_>;

    /// Returns the incoming edges of `u` as `(v, weight)`-pairs, i.e. all `v` with an edge `(v, u)`.
    /// Unknown nodes have no predecessors.
    ///
    /// For undirected graphs, this coincides with [`WeightedAdjacency::successors`].
    fn predecessors(&self, u: &Self::Node) -> Self::Neighbors<'_>;

    /// Returns the number of edges of the graph. Undirected edges are counted once.
    fn number_of_edges(&self) -> usize;

    /// Returns the number of outgoing edges of `u`
    fn out_degree_of(&self, u: &Self::Node) -> usize {
        self.successors(u).count()
    }

    /// Returns the number of incoming edges of `u`
    fn in_degree_of(&self, u: &Self::Node) -> usize {
        self.predecessors(u).count()
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }

    /// Returns an iterator over all edges `(u, v, weight)`.
    /// Undirected edges are reported in both orientations.
    fn edges(&self) -> impl Iterator<Item = (Self::Node, Self::Node, Self::Weight)> + '_ {
        self.vertices().flat_map(move |u| {
            self.successors(&u)
                .map(move |(v, w)| (u.clone(), v, w))
        })
    }
}
