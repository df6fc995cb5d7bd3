use std::marker::PhantomData;

use fxhash::FxHashMap;

use super::*;

/// Weighted graph storing one [`WeightedNeighborhood`] per node.
///
/// - Nodes are interned into dense indices in insertion order.
/// - Adding an existing edge overwrites its weight (last write wins) but keeps its position.
/// - In the undirected case, every edge `{u, v}` is stored in both neighborhoods with the
///   same weight; re-adding it overwrites both entries and never accumulates weights.
/// - Directed graphs additionally store incoming neighborhoods for `predecessors`.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = WeightedAdjArrayUndir::new();
/// g.add_edge("a", "b", 3);
/// g.add_edge("b", "a", 5);
///
/// assert_eq!(g.number_of_edges(), 1);
/// assert_eq!(g.weight_of(&"a", &"b"), Some(&5));
/// assert_eq!(g.successors(&"a").collect::<Vec<_>>(), vec![("b", 5)]);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedAdjArray<N, W, D = Directed> {
    index: FxHashMap<N, NodeIndex>,
    nodes: Vec<N>,
    out_nbs: Vec<WeightedNeighborhood<W>>,
    in_nbs: Vec<WeightedNeighborhood<W>>,
    num_edges: usize,
    _dir: PhantomData<D>,
}

/// Directed weighted graph
pub type WeightedAdjArrayDir<N, W> = WeightedAdjArray<N, W, Directed>;

/// Undirected weighted graph
pub type WeightedAdjArrayUndir<N, W> = WeightedAdjArray<N, W, Undirected>;

impl<N, W, D> Default for WeightedAdjArray<N, W, D> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            nodes: Vec::new(),
            out_nbs: Vec::new(),
            in_nbs: Vec::new(),
            num_edges: 0,
            _dir: PhantomData,
        }
    }
}

impl<N, W, D> WeightedAdjArray<N, W, D>
where
    N: NodeId,
    W: Clone,
    D: GraphDir,
{
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a list of `(u, v, weight)`-edges.
    /// Endpoints are added as nodes in order of first appearance.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Adds a node and returns *true* if it was present before.
    pub fn add_node(&mut self, u: N) -> bool {
        let len = self.nodes.len();
        self.intern(u) < len
    }

    /// Adds multiple nodes
    pub fn add_nodes<I>(&mut self, us: I)
    where
        I: IntoIterator<Item = N>,
    {
        for u in us {
            self.intern(u);
        }
    }

    /// Adds the edge `(u, v)` with the given weight, adding missing endpoints as nodes.
    ///
    /// If the edge existed before, its weight is overwritten and the previous weight is returned.
    /// For undirected graphs both orientations are updated.
    pub fn add_edge(&mut self, u: N, v: N, weight: W) -> Option<W> {
        let iu = self.intern(u);
        let iv = self.intern(v);

        let previous = self.out_nbs[iu].set_neighbor(iv, weight.clone());
        if D::DIRECTED {
            self.in_nbs[iv].set_neighbor(iu, weight);
        } else if iu != iv {
            self.out_nbs[iv].set_neighbor(iu, weight);
        }

        if previous.is_none() {
            self.num_edges += 1;
        }
        previous
    }

    /// Returns *true* if the edge `(u, v)` exists
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns the weight of edge `(u, v)` if it exists
    pub fn weight_of(&self, u: &N, v: &N) -> Option<&W> {
        let iu = *self.index.get(u)?;
        let iv = *self.index.get(v)?;
        self.out_nbs[iu].weight_of(iv)
    }

    fn intern(&mut self, u: N) -> NodeIndex {
        if let Some(&idx) = self.index.get(&u) {
            return idx;
        }

        let idx = self.nodes.len();
        self.index.insert(u.clone(), idx);
        self.nodes.push(u);
        self.out_nbs.push(WeightedNeighborhood::default());
        if D::DIRECTED {
            self.in_nbs.push(WeightedNeighborhood::default());
        }
        idx
    }

    fn neighbors_at<'a>(
        &'a self,
        u: &N,
        nbs: &'a [WeightedNeighborhood<W>],
    ) -> NeighborIter<'a, N, W> {
        let arcs = match self.index.get(u) {
            Some(&idx) => nbs[idx].as_slice(),
            None => &[],
        };

        NeighborIter {
            nodes: &self.nodes,
            arcs: arcs.iter(),
        }
    }
}

/// Iterator over the `(neighbor, weight)`-pairs of a node in a [`WeightedAdjArray`].
pub struct NeighborIter<'a, N, W> {
    nodes: &'a [N],
    arcs: std::slice::Iter<'a, (NodeIndex, W)>,
}

impl<N, W> Iterator for NeighborIter<'_, N, W>
where
    N: Clone,
    W: Clone,
{
    type Item = (N, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.arcs
            .next()
            .map(|(v, w)| (self.nodes[*v].clone(), w.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.arcs.size_hint()
    }
}

impl<N, W> ExactSizeIterator for NeighborIter<'_, N, W>
where
    N: Clone,
    W: Clone,
{
}

impl<N, W, D> GraphType for WeightedAdjArray<N, W, D>
where
    D: GraphDir,
{
    type Dir = D;
}

impl<N, W, D> GraphNodeOrder for WeightedAdjArray<N, W, D>
where
    N: NodeId,
    W: Clone,
    D: GraphDir,
{
    type Node = N;

    fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.iter().cloned()
    }

    fn contains_node(&self, u: &N) -> bool {
        self.index.contains_key(u)
    }
}

impl<N, W, D> WeightedAdjacency for WeightedAdjArray<N, W, D>
where
    N: NodeId,
    W: Clone,
    D: GraphDir,
{
    type Weight = W;

    type Neighbors<'a>
        = NeighborIter<'a, N, W>
    where
        Self: 'a;

    fn successors(&self, u: &N) -> Self::Neighbors<'_> {
        self.neighbors_at(u, &self.out_nbs)
    }

    fn predecessors(&self, u: &N) -> Self::Neighbors<'_> {
        if D::DIRECTED {
            self.neighbors_at(u, &self.in_nbs)
        } else {
            self.neighbors_at(u, &self.out_nbs)
        }
    }

    fn number_of_edges(&self) -> usize {
        self.num_edges
    }

    fn out_degree_of(&self, u: &N) -> usize {
        self.successors(u).len()
    }

    fn in_degree_of(&self, u: &N) -> usize {
        self.predecessors(u).len()
    }
}
