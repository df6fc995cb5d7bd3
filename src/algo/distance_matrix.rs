/*!
# Distance Matrix

Pairwise distances between a set of *points of interest* (POIs).

Two regimes compute the same table:
- **Dense**: run [Floyd-Warshall](super::FloydWarshall) once and keep only POI pairs,
- **Sparse**: run one [Dijkstra](super::ShortestPaths::single_source_distances) per POI.

With `k` POIs on a graph with `n` nodes, [`MatrixStrategy::Auto`] picks the dense regime if
`k * k > n` and the sparse one otherwise. Dijkstra requires non-negative weights, hence `Auto`
also picks the dense regime as soon as the graph contains a negative edge.
*/

use fxhash::FxHashSet;
use log::debug;

use super::*;

/// Selects how a [`DistanceMatrix`] is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixStrategy {
    /// Decide based on the number of POIs and the number of nodes
    #[default]
    Auto,
    /// Floyd-Warshall restricted to POI pairs
    Dense,
    /// One single-source search per POI; requires non-negative weights
    Sparse,
}

/// Configurable computation of pairwise distances between points of interest.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*, weight::NumericAlgebra};
///
/// let g = WeightedAdjArrayUndir::from_edges([(0, 1, 2), (1, 2, 2), (2, 3, 2)]);
/// let alg = NumericAlgebra::new();
///
/// let table = DistanceMatrix::new(&g, &alg)
///     .points_of_interest([0, 3])
///     .strategy(MatrixStrategy::Sparse)
///     .compute()
///     .unwrap();
///
/// assert_eq!(table.get(&3, &0), Some(&6));
/// assert_eq!(table.len(), 4);
/// ```
pub struct DistanceMatrix<'a, G, A>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    algebra: &'a A,
    points: Vec<G::Node>,
    strategy: MatrixStrategy,
}

impl<G, A> Clone for DistanceMatrix<'_, G, A>
where
    G: WeightedAdjacency,
{
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            algebra: self.algebra,
            points: self.points.clone(),
            strategy: self.strategy,
        }
    }
}

impl<'a, G, A> DistanceMatrix<'a, G, A>
where
    G: WeightedAdjacency + Sized,
    A: WeightAlgebra<Weight = G::Weight>,
{
    /// Creates a new configuration where every node of the graph is a point of interest
    pub fn new(graph: &'a G, algebra: &'a A) -> Self {
        Self {
            graph,
            algebra,
            points: graph.vertices().collect(),
            strategy: MatrixStrategy::default(),
        }
    }

    /// Sets the points of interest.
    ///
    /// Duplicates are removed (keeping the first occurrence) and nodes that are not part of
    /// the graph are ignored.
    pub fn points_of_interest<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = G::Node>,
    {
        let graph = self.graph;
        let mut seen = FxHashSet::default();
        self.points = points
            .into_iter()
            .filter(|u| graph.contains_node(u) && seen.insert(u.clone()))
            .collect();
        self
    }

    /// Sets the strategy used in [`DistanceMatrix::compute`]
    pub fn strategy(mut self, strategy: MatrixStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the points of interest in the order they will appear in
    pub fn points(&self) -> &[G::Node] {
        &self.points
    }

    /// Resolves [`MatrixStrategy::Auto`] into the regime that will actually be used
    pub fn regime(&self) -> MatrixStrategy {
        match self.strategy {
            MatrixStrategy::Auto => {
                let k = self.points.len();
                let n = self.graph.number_of_nodes();

                if k * k > n || self.graph.edges().any(|(_, _, w)| self.algebra.is_negative(&w)) {
                    MatrixStrategy::Dense
                } else {
                    MatrixStrategy::Sparse
                }
            }
            forced => forced,
        }
    }

    /// Computes the distances between all pairs of points of interest.
    ///
    /// Unreachable pairs have no entry. In the dense regime, a negative cycle anywhere in the
    /// graph yields an error.
    pub fn compute(&self) -> Result<DistanceTable<G::Node, G::Weight>, NegativeCycle<G::Node>> {
        let regime = self.regime();
        debug!(
            "distance matrix for {} points on {} nodes uses {:?} regime",
            self.points.len(),
            self.graph.number_of_nodes(),
            regime
        );

        if regime == MatrixStrategy::Dense {
            let table = self.graph.floyd_warshall(self.algebra)?;
            return Ok(table.restricted_to(&self.points));
        }

        let mut table = DistanceTable::new();
        for s in &self.points {
            let distances = self.graph.single_source_distances(s, self.algebra);
            for t in &self.points {
                if let Some(d) = distances.get(t) {
                    table.insert(s.clone(), t.clone(), d.clone());
                }
            }
        }
        Ok(table)
    }
}

/// Shorthand for pairwise distances between points of interest.
pub trait DistanceMatrices: WeightedAdjacency + Sized {
    /// Computes the distances between all pairs of `points` with [`MatrixStrategy::Auto`].
    /// See [`DistanceMatrix`] for details.
    fn distance_matrix<I, A>(
        &self,
        points: I,
        algebra: &A,
    ) -> Result<DistanceTable<Self::Node, Self::Weight>, NegativeCycle<Self::Node>>
    where
        I: IntoIterator<Item = Self::Node>,
        A: WeightAlgebra<Weight = Self::Weight>,
    {
        DistanceMatrix::new(self, algebra)
            .points_of_interest(points)
            .compute()
    }
}

impl<G> DistanceMatrices for G where G: WeightedAdjacency + Sized {}
