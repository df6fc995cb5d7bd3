/*!
# Paths and Distance Tables

Result types shared by the shortest-path algorithms:
- [`Path`]: a node sequence together with its total weight,
- [`DistanceTable`]: an all-pairs table keyed by `(source, target)`.
*/

use fxhash::{FxHashMap, FxHashSet};

use crate::node::NodeId;

/// A walk through the graph and its total weight.
///
/// Consecutive nodes are connected by an edge and `total_weight` is the `add`-fold of the
/// traversed edge weights, seeded by `zero`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<N, W> {
    pub nodes: Vec<N>,
    pub total_weight: W,
}

impl<N, W> Path<N, W> {
    pub fn new(nodes: Vec<N>, total_weight: W) -> Self {
        Self {
            nodes,
            total_weight,
        }
    }

    /// Returns the first node of the path
    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// Returns the last node of the path
    pub fn target(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Returns the number of nodes on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if the path has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges on the path
    pub fn number_of_edges(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Table of shortest distances keyed by `(source, target)`.
///
/// Unreachable pairs have no entry.
#[derive(Debug, Clone)]
pub struct DistanceTable<N, W> {
    rows: FxHashMap<N, FxHashMap<N, W>>,
    len: usize,
}

impl<N, W> Default for DistanceTable<N, W> {
    fn default() -> Self {
        Self {
            rows: FxHashMap::default(),
            len: 0,
        }
    }
}

impl<N: NodeId, W> DistanceTable<N, W> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance from `source` to `target` and returns the previous one
    pub fn insert(&mut self, source: N, target: N, distance: W) -> Option<W> {
        let previous = self.rows.entry(source).or_default().insert(target, distance);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns the distance from `source` to `target`, or `None` if `target` is unreachable
    pub fn get(&self, source: &N, target: &N) -> Option<&W> {
        self.rows.get(source)?.get(target)
    }

    /// Returns *true* if `target` is reachable from `source`
    pub fn contains(&self, source: &N, target: &N) -> bool {
        self.get(source, target).is_some()
    }

    /// Returns all `(target, distance)`-entries of `source`
    pub fn row(&self, source: &N) -> impl Iterator<Item = (&N, &W)> + '_ {
        self.rows.get(source).into_iter().flat_map(|row| row.iter())
    }

    /// Returns the number of `(source, target)`-entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if there are no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over all `(source, target, distance)`-entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N, &W)> + '_ {
        self.rows
            .iter()
            .flat_map(|(u, row)| row.iter().map(move |(v, w)| (u, v, w)))
    }

    /// Returns the sub-table of all pairs whose endpoints both lie in `points`
    pub fn restricted_to<'a, I>(&self, points: I) -> Self
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
        W: Clone,
    {
        let points: FxHashSet<&N> = points.into_iter().collect();

        let mut table = Self::new();
        for (u, v, w) in self.iter() {
            if points.contains(u) && points.contains(v) {
                table.insert(u.clone(), v.clone(), w.clone());
            }
        }
        table
    }
}

impl<N: NodeId, W: PartialEq> PartialEq for DistanceTable<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(u, v, w)| other.get(u, v) == Some(w))
    }
}

impl<N: NodeId, W: Eq> Eq for DistanceTable<N, W> {}

impl<N: NodeId, W> FromIterator<(N, N, W)> for DistanceTable<N, W> {
    fn from_iter<T: IntoIterator<Item = (N, N, W)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (u, v, w) in iter {
            table.insert(u, v, w);
        }
        table
    }
}
