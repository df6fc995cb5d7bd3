/*!
# Dijkstra

Best-first search over a priority frontier ordered by tentative distance.

All variants share one engine operating on a successor function and a deduplication key:
- the implicit forms [`implicit_dijkstra`] / [`implicit_dijkstra_by`] search a state space
  until a state satisfies `is_goal` and return the goal's distance,
- the explicit forms on [`ShortestPaths`] adapt `graph.successors` into a successor function,
  delegate to the same engine and reconstruct the node sequence from the recorded parents.

Edge weights must be non-negative with respect to the algebra; otherwise the result is
unspecified (use [`BellmanFord`](super::BellmanFord) instead). This precondition is not checked.
*/

use std::{collections::hash_map::Entry, hash::Hash};

use fxhash::FxHashMap;
use log::{debug, trace};

use super::*;

/// Best-known record of a key during a best-first search.
#[derive(Debug, Clone)]
struct Record<K, W> {
    distance: W,
    parent: Option<K>,
    settled: bool,
}

/// Outcome of a best-first search: the records of all discovered keys and the goal, if found.
pub(crate) struct SearchTree<K, W> {
    records: FxHashMap<K, Record<K, W>>,
    goal: Option<K>,
}

impl<K, W> SearchTree<K, W>
where
    K: Eq + Hash + Clone,
    W: Clone,
{
    /// Returns the distance of the goal that terminated the search
    pub(crate) fn goal_distance(&self) -> Option<W> {
        let goal = self.goal.as_ref()?;
        self.records.get(goal).map(|r| r.distance.clone())
    }

    /// Follows the parent pointers from the goal back to the start
    pub(crate) fn path_to_goal(&self) -> Option<Path<K, W>> {
        let goal = self.goal.clone()?;
        let total_weight = self.records.get(&goal)?.distance.clone();

        let mut nodes = vec![goal];
        while let Some(parent) = nodes
            .last()
            .and_then(|u| self.records.get(u))
            .and_then(|r| r.parent.clone())
        {
            nodes.push(parent);
        }
        nodes.reverse();

        Some(Path::new(nodes, total_weight))
    }

    /// Consumes the tree and returns the final distances of all settled keys
    pub(crate) fn into_settled_distances(self) -> FxHashMap<K, W> {
        self.records
            .into_iter()
            .filter_map(|(k, r)| r.settled.then_some((k, r.distance)))
            .collect()
    }
}

/// Generic best-first search shared by Dijkstra and A*.
///
/// Entries are prioritized by `distance + heuristic(state)`. A key is settled when it is popped
/// with its best-known distance and is never relaxed again, so every key is expanded at most once
/// and the search terminates on finite state spaces even if weights are negative.
/// The search stops as soon as a settled state satisfies `is_goal`.
pub(crate) fn best_first_by<S, K, A, F, I, B, H, G>(
    start: S,
    mut successors_with_cost: F,
    mut visited_by: B,
    mut heuristic: H,
    mut is_goal: G,
    algebra: &A,
) -> SearchTree<K, A::Weight>
where
    K: Eq + Hash + Clone,
    A: WeightAlgebra,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, A::Weight)>,
    B: FnMut(&S) -> K,
    H: FnMut(&S) -> A::Weight,
    G: FnMut(&S) -> bool,
{
    let mut records: FxHashMap<K, Record<K, A::Weight>> = FxHashMap::default();
    let mut frontier = PriorityFrontier::new(algebra);

    let start_key = visited_by(&start);
    let zero = algebra.zero();
    let priority = algebra.add(&zero, &heuristic(&start));
    records.insert(
        start_key.clone(),
        Record {
            distance: zero.clone(),
            parent: None,
            settled: false,
        },
    );
    frontier.push((start, start_key, zero), priority);

    let mut goal = None;
    while let Some(((state, key, distance), _)) = frontier.pop() {
        let Some(record) = records.get_mut(&key) else {
            continue;
        };

        // skip finalized keys and entries superseded by a shorter distance
        if record.settled || algebra.less(&record.distance, &distance) {
            continue;
        }
        record.settled = true;

        if is_goal(&state) {
            goal = Some(key);
            break;
        }

        for (next, weight) in successors_with_cost(&state) {
            let next_key = visited_by(&next);
            let candidate = algebra.add(&distance, &weight);

            match records.entry(next_key.clone()) {
                Entry::Occupied(mut entry) => {
                    let record = entry.get_mut();
                    if record.settled || !algebra.less(&candidate, &record.distance) {
                        continue;
                    }
                    record.distance = candidate.clone();
                    record.parent = Some(key.clone());
                }
                Entry::Vacant(entry) => {
                    entry.insert(Record {
                        distance: candidate.clone(),
                        parent: Some(key.clone()),
                        settled: false,
                    });
                }
            }

            let priority = algebra.add(&candidate, &heuristic(&next));
            frontier.push((next, next_key, candidate), priority);
        }
    }

    trace!(
        "best-first search discovered {} keys with {} pushes, goal found: {}",
        records.len(),
        frontier.number_of_pushes(),
        goal.is_some()
    );

    SearchTree { records, goal }
}

/// Returns the shortest distance from `start` to any state satisfying `is_goal`,
/// deduplicating states by `visited_by`.
///
/// The first state reaching a key with the smallest distance is the one that is expanded;
/// later states with equal distance are discarded.
///
/// # Examples
/// ```
/// use wgraphs::{algo::*, weight::NumericAlgebra};
///
/// // walk on the integers; the state remembers how many steps were taken
/// let dist = implicit_dijkstra_by(
///     (0i32, 0u32),
///     |&(pos, steps)| [(pos + 1, steps + 1), (pos * 2, steps + 1)].map(|s| (s, 1u32)),
///     |&(pos, _)| pos,
///     |&(pos, _)| pos == 6,
///     &NumericAlgebra::new(),
/// );
/// assert_eq!(dist, Some(4)); // 0 -> 1 -> 2 -> 3 -> 6
/// ```
pub fn implicit_dijkstra_by<S, K, A, F, I, B, G>(
    start: S,
    successors_with_cost: F,
    visited_by: B,
    is_goal: G,
    algebra: &A,
) -> Option<A::Weight>
where
    K: Eq + Hash + Clone,
    A: WeightAlgebra,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, A::Weight)>,
    B: FnMut(&S) -> K,
    G: FnMut(&S) -> bool,
{
    best_first_by(
        start,
        successors_with_cost,
        visited_by,
        |_| algebra.zero(),
        is_goal,
        algebra,
    )
    .goal_distance()
}

/// Same as [`implicit_dijkstra_by`] where every state is its own key.
pub fn implicit_dijkstra<S, A, F, I, G>(
    start: S,
    successors_with_cost: F,
    is_goal: G,
    algebra: &A,
) -> Option<A::Weight>
where
    S: Eq + Hash + Clone,
    A: WeightAlgebra,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, A::Weight)>,
    G: FnMut(&S) -> bool,
{
    implicit_dijkstra_by(start, successors_with_cost, S::clone, is_goal, algebra)
}

/// Shortest paths on explicit graphs.
pub trait ShortestPaths: WeightedAdjacency + Sized {
    /// Computes a shortest path from `source` to `target` with Dijkstra's algorithm.
    ///
    /// - Returns `None` if `target` is unreachable or one of the endpoints is not in the graph.
    /// - `source == target` always yields the single-node path of weight `zero`.
    /// - Among several shortest paths, the result is deterministic: frontier ties are broken
    ///   by discovery order and successors are scanned in their stable order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, weight::NumericAlgebra};
    ///
    /// let g = WeightedAdjArrayDir::from_edges([(1, 2, 1), (2, 3, 2), (1, 3, 4)]);
    /// let path = g.shortest_path(&1, &3, &NumericAlgebra::new()).unwrap();
    ///
    /// assert_eq!(path, Path::new(vec![1, 2, 3], 3));
    /// ```
    fn shortest_path<A>(
        &self,
        source: &Self::Node,
        target: &Self::Node,
        algebra: &A,
    ) -> Option<Path<Self::Node, Self::Weight>>
    where
        A: WeightAlgebra<Weight = Self::Weight>,
    {
        self.a_star(source, target, |_, _| algebra.zero(), algebra)
    }

    /// Returns the distances of all nodes reachable from `source`, including `source` itself
    /// at distance `zero`. Unknown sources yield an empty map.
    fn single_source_distances<A>(
        &self,
        source: &Self::Node,
        algebra: &A,
    ) -> FxHashMap<Self::Node, Self::Weight>
    where
        A: WeightAlgebra<Weight = Self::Weight>,
    {
        if !self.contains_node(source) {
            return FxHashMap::default();
        }

        let distances = best_first_by(
            source.clone(),
            |u| self.successors(u),
            Self::Node::clone,
            |_| algebra.zero(),
            |_| false,
            algebra,
        )
        .into_settled_distances();

        debug!("{} nodes reachable from {:?}", distances.len(), source);
        distances
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacency + Sized {}
