/*!
# Bellman-Ford

Shortest paths in the presence of negative edge weights.

Only the part of the graph reachable from the source takes part in the relaxation, so a
negative cycle elsewhere never influences the result. If no reachable edge is negative, the
query is answered by the priority search of [`ShortestPaths`] instead; both algorithms then
return the identical path.
*/

use std::{collections::VecDeque, hash::Hash};

use fxhash::FxHashMap;
use log::debug;

use super::*;

/// Outcome of [`BellmanFord::bellman_ford`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BellmanFordResult<N, W> {
    /// A shortest path from source to target
    ShortestPath(Path<N, W>),
    /// The target is not reachable (or one of the endpoints is unknown)
    NoPath,
    /// A negative cycle is reachable from the source; distances are unbounded
    NegativeCycle,
}

impl<N, W> BellmanFordResult<N, W> {
    /// Returns the path if one was found
    pub fn path(self) -> Option<Path<N, W>> {
        match self {
            Self::ShortestPath(path) => Some(path),
            _ => None,
        }
    }

    /// Returns *true* if a negative cycle was detected
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle)
    }
}

/// Outcome of [`implicit_bellman_ford`] and [`implicit_bellman_ford_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImplicitBellmanFord<W> {
    /// Distance of the closest goal state
    FoundGoal(W),
    /// No reachable state satisfies the goal predicate
    NoGoal,
    /// A negative cycle is reachable from the start
    DetectedNegativeCycle,
}

/// Shortest paths with negative weights on explicit graphs.
pub trait BellmanFord: WeightedAdjacency + Sized {
    /// Computes a shortest path from `source` to `target` that may use negative edges.
    ///
    /// - Returns [`BellmanFordResult::NegativeCycle`] iff a negative cycle (including a negative
    ///   self-loop) is reachable from `source`, even if the cycle does not lead to `target`.
    /// - Missing endpoints and unreachable targets yield [`BellmanFordResult::NoPath`].
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, weight::NumericAlgebra};
    ///
    /// let g = WeightedAdjArrayDir::from_edges([(1, 2, 10), (2, 3, -5)]);
    /// assert_eq!(
    ///     g.bellman_ford(&1, &3, &NumericAlgebra::new()),
    ///     BellmanFordResult::ShortestPath(Path::new(vec![1, 2, 3], 5))
    /// );
    ///
    /// let g = WeightedAdjArrayDir::from_edges([(1, 2, 1), (2, 3, 1), (3, 1, -5)]);
    /// assert!(g.bellman_ford(&1, &2, &NumericAlgebra::new()).is_negative_cycle());
    /// ```
    fn bellman_ford<A>(
        &self,
        source: &Self::Node,
        target: &Self::Node,
        algebra: &A,
    ) -> BellmanFordResult<Self::Node, Self::Weight>
    where
        A: WeightAlgebra<Weight = Self::Weight>,
    {
        if !self.contains_node(source) || !self.contains_node(target) {
            return BellmanFordResult::NoPath;
        }

        // source is the first node of the walk and thus receives index 0
        let reachable = self.walk(source.clone(), Strategy::BreadthFirst);
        let index: FxHashMap<Self::Node, usize> = reachable
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, u)| (u, i))
            .collect();

        let edges: Vec<(usize, usize, Self::Weight)> = reachable
            .iter()
            .enumerate()
            .flat_map(|(i, u)| {
                let index = &index;
                self.successors(u)
                    .filter_map(move |(v, w)| index.get(&v).map(|&j| (i, j, w)))
            })
            .collect();

        if !edges.iter().any(|(_, _, w)| algebra.is_negative(w)) {
            return match self.shortest_path(source, target, algebra) {
                Some(path) => BellmanFordResult::ShortestPath(path),
                None => BellmanFordResult::NoPath,
            };
        }

        let n = reachable.len();
        let mut distance: Vec<Option<Self::Weight>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        distance[0] = Some(algebra.zero());

        // n - 1 passes suffice without negative cycles; the n-th pass only checks for them
        for pass in 1..=n {
            let mut changed = false;

            for (u, v, w) in &edges {
                let Some(du) = distance[*u].clone() else {
                    continue;
                };

                let candidate = algebra.add(&du, w);
                if distance[*v]
                    .as_ref()
                    .is_none_or(|dv| algebra.less(&candidate, dv))
                {
                    distance[*v] = Some(candidate);
                    parent[*v] = Some(*u);
                    changed = true;
                }
            }

            if !changed {
                debug!("bellman-ford converged after {pass} passes on {n} reachable nodes");
                break;
            }

            if pass == n {
                debug!("bellman-ford found a negative cycle reachable from {source:?}");
                return BellmanFordResult::NegativeCycle;
            }
        }

        let Some(&t) = index.get(target) else {
            return BellmanFordResult::NoPath;
        };
        let Some(total_weight) = distance[t].clone() else {
            return BellmanFordResult::NoPath;
        };

        let mut nodes = vec![reachable[t].clone()];
        let mut current = t;
        while let Some(p) = parent[current] {
            nodes.push(reachable[p].clone());
            current = p;
        }
        nodes.reverse();

        BellmanFordResult::ShortestPath(Path::new(nodes, total_weight))
    }
}

impl<G> BellmanFord for G where G: WeightedAdjacency + Sized {}

/// Best-known label of a key in the implicit search
struct Label<S, W> {
    state: S,
    distance: W,
    edges: usize,
    queued: bool,
    goal: bool,
}

/// Returns the distance to the closest state satisfying `is_goal`, allowing negative weights
/// and deduplicating states by `visited_by`.
///
/// Labels are corrected with a FIFO work-queue until a fixed point is reached, so the whole
/// reachable state space is explored and must be finite. Only strict improvements replace the
/// state stored for a key. A label whose path has at least as many edges as keys were discovered
/// must contain a cycle that kept improving, and is reported as
/// [`ImplicitBellmanFord::DetectedNegativeCycle`].
///
/// Among several goal states with the same distance, the first discovered is reported.
pub fn implicit_bellman_ford_by<S, K, A, F, I, B, G>(
    start: S,
    mut successors_with_cost: F,
    mut visited_by: B,
    mut is_goal: G,
    algebra: &A,
) -> ImplicitBellmanFord<A::Weight>
where
    K: Eq + Hash + Clone,
    A: WeightAlgebra,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, A::Weight)>,
    B: FnMut(&S) -> K,
    G: FnMut(&S) -> bool,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    index.insert(visited_by(&start), 0);

    let mut labels = vec![Label {
        goal: is_goal(&start),
        state: start,
        distance: algebra.zero(),
        edges: 0,
        queued: true,
    }];
    let mut queue = VecDeque::from(vec![0]);

    while let Some(i) = queue.pop_front() {
        labels[i].queued = false;
        let distance = labels[i].distance.clone();
        let edges = labels[i].edges + 1;

        for (next, weight) in successors_with_cost(&labels[i].state) {
            let candidate = algebra.add(&distance, &weight);
            let key = visited_by(&next);

            let j = match index.get(&key) {
                Some(&j) => {
                    if !algebra.less(&candidate, &labels[j].distance) {
                        continue;
                    }

                    let label = &mut labels[j];
                    label.goal = is_goal(&next);
                    label.state = next;
                    label.distance = candidate;
                    label.edges = edges;
                    j
                }
                None => {
                    let j = labels.len();
                    index.insert(key, j);
                    labels.push(Label {
                        goal: is_goal(&next),
                        state: next,
                        distance: candidate,
                        edges,
                        queued: false,
                    });
                    j
                }
            };

            if edges >= labels.len() {
                debug!(
                    "implicit bellman-ford detected a negative cycle after discovering {} keys",
                    labels.len()
                );
                return ImplicitBellmanFord::DetectedNegativeCycle;
            }

            if !labels[j].queued {
                labels[j].queued = true;
                queue.push_back(j);
            }
        }
    }

    debug!("implicit bellman-ford settled {} keys", labels.len());

    labels
        .iter()
        .filter(|label| label.goal)
        .fold(None, |best: Option<&A::Weight>, label| match best {
            Some(b) if !algebra.less(&label.distance, b) => Some(b),
            _ => Some(&label.distance),
        })
        .map_or(ImplicitBellmanFord::NoGoal, |w| {
            ImplicitBellmanFord::FoundGoal(w.clone())
        })
}

/// Same as [`implicit_bellman_ford_by`] where every state is its own key.
///
/// # Examples
/// ```
/// use wgraphs::{algo::*, weight::NumericAlgebra};
///
/// // chain 0 -> 1 -> 2 -> 3 with a negative shortcut 0 -> 2
/// let result = implicit_bellman_ford(
///     0u8,
///     |&n| match n {
///         0 => vec![(1, 4), (2, -1)],
///         1 => vec![(2, 1)],
///         2 => vec![(3, 2)],
///         _ => vec![],
///     },
///     |&n| n == 3,
///     &NumericAlgebra::<i32>::new(),
/// );
/// assert_eq!(result, ImplicitBellmanFord::FoundGoal(1));
/// ```
pub fn implicit_bellman_ford<S, A, F, I, G>(
    start: S,
    successors_with_cost: F,
    is_goal: G,
    algebra: &A,
) -> ImplicitBellmanFord<A::Weight>
where
    S: Eq + Hash + Clone,
    A: WeightAlgebra,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, A::Weight)>,
    G: FnMut(&S) -> bool,
{
    implicit_bellman_ford_by(start, successors_with_cost, S::clone, is_goal, algebra)
}
