/*!
Graph traversal with fold-based visitation and three-tier early termination.

This module provides:
- A generic BFS/DFS engine ([`implicit_fold_by`]) driven by a successor function and a
  deduplication key, so it works for explicit graphs and for state spaces that are too
  large (or infinite) to materialize.
- The control signal [`Control`] that lets a visitor continue, prune the current branch
  or halt the whole traversal, with identical semantics under BFS and DFS.
- A high-level [`Traversal`] trait exposing walks directly as methods on graph data structures.

Breadth-first search uses a FIFO frontier, depth-first search a LIFO frontier that produces
the preorder of a recursive DFS (successors are explored in their stable order).
Every reachable state is visited at most once: a state is recorded when it is taken out of
the frontier, and a state whose key was already recorded is discarded, never merged.
*/

use std::{collections::VecDeque, hash::Hash};

use fxhash::FxHashSet;
use log::trace;
use smallvec::SmallVec;

use super::*;

/// Order in which a traversal explores the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// FIFO frontier: nodes are visited by increasing depth.
    #[default]
    BreadthFirst,
    /// LIFO frontier: recursive preorder.
    DepthFirst,
}

/// Signal returned by a visitor to steer the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Control {
    /// Enqueue the unvisited successors of the current node as usual.
    #[default]
    Continue,
    /// Keep the current node as visited but do not enqueue its successors.
    /// Only this branch is pruned; siblings and their subtrees are still visited.
    Stop,
    /// Terminate the traversal right after the current node.
    Halt,
}

/// Metadata handed to a visitor together with the visited node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Visit<K> {
    /// Number of edges between the start and the node in the traversal tree
    pub depth: usize,
    /// Key of the node from which this node was reached; `None` for the start
    pub parent: Option<K>,
}

impl<K> Visit<K> {
    fn root() -> Self {
        Self {
            depth: 0,
            parent: None,
        }
    }

    /// Returns *true* if this is the start of the traversal
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

fn fold_with<Q, S, K, A, F, I, B, V>(
    start: S,
    initial: A,
    mut successors_of: F,
    mut visited_by: B,
    mut visitor: V,
) -> A
where
    Q: NodeSequencer<(S, K, Visit<K>)>,
    K: Eq + Hash + Clone,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    B: FnMut(&S) -> K,
    V: FnMut(A, &S, &Visit<K>) -> (Control, A),
{
    let start_key = visited_by(&start);
    let mut frontier = Q::init((start, start_key, Visit::root()));
    let mut visited: FxHashSet<K> = FxHashSet::default();
    let mut acc = initial;

    while let Some((state, key, visit)) = frontier.pop() {
        // first arrival wins, later arrivals at the same key are discarded
        if !visited.insert(key.clone()) {
            continue;
        }

        let (control, next) = visitor(acc, &state, &visit);
        acc = next;

        match control {
            Control::Continue => {}
            Control::Stop => continue,
            Control::Halt => break,
        }

        let depth = visit.depth + 1;
        let children: SmallVec<[_; 8]> = successors_of(&state)
            .into_iter()
            .filter_map(|child| {
                let child_key = visited_by(&child);
                (!visited.contains(&child_key)).then(|| {
                    let parent = Some(key.clone());
                    (child, child_key, Visit { depth, parent })
                })
            })
            .collect();

        frontier.push_children(children.into_iter());
    }

    trace!(
        "traversal finished after {} visits with {} entries left in frontier",
        visited.len(),
        frontier.cardinality()
    );

    acc
}

/// Folds over all states reachable from `start`, deduplicating states by `visited_by`.
///
/// - `successors_of(state)` lazily generates the neighbors of a state.
/// - `visited_by(state)` projects a state onto its identity. Two states with equal keys are
///   considered the same node: the **first** one to be reached is passed to the visitor,
///   later ones are discarded. Auxiliary payload (histories, bitmasks, ...) can thus be
///   carried in the state without affecting deduplication.
/// - `visitor(acc, state, visit)` returns the new accumulator and a [`Control`]-signal.
///
/// Termination on infinite state spaces is the caller's responsibility (e.g. via [`Control::Halt`]).
///
/// # Examples
/// ```
/// use wgraphs::algo::*;
///
/// // States carry the path taken so far, but are deduplicated by their position only
/// let visited = implicit_fold_by(
///     (0u32, vec![0u32]),
///     Strategy::BreadthFirst,
///     Vec::new(),
///     |(n, hist): &(u32, Vec<u32>)| {
///         [n + 1, n + 2].into_iter().filter(|&m| m <= 4).map(|m| {
///             let mut hist = hist.clone();
///             hist.push(m);
///             (m, hist)
///         }).collect::<Vec<_>>()
///     },
///     |(n, _)| *n,
///     |mut acc, (_, hist), _| {
///         acc.push(hist.clone());
///         (Control::Continue, acc)
///     },
/// );
///
/// assert_eq!(visited, vec![vec![0], vec![0, 1], vec![0, 2], vec![0, 1, 3], vec![0, 2, 4]]);
/// ```
pub fn implicit_fold_by<S, K, A, F, I, B, V>(
    start: S,
    strategy: Strategy,
    initial: A,
    successors_of: F,
    visited_by: B,
    visitor: V,
) -> A
where
    K: Eq + Hash + Clone,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    B: FnMut(&S) -> K,
    V: FnMut(A, &S, &Visit<K>) -> (Control, A),
{
    match strategy {
        Strategy::BreadthFirst => {
            fold_with::<VecDeque<_>, _, _, _, _, _, _, _>(start, initial, successors_of, visited_by, visitor)
        }
        Strategy::DepthFirst => {
            fold_with::<Vec<_>, _, _, _, _, _, _, _>(start, initial, successors_of, visited_by, visitor)
        }
    }
}

/// Same as [`implicit_fold_by`] where every state is its own key.
pub fn implicit_fold<S, A, F, I, V>(
    start: S,
    strategy: Strategy,
    initial: A,
    successors_of: F,
    visitor: V,
) -> A
where
    S: Eq + Hash + Clone,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    V: FnMut(A, &S, &Visit<S>) -> (Control, A),
{
    implicit_fold_by(start, strategy, initial, successors_of, S::clone, visitor)
}

/// Collects all states reachable from `start` in traversal order.
///
/// The state space must be finite.
pub fn implicit_walk<S, F, I>(start: S, strategy: Strategy, successors_of: F) -> Vec<S>
where
    S: Eq + Hash + Clone,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    implicit_fold(start, strategy, Vec::new(), successors_of, |mut acc, s, _| {
        acc.push(s.clone());
        (Control::Continue, acc)
    })
}

/// Provides convenient traversal methods (BFS, DFS, folds) on explicit graphs.
///
/// Edge weights are ignored. A start node that is not part of the graph yields an empty walk.
pub trait Traversal: WeightedAdjacency + Sized {
    /// Returns all nodes reachable from `start` in traversal order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedAdjArrayDir::from_edges([(1, 2, ()), (1, 3, ()), (2, 4, ())]);
    ///
    /// assert_eq!(g.walk(1, Strategy::BreadthFirst), vec![1, 2, 3, 4]);
    /// assert_eq!(g.walk(1, Strategy::DepthFirst), vec![1, 2, 4, 3]);
    /// ```
    fn walk(&self, start: Self::Node, strategy: Strategy) -> Vec<Self::Node> {
        self.fold_walk(start, strategy, Vec::new(), |mut acc, u, _| {
            acc.push(u.clone());
            (Control::Continue, acc)
        })
    }

    /// Returns the prefix of [`Traversal::walk`] ending at (and including) the first node
    /// satisfying `predicate`, or the full walk if no node does.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedAdjArrayDir::from_edges([(1, 2, ()), (1, 3, ()), (2, 4, ())]);
    ///
    /// assert_eq!(g.walk_until(1, Strategy::BreadthFirst, |&u| u == 3), vec![1, 2, 3]);
    /// assert_eq!(g.walk_until(1, Strategy::BreadthFirst, |&u| u == 9), vec![1, 2, 3, 4]);
    /// ```
    fn walk_until<P>(&self, start: Self::Node, strategy: Strategy, mut predicate: P) -> Vec<Self::Node>
    where
        P: FnMut(&Self::Node) -> bool,
    {
        self.fold_walk(start, strategy, Vec::new(), |mut acc, u, _| {
            acc.push(u.clone());
            let control = if predicate(u) {
                Control::Halt
            } else {
                Control::Continue
            };
            (control, acc)
        })
    }

    /// Drives a walk from `start` through `visitor`, which receives the accumulator, the
    /// current node and its [`Visit`]-metadata and returns a [`Control`]-signal together with
    /// the new accumulator.
    fn fold_walk<A, V>(&self, start: Self::Node, strategy: Strategy, initial: A, visitor: V) -> A
    where
        V: FnMut(A, &Self::Node, &Visit<Self::Node>) -> (Control, A),
    {
        if !self.contains_node(&start) {
            return initial;
        }

        implicit_fold(
            start,
            strategy,
            initial,
            |u| self.successors(u).map(|(v, _)| v),
            visitor,
        )
    }
}

impl<G> Traversal for G where G: WeightedAdjacency + Sized {}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;
    use itertools::Itertools;

    use super::*;
    use crate::testing::*;

    const BOTH: [Strategy; 2] = [Strategy::BreadthFirst, Strategy::DepthFirst];

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = unweighted_graph(&[(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        assert_eq!(graph.walk(1, Strategy::BreadthFirst), vec![1, 2, 0, 4, 5, 3]);
        assert_eq!(graph.walk(5, Strategy::BreadthFirst), vec![5, 4, 3]);
    }

    #[test]
    fn dfs_is_recursive_preorder() {
        let graph = unweighted_graph(&[(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        fn preorder(graph: &WeightedAdjArrayDir<u32, ()>, u: u32, order: &mut Vec<u32>) {
            order.push(u);
            for (v, _) in graph.successors(&u) {
                if !order.contains(&v) {
                    preorder(graph, v, order);
                }
            }
        }

        for start in graph.vertices() {
            let mut expected = Vec::new();
            preorder(&graph, start, &mut expected);
            assert_eq!(graph.walk(start, Strategy::DepthFirst), expected);
        }
        assert_eq!(graph.walk(1, Strategy::DepthFirst), vec![1, 2, 4, 3, 0, 5]);
    }

    #[test]
    fn depth_and_parent() {
        let graph = unweighted_graph(&[(0, 1), (0, 2), (1, 3), (2, 3), (3, 0), (3, 3), (3, 4)]);

        for strategy in BOTH {
            let metas = graph.fold_walk(0, strategy, FxHashMap::default(), |mut acc, u, visit| {
                assert!(acc.insert(*u, visit.clone()).is_none());
                (Control::Continue, acc)
            });

            assert_eq!(metas.len(), 5);
            assert!(metas[&0].is_root());
            assert_eq!(metas[&0].depth, 0);

            for (u, visit) in &metas {
                if let Some(p) = visit.parent {
                    assert!(graph.has_edge(&p, u));
                    assert_eq!(visit.depth, metas[&p].depth + 1);
                }
            }
        }

        let metas = graph.fold_walk(0, Strategy::DepthFirst, Vec::new(), |mut acc, u, visit| {
            acc.push((*u, visit.depth, visit.parent));
            (Control::Continue, acc)
        });
        assert_eq!(
            metas,
            vec![
                (0, 0, None),
                (1, 1, Some(0)),
                (3, 2, Some(1)),
                (4, 3, Some(3)),
                (2, 1, Some(0))
            ]
        );
    }

    #[test]
    fn stop_prunes_only_branch() {
        // 0 -> 1 -> 3 -> 5
        // 0 -> 2 -> 4
        //      2 -> 3
        let graph = unweighted_graph(&[(0, 1), (0, 2), (1, 3), (3, 5), (2, 4), (2, 3)]);

        for strategy in BOTH {
            let visited = graph.fold_walk(0, strategy, Vec::new(), |mut acc, &u, _| {
                acc.push(u);
                let control = if u == 2 { Control::Stop } else { Control::Continue };
                (control, acc)
            });
            assert_eq!(visited.iter().copied().sorted().collect_vec(), vec![0, 1, 2, 3, 5]);

            let visited = graph.fold_walk(0, strategy, Vec::new(), |mut acc, &u, _| {
                acc.push(u);
                let control = if u == 1 || u == 2 { Control::Stop } else { Control::Continue };
                (control, acc)
            });
            assert_eq!(visited.iter().copied().sorted().collect_vec(), vec![0, 1, 2]);
        }
    }

    #[test]
    fn halt_stops_everything() {
        let graph = unweighted_graph(&[(0, 1), (0, 2), (1, 3), (2, 4), (3, 5)]);

        let visited = graph.fold_walk(0, Strategy::BreadthFirst, Vec::new(), |mut acc, &u, _| {
            acc.push(u);
            (if u == 2 { Control::Halt } else { Control::Continue }, acc)
        });
        assert_eq!(visited, vec![0, 1, 2]);

        let visited = graph.fold_walk(0, Strategy::DepthFirst, Vec::new(), |mut acc, &u, _| {
            acc.push(u);
            (if u == 3 { Control::Halt } else { Control::Continue }, acc)
        });
        assert_eq!(visited, vec![0, 1, 3]);

        let count = graph.fold_walk(0, Strategy::DepthFirst, 0, |acc, _, _| (Control::Halt, acc + 1));
        assert_eq!(count, 1);
    }

    #[test]
    fn walk_until() {
        let graph = unweighted_graph(&[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.walk(0, Strategy::BreadthFirst), vec![0, 1, 2, 3]);
        assert_eq!(graph.walk_until(0, Strategy::BreadthFirst, |&u| u == 1), vec![0, 1]);
        assert_eq!(graph.walk_until(0, Strategy::DepthFirst, |&u| u == 0), vec![0]);
        assert_eq!(graph.walk_until(2, Strategy::DepthFirst, |&u| u == 0), vec![2, 3]);
    }

    #[test]
    fn loops_and_missing_start() {
        let mut graph = unweighted_graph(&[(0, 0), (0, 1), (1, 0), (1, 1), (1, 2)]);
        graph.add_node(7);

        for strategy in BOTH {
            assert_eq!(graph.walk(0, strategy), vec![0, 1, 2]);
            assert_eq!(graph.walk(7, strategy), vec![7]);
            assert!(graph.walk(9, strategy).is_empty());
        }
    }

    #[test]
    fn random_graphs_visit_reachable_once() {
        let rng = &mut test_rng();

        for _ in 0..30 {
            let graph = random_graph::<_, Directed>(rng, 25, 60, 0..1);
            let reachable = reachable_set(&graph, 0);

            for strategy in BOTH {
                let order = graph.walk(0, strategy);
                assert_eq!(order.len(), reachable.len());
                assert!(order.iter().all_unique());
                assert!(order.iter().all(|u| reachable.contains(u)));
            }
        }
    }

    #[test]
    fn implicit_bfs_until_goal() {
        let visited = implicit_fold(
            1u32,
            Strategy::BreadthFirst,
            Vec::new(),
            |&n| if n < 5 { vec![n + 1] } else { vec![] },
            |mut acc, &n, _| {
                acc.push(n);
                (if n == 5 { Control::Halt } else { Control::Continue }, acc)
            },
        );
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn implicit_infinite_space_with_halt() {
        // unbounded binary tree over integers; halt on first multiple of 7 beyond the root
        for strategy in BOTH {
            let found = implicit_fold(
                1u64,
                strategy,
                None,
                |&n| [2 * n, 2 * n + 1],
                |acc, &n, visit| {
                    if n % 7 == 0 {
                        (Control::Halt, Some((n, visit.depth)))
                    } else if visit.depth >= 10 {
                        (Control::Stop, acc)
                    } else {
                        (Control::Continue, acc)
                    }
                },
            );
            match strategy {
                Strategy::BreadthFirst => assert_eq!(found, Some((7, 2))),
                // preorder exhausts the depth-limited subtree of 256 before reaching 257
                Strategy::DepthFirst => assert_eq!(found, Some((1029, 10))),
            }
        }
    }

    #[test]
    fn dedup_first_arrival_wins() {
        // (position, tag): both 1 and 2 lead to position 3, carrying different tags
        let successors = |&(n, _): &(u32, char)| match n {
            0 => vec![(1, 'a'), (2, 'b')],
            1 => vec![(3, 'x')],
            2 => vec![(3, 'y')],
            _ => vec![],
        };

        let bfs = implicit_fold_by(
            (0, '-'),
            Strategy::BreadthFirst,
            Vec::new(),
            successors,
            |&(n, _)| n,
            |mut acc, &s, visit| {
                acc.push((s, visit.parent));
                (Control::Continue, acc)
            },
        );
        assert_eq!(
            bfs,
            vec![((0, '-'), None), ((1, 'a'), Some(0)), ((2, 'b'), Some(0)), ((3, 'x'), Some(1))]
        );

        let dfs = implicit_fold_by(
            (0, '-'),
            Strategy::DepthFirst,
            Vec::new(),
            successors,
            |&(n, _)| n,
            |mut acc, &(n, tag), _| {
                acc.push((n, tag));
                (Control::Continue, acc)
            },
        );
        assert_eq!(dfs, vec![(0, '-'), (1, 'a'), (3, 'x'), (2, 'b')]);
    }

    #[test]
    fn implicit_walk_collects() {
        let order = implicit_walk(0u8, Strategy::DepthFirst, |&n| (n < 3).then_some(n + 1));
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}
