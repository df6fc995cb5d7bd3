/*!
# A*

Goal-directed variant of [Dijkstra](super::ShortestPaths) that prioritizes the frontier by
`distance(u) + heuristic(u)`. With an admissible heuristic (one that never overestimates the
remaining cost) the returned distance is optimal; admissibility is not checked.
A heuristic that is constantly `zero` degenerates to Dijkstra and returns the very same path.
*/

use std::hash::Hash;

use super::*;

/// Returns the shortest distance from `start` to any state satisfying `is_goal`, guided by
/// `heuristic` and deduplicating states by `visited_by`.
pub fn implicit_a_star_by<S, K, A, F, I, B, H, G>(
    start: S,
    successors_with_cost: F,
    visited_by: B,
    heuristic: H,
    is_goal: G,
    algebra: &A,
) -> Option<A::Weight>
where
    K: Eq + Hash + Clone,
    A: WeightAlgebra,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, A::Weight)>,
    B: FnMut(&S) -> K,
    H: FnMut(&S) -> A::Weight,
    G: FnMut(&S) -> bool,
{
    best_first_by(start, successors_with_cost, visited_by, heuristic, is_goal, algebra).goal_distance()
}

/// Same as [`implicit_a_star_by`] where every state is its own key.
///
/// # Examples
/// ```
/// use wgraphs::{algo::*, weight::NumericAlgebra};
///
/// // 4-connected grid without obstacles
/// let target = (7i32, 3i32);
/// let dist = implicit_a_star(
///     (0i32, 0i32),
///     |&(x, y)| [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)].map(|s| (s, 1u32)),
///     |&(x, y)| ((x - target.0).abs() + (y - target.1).abs()) as u32,
///     |&s| s == target,
///     &NumericAlgebra::new(),
/// );
/// assert_eq!(dist, Some(10));
/// ```
pub fn implicit_a_star<S, A, F, I, H, G>(
    start: S,
    successors_with_cost: F,
    heuristic: H,
    is_goal: G,
    algebra: &A,
) -> Option<A::Weight>
where
    S: Eq + Hash + Clone,
    A: WeightAlgebra,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, A::Weight)>,
    H: FnMut(&S) -> A::Weight,
    G: FnMut(&S) -> bool,
{
    implicit_a_star_by(start, successors_with_cost, S::clone, heuristic, is_goal, algebra)
}

/// Goal-directed shortest paths on explicit graphs.
pub trait AStar: WeightedAdjacency + Sized {
    /// Computes a shortest path from `source` to `target` where the frontier is ordered by
    /// `distance(u) + heuristic(u, target)`.
    ///
    /// Missing endpoints yield `None`, `source == target` the single-node path of weight `zero`.
    fn a_star<A, H>(
        &self,
        source: &Self::Node,
        target: &Self::Node,
        mut heuristic: H,
        algebra: &A,
    ) -> Option<Path<Self::Node, Self::Weight>>
    where
        A: WeightAlgebra<Weight = Self::Weight>,
        H: FnMut(&Self::Node, &Self::Node) -> Self::Weight,
    {
        if !self.contains_node(source) || !self.contains_node(target) {
            return None;
        }

        best_first_by(
            source.clone(),
            |u| self.successors(u),
            Self::Node::clone,
            |u| heuristic(u, target),
            |u| u == target,
            algebra,
        )
        .path_to_goal()
    }
}

impl<G> AStar for G where G: WeightedAdjacency + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn zero_heuristic_equals_dijkstra() {
        let rng = &mut test_rng();

        for _ in 0..20 {
            let graph = random_graph::<_, Directed>(rng, 15, 45, 0..6);
            for s in 0..15 {
                for t in 0..15 {
                    let path = graph.a_star(&s, &t, |_, _| 0, &alg());
                    assert_eq!(path, graph.shortest_path(&s, &t, &alg()));
                    assert_eq!(path.map(|p| p.total_weight), brute_force_distance(&graph, s, t));
                }
            }
        }
    }

    #[test]
    fn missing_and_trivial() {
        let graph = WeightedAdjArrayDir::from_edges([(0, 1, 3)]);
        assert_eq!(graph.a_star(&0, &5, |_, _| 0, &alg()), None);
        assert_eq!(graph.a_star(&1, &0, |_, _| 0, &alg()), None);
        assert_eq!(graph.a_star(&1, &1, |_, _| 0, &alg()), Some(Path::new(vec![1], 0)));
    }

    #[test]
    fn manhattan_on_grid() {
        // 6x6 grid, undirected unit edges; node id = 6 * y + x
        let id = |x: u32, y: u32| 6 * y + x;
        let mut graph = WeightedAdjArrayUndir::new();
        for y in 0..6 {
            for x in 0..6 {
                if x < 5 {
                    graph.add_edge(id(x, y), id(x + 1, y), 1i64);
                }
                if y < 5 {
                    graph.add_edge(id(x, y), id(x, y + 1), 1i64);
                }
            }
        }

        let manhattan = |u: &u32, v: &u32| ((u % 6).abs_diff(v % 6) + (u / 6).abs_diff(v / 6)) as i64;

        for (s, t) in [(0, 35), (5, 30), (14, 14), (7, 22)] {
            let path = graph.a_star(&s, &t, manhattan, &alg()).unwrap();
            assert_eq!(path.total_weight, manhattan(&s, &t));
            assert_eq!(path.number_of_edges() as i64, path.total_weight);
            assert_path_is_valid(&graph, &path);
        }
    }

    #[test]
    fn implicit_with_walls() {
        // walls at x == 3 except for y == 4; grid restricted to 0..8 x 0..8
        let successors = |&(x, y): &(i32, i32)| {
            [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                .into_iter()
                .filter(|&(nx, ny)| (0..8).contains(&nx) && (0..8).contains(&ny))
                .filter(|&(nx, ny)| nx != 3 || ny == 4)
                .map(|s| (s, 1i64))
                .collect::<Vec<_>>()
        };
        let heuristic = |&(x, y): &(i32, i32)| ((x - 7).abs() + y.abs()) as i64;

        let with_heuristic = implicit_a_star((0, 0), successors, heuristic, |&s| s == (7, 0), &alg());
        let without = implicit_dijkstra((0, 0), successors, |&s| s == (7, 0), &alg());

        // detour through the gap at (3, 4)
        assert_eq!(with_heuristic, Some(15));
        assert_eq!(with_heuristic, without);
    }

    #[test]
    fn implicit_by_key() {
        // state carries a step counter that must not influence deduplication
        let dist = implicit_a_star_by(
            (0i64, 0u32),
            |&(pos, steps)| [((pos + 3, steps + 1), 3), ((pos - 1, steps + 1), 1)],
            |&(pos, _)| pos,
            |&(pos, _)| (10 - pos).max(0),
            |&(pos, _)| pos == 10,
            &alg(),
        );
        // 4 * (+3) + 2 * (-1) = 10 at cost 14
        assert_eq!(dist, Some(14));
    }
}
