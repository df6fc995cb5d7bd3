//! Shared helpers for unit tests: seeded random graphs and brute-force oracles.

use std::ops::Range;

use fxhash::FxHashSet;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub(crate) use crate::prelude::*;

/// Installs `env_logger` once; later calls are no-ops
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn test_rng() -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(3)
}

pub(crate) fn alg() -> NumericAlgebra<i64> {
    NumericAlgebra::new()
}

/// Directed graph without weights, nodes are added in order of first appearance
pub(crate) fn unweighted_graph(edges: &[(u32, u32)]) -> WeightedAdjArrayDir<u32, ()> {
    WeightedAdjArray::from_edges(edges.iter().map(|&(u, v)| (u, v, ())))
}

/// Graph on nodes `0..n` with `m` random edge insertions (duplicates overwrite)
pub(crate) fn random_graph<R, D>(
    rng: &mut R,
    n: u32,
    m: usize,
    weights: Range<i64>,
) -> WeightedAdjArray<u32, i64, D>
where
    R: Rng,
    D: GraphDir,
{
    let mut graph = WeightedAdjArray::new();
    graph.add_nodes(0..n);

    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_edge(u, v, rng.random_range(weights.clone()));
    }
    graph
}

/// Directed acyclic graph on nodes `0..n` where every edge points from a smaller to a larger id
pub(crate) fn random_dag<R: Rng>(
    rng: &mut R,
    n: u32,
    m: usize,
    weights: Range<i64>,
) -> WeightedAdjArrayDir<u32, i64> {
    let mut graph = WeightedAdjArray::new();
    graph.add_nodes(0..n);

    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v {
            graph.add_edge(u.min(v), u.max(v), rng.random_range(weights.clone()));
        }
    }
    graph
}

/// All nodes reachable from `start` (including `start`)
pub(crate) fn reachable_set<G>(graph: &G, start: G::Node) -> FxHashSet<G::Node>
where
    G: WeightedAdjacency,
{
    let mut reachable = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(u) = stack.pop() {
        if reachable.insert(u.clone()) {
            stack.extend(graph.successors(&u).map(|(v, _)| v));
        }
    }
    reachable
}

/// Minimum weight over all simple paths from `s` to `t` by exhaustive enumeration
pub(crate) fn brute_force_distance<G>(graph: &G, s: u32, t: u32) -> Option<i64>
where
    G: WeightedAdjacency<Node = u32, Weight = i64>,
{
    fn recurse<G>(graph: &G, u: u32, t: u32, dist: i64, on_path: &mut FxHashSet<u32>, best: &mut Option<i64>)
    where
        G: WeightedAdjacency<Node = u32, Weight = i64>,
    {
        if u == t {
            *best = Some(best.map_or(dist, |b| b.min(dist)));
            return;
        }

        for (v, w) in graph.successors(&u) {
            if on_path.insert(v) {
                recurse(graph, v, t, dist + w, on_path, best);
                on_path.remove(&v);
            }
        }
    }

    if !graph.contains_node(&s) || !graph.contains_node(&t) {
        return None;
    }

    let mut best = None;
    let mut on_path = FxHashSet::default();
    on_path.insert(s);
    recurse(graph, s, t, 0, &mut on_path, &mut best);
    best
}

/// Asserts that consecutive nodes of `path` are adjacent and the weights add up
pub(crate) fn assert_path_is_valid<G>(graph: &G, path: &Path<u32, i64>)
where
    G: WeightedAdjacency<Node = u32, Weight = i64>,
{
    let mut total = 0;
    for (u, v) in path.nodes.iter().zip(path.nodes.iter().skip(1)) {
        let w = graph
            .successors(u)
            .find_map(|(x, w)| (x == *v).then_some(w))
            .unwrap_or_else(|| panic!("missing edge ({u}, {v})"));
        total += w;
    }
    assert_eq!(total, path.total_weight);
}
