/*!
# Floyd-Warshall

All-pairs shortest distances in `O(n^3)` time and `O(n^2)` memory.
Negative edges are allowed; a negative cycle anywhere in the graph fails the whole call with
[`NegativeCycle`] naming a node on (or leading into) the cycle.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use log::debug;

use super::*;

/// All-pairs shortest distances on explicit graphs.
pub trait FloydWarshall: WeightedAdjacency + Sized {
    /// Computes the distances between all pairs of nodes.
    ///
    /// - Every node has distance `zero` to itself, unless a negative self-loop lowers it
    ///   (which is a negative cycle). Positive self-loops never matter.
    /// - Unreachable pairs have no entry in the table.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, weight::NumericAlgebra};
    ///
    /// let g = WeightedAdjArrayDir::from_edges([(0, 1, 4), (1, 2, -2), (0, 2, 3)]);
    /// let table = g.floyd_warshall(&NumericAlgebra::new()).unwrap();
    ///
    /// assert_eq!(table.get(&0, &2), Some(&2));
    /// assert_eq!(table.get(&2, &0), None);
    ///
    /// let g = WeightedAdjArrayDir::from_edges([(0, 1, 1), (1, 0, -2)]);
    /// assert!(g.floyd_warshall(&NumericAlgebra::new()).is_err());
    /// ```
    fn floyd_warshall<A>(
        &self,
        algebra: &A,
    ) -> Result<DistanceTable<Self::Node, Self::Weight>, NegativeCycle<Self::Node>>
    where
        A: WeightAlgebra<Weight = Self::Weight>,
    {
        let nodes = self.vertices().collect_vec();
        let index: FxHashMap<&Self::Node, usize> = nodes.iter().enumerate().map(|(i, u)| (u, i)).collect();
        let n = nodes.len();

        let mut dist: Vec<Vec<Option<Self::Weight>>> = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(algebra.zero());
        }

        for (u, v, w) in self.edges() {
            let (Some(&i), Some(&j)) = (index.get(&u), index.get(&v)) else {
                continue;
            };

            let entry = &mut dist[i][j];
            if entry.as_ref().is_none_or(|d| algebra.less(&w, d)) {
                *entry = Some(w);
            }
        }

        for k in 0..n {
            let row_k = dist[k].clone();

            for row_i in dist.iter_mut() {
                let Some(dik) = row_i[k].clone() else {
                    continue;
                };

                for (entry, dkj) in row_i.iter_mut().zip(&row_k) {
                    let Some(dkj) = dkj else {
                        continue;
                    };

                    let candidate = algebra.add(&dik, dkj);
                    if entry.as_ref().is_none_or(|d| algebra.less(&candidate, d)) {
                        *entry = Some(candidate);
                    }
                }
            }
        }

        if let Some(i) = (0..n).find(|&i| dist[i][i].as_ref().is_some_and(|d| algebra.is_negative(d))) {
            debug!("floyd-warshall found a negative cycle through {:?}", nodes[i]);
            return Err(NegativeCycle(nodes[i].clone()));
        }

        let mut table = DistanceTable::new();
        for (u, row) in nodes.iter().zip(dist) {
            for (v, d) in nodes.iter().zip(row) {
                if let Some(d) = d {
                    table.insert(u.clone(), v.clone(), d);
                }
            }
        }

        debug!("floyd-warshall computed {} reachable pairs on {n} nodes", table.len());
        Ok(table)
    }
}

impl<G> FloydWarshall for G where G: WeightedAdjacency + Sized {}
