use smallvec::SmallVec;

/// Dense index of a node inside a container.
pub type NodeIndex = usize;

/// Weighted neighborhood of a single node: `(neighbor-index, weight)`-pairs in insertion order.
///
/// Most nodes of sparse graphs have few neighbors, so the first entries are stored inline.
#[derive(Debug, Clone)]
pub struct WeightedNeighborhood<W> {
    arcs: SmallVec<[(NodeIndex, W); 4]>,
}

impl<W> Default for WeightedNeighborhood<W> {
    fn default() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }
}

impl<W> WeightedNeighborhood<W> {
    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the weight towards neighbor `v` if present
    pub fn weight_of(&self, v: NodeIndex) -> Option<&W> {
        self.arcs.iter().find(|(u, _)| *u == v).map(|(_, w)| w)
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: NodeIndex) -> bool {
        self.weight_of(v).is_some()
    }

    /// Sets the weight towards `v`. An existing entry keeps its position and
    /// gets its weight overwritten, whose previous value is returned.
    pub fn set_neighbor(&mut self, v: NodeIndex, weight: W) -> Option<W> {
        match self.arcs.iter_mut().find(|(u, _)| *u == v) {
            Some((_, w)) => Some(std::mem::replace(w, weight)),
            None => {
                self.arcs.push((v, weight));
                None
            }
        }
    }

    /// Returns all `(neighbor, weight)`-pairs as a slice
    pub fn as_slice(&self) -> &[(NodeIndex, W)] {
        &self.arcs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut nbs = WeightedNeighborhood::default();
        assert_eq!(nbs.set_neighbor(3, 1.5), None);
        assert_eq!(nbs.set_neighbor(1, 2.0), None);
        assert_eq!(nbs.set_neighbor(3, 0.5), Some(1.5));

        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.as_slice(), &[(3, 0.5), (1, 2.0)]);
        assert!(nbs.has_neighbor(1));
        assert!(!nbs.has_neighbor(0));
    }
}
