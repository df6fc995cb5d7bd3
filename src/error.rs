/*!
# Errors

Unreachable targets are a legitimate answer and are reported as `None` or as a dedicated
result variant. The only condition surfaced as an error is a negative cycle, which makes
the notion of a shortest distance meaningless for the affected region.
*/

use thiserror::Error;

/// A negative cycle was found; carries a node lying on (or reaching into) the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("negative cycle detected at node {0:?}")]
pub struct NegativeCycle<N: std::fmt::Debug>(pub N);

impl<N: std::fmt::Debug> NegativeCycle<N> {
    /// Returns the node at which the cycle was observed.
    pub fn node(&self) -> &N {
        &self.0
    }
}
