/*!
# Weight Algebras

Shortest-path algorithms only ever need three things from an edge weight:
a neutral element, a way to extend a path by one edge and a total order to decide which
of two paths is shorter. [`WeightAlgebra`] bundles exactly these operations and is passed
into every algorithm by reference instead of relying on numeric built-ins.

Two implementations are provided:
- [`NumericAlgebra`] for all primitive numeric types (anything implementing [`num::Zero`] and `PartialOrd`),
- [`FnAlgebra`] built from three closures for custom cost types (lexicographic tuples, saturating costs, ...).

```
use std::cmp::Ordering;
use wgraphs::weight::*;

let hops = NumericAlgebra::<u32>::new();
assert_eq!(hops.add(&hops.zero(), &3), 3);

// Lexicographic (cost, hops) pairs
let lex = FnAlgebra::new(
    || (0u32, 0u32),
    |a: &(u32, u32), b: &(u32, u32)| (a.0 + b.0, a.1 + b.1),
    |a: &(u32, u32), b: &(u32, u32)| a.cmp(b),
);
assert_eq!(lex.compare(&(1, 5), &(2, 0)), Ordering::Less);
```
*/

use std::{cmp::Ordering, fmt, marker::PhantomData};

use num::Zero;

/// The ordered-monoid structure of edge weights.
///
/// Implementations must satisfy the usual laws for the algorithms to be correct:
/// `zero` is neutral for `add`, `add` is associative and `compare` is a total order that
/// is compatible with `add` (adding the same weight on both sides keeps the order).
pub trait WeightAlgebra {
    /// The weight type described by this algebra.
    type Weight: Clone;

    /// Returns the neutral element, i.e. the weight of the empty path.
    fn zero(&self) -> Self::Weight;

    /// Extends weight `a` by weight `b`.
    fn add(&self, a: &Self::Weight, b: &Self::Weight) -> Self::Weight;

    /// Totally orders two weights.
    fn compare(&self, a: &Self::Weight, b: &Self::Weight) -> Ordering;

    /// Returns *true* if `a` is strictly smaller than `b`.
    fn less(&self, a: &Self::Weight, b: &Self::Weight) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns *true* if `w` is strictly smaller than [`WeightAlgebra::zero`].
    fn is_negative(&self, w: &Self::Weight) -> bool {
        self.less(w, &self.zero())
    }

    /// Returns the smaller of both weights, preferring `a` on ties.
    fn min<'w>(&self, a: &'w Self::Weight, b: &'w Self::Weight) -> &'w Self::Weight {
        if self.less(b, a) { b } else { a }
    }
}

/// Algebra for primitive numbers using `0`, `+` and `PartialOrd`.
///
/// Incomparable values (e.g. `NaN`) are treated as equal.
pub struct NumericAlgebra<W>(PhantomData<W>);

impl<W> NumericAlgebra<W> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<W> Default for NumericAlgebra<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for NumericAlgebra<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for NumericAlgebra<W> {}

impl<W> fmt::Debug for NumericAlgebra<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericAlgebra<{}>", std::any::type_name::<W>())
    }
}

impl<W> WeightAlgebra for NumericAlgebra<W>
where
    W: Zero + Clone + PartialOrd,
{
    type Weight = W;

    fn zero(&self) -> W {
        W::zero()
    }

    fn add(&self, a: &W, b: &W) -> W {
        a.clone() + b.clone()
    }

    fn compare(&self, a: &W, b: &W) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Algebra assembled from three closures.
#[derive(Clone, Copy)]
pub struct FnAlgebra<Z, P, C> {
    zero: Z,
    add: P,
    compare: C,
}

impl<Z, P, C> FnAlgebra<Z, P, C> {
    /// Creates an algebra from a `zero`-constructor, an `add`-function and a `compare`-function.
    pub fn new<W>(zero: Z, add: P, compare: C) -> Self
    where
        Z: Fn() -> W,
        P: Fn(&W, &W) -> W,
        C: Fn(&W, &W) -> Ordering,
    {
        Self { zero, add, compare }
    }
}

impl<W, Z, P, C> WeightAlgebra for FnAlgebra<Z, P, C>
where
    W: Clone,
    Z: Fn() -> W,
    P: Fn(&W, &W) -> W,
    C: Fn(&W, &W) -> Ordering,
{
    type Weight = W;

    fn zero(&self) -> W {
        (self.zero)()
    }

    fn add(&self, a: &W, b: &W) -> W {
        (self.add)(a, b)
    }

    fn compare(&self, a: &W, b: &W) -> Ordering {
        (self.compare)(a, b)
    }
}
