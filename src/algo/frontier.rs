/*!
# Frontiers

A frontier stores everything that has been discovered but not yet processed.
Its discipline determines the search:

- [`VecDeque`] -> queue semantics -> **breadth-first**
- [`Vec`] -> stack semantics -> **depth-first**
- [`PriorityFrontier`] -> smallest priority first -> **Dijkstra / A\***

The priority frontier is keyed by `(priority, insertion sequence)`: among entries with equal
priority, the one pushed first is popped first. Together with insertion-ordered
neighborhoods, this makes every search deterministic.
*/

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use crate::weight::WeightAlgebra;

/// Abstraction for the traversal frontier of BFS/DFS.
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Pushes the children of the node processed last.
    ///
    /// Children are given in successor order and are pushed such that they are *popped*
    /// in successor order, e.g. a stack pushes them in reverse.
    fn push_children<I>(&mut self, children: I)
    where
        I: DoubleEndedIterator<Item = T>;

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(item: T) -> Self {
        Self::from(vec![item])
    }
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn push_children<I>(&mut self, children: I)
    where
        I: DoubleEndedIterator<Item = T>,
    {
        self.extend(children)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(item: T) -> Self {
        vec![item]
    }
    fn push(&mut self, item: T) {
        self.push(item)
    }
    fn push_children<I>(&mut self, children: I)
    where
        I: DoubleEndedIterator<Item = T>,
    {
        self.extend(children.rev())
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Heap entry ordered by the injected algebra, then by insertion sequence.
struct FrontierEntry<'a, A, T>
where
    A: WeightAlgebra,
{
    priority: A::Weight,
    sequence: u64,
    item: T,
    algebra: &'a A,
}

impl<A, T> Ord for FrontierEntry<'_, A, T>
where
    A: WeightAlgebra,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap: reverse both keys to pop the smallest / oldest entry
        self.algebra
            .compare(&other.priority, &self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<A, T> PartialOrd for FrontierEntry<'_, A, T>
where
    A: WeightAlgebra,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A, T> PartialEq for FrontierEntry<'_, A, T>
where
    A: WeightAlgebra,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A, T> Eq for FrontierEntry<'_, A, T> where A: WeightAlgebra {}

/// Min-priority frontier with FIFO tie-breaking.
///
/// # Examples
/// ```
/// use wgraphs::{algo::PriorityFrontier, weight::NumericAlgebra};
///
/// let alg = NumericAlgebra::<u32>::new();
/// let mut frontier = PriorityFrontier::new(&alg);
/// frontier.push('a', 3);
/// frontier.push('b', 1);
/// frontier.push('c', 3);
///
/// assert_eq!(frontier.pop(), Some(('b', 1)));
/// assert_eq!(frontier.pop(), Some(('a', 3)));
/// assert_eq!(frontier.pop(), Some(('c', 3)));
/// assert_eq!(frontier.pop(), None);
/// ```
pub struct PriorityFrontier<'a, A, T>
where
    A: WeightAlgebra,
{
    heap: BinaryHeap<FrontierEntry<'a, A, T>>,
    algebra: &'a A,
    next_sequence: u64,
}

impl<'a, A, T> PriorityFrontier<'a, A, T>
where
    A: WeightAlgebra,
{
    /// Creates an empty frontier ordered by `algebra`
    pub fn new(algebra: &'a A) -> Self {
        Self {
            heap: BinaryHeap::new(),
            algebra,
            next_sequence: 0,
        }
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: T, priority: A::Weight) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.heap.push(FrontierEntry {
            priority,
            sequence,
            item,
            algebra: self.algebra,
        });
    }

    /// Removes the item with smallest priority; ties are resolved oldest first.
    pub fn pop(&mut self) -> Option<(T, A::Weight)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    /// Returns the number of items currently in the frontier
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns *true* if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the total number of pushes so far
    pub fn number_of_pushes(&self) -> u64 {
        self.next_sequence
    }
}
