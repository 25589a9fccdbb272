use std::{cmp::Ordering, fmt::Debug, hash::Hash};

use crate::sets::{
    ContainerError,
    heap::{Comparator, NaturalOrder, Reversed},
    map::ChainedMap,
};

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// A binary heap whose elements can be re-prioritized in place.
///
/// Elements live in a dense vector read as a complete binary tree (parent of `i` at
/// `(i - 1) / 2`, children at `2i + 1` and `2i + 2`). Alongside it, a
/// [`ChainedMap`] from element to index gives O(1) lookup of any element's
/// position, which is what makes [`IndexedHeap::update_priority`] O(log n).
///
/// # Invariants
/// - No element is strictly better (per the comparator) than its parent.
/// - `positions[heap[i]] == i` for every index `i`; every element appears once.
///
/// # Time Complexity
/// - `offer`, `poll`, `update_priority`: O(log n)
/// - `peek`, `contains`, `len`: O(1)
pub struct IndexedHeap<T, C = NaturalOrder> {
    heap: Vec<T>,
    positions: ChainedMap<T, usize>,
    comparator: C,
}

impl<T: Hash + Eq + Clone + Ord> IndexedHeap<T> {
    /// Min-heap over the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Max-heap over the natural order of `T`.
    pub fn max_heap() -> IndexedHeap<T, Reversed<NaturalOrder>> {
        IndexedHeap::with_comparator(Reversed(NaturalOrder))
    }
}

impl<T: Hash + Eq + Clone + Ord> Default for IndexedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> IndexedHeap<T, C>
where
    T: Hash + Eq + Clone,
    C: Comparator<T>,
{
    /// Creates an empty heap ordered by `comparator` (best element first).
    pub fn with_comparator(comparator: C) -> Self {
        IndexedHeap {
            heap: Vec::new(),
            positions: ChainedMap::new(),
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// The best element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Elements in heap (array) order, which is not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Mutable access to the comparator, to change the state it reads.
    ///
    /// After changing the priority of an element that is still in the heap, call
    /// [`IndexedHeap::update_priority`] for it before any other heap operation.
    pub fn comparator_mut(&mut self) -> &mut C {
        &mut self.comparator
    }

    /// Consumes the heap and hands back its comparator (and whatever state it owns).
    pub fn into_comparator(self) -> C {
        self.comparator
    }

    /// Inserts `item`.
    ///
    /// # Returns
    /// `false` (and no change) if an equal element is already in the heap, `true` otherwise
    pub fn offer(&mut self, item: T) -> bool {
        if self.positions.contains_key(&item) {
            return false;
        }
        let index = self.heap.len();
        self.positions.put(item.clone(), index);
        self.heap.push(item);
        self.sift_up(index);
        true
    }

    /// Removes and returns the best element, or `None` if the heap is empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let out = self.heap.pop()?;
        self.positions.remove(&out);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(out)
    }

    /// Restores the heap invariant after the priority of `item` changed.
    ///
    /// The element moves up if it is now better than its parent, down if it is
    /// now worse than one of its children, and stays otherwise. Only one of the
    /// first two can hold since the rest of the tree still satisfies the invariant.
    ///
    /// # Errors
    /// [`ContainerError::AbsentElement`] if `item` is not in the heap; the heap is unchanged.
    pub fn update_priority(&mut self, item: &T) -> Result<(), ContainerError> {
        let index = *self
            .positions
            .get(item)
            .ok_or(ContainerError::AbsentElement)?;

        if index > 0 && self.is_better(index, parent(index)) {
            self.sift_up(index);
        } else if self.worse_than_a_child(index) {
            self.sift_down(index);
        }
        Ok(())
    }

    fn is_better(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.heap[a], &self.heap[b]) == Ordering::Less
    }

    fn worse_than_a_child(&self, index: usize) -> bool {
        let len = self.heap.len();
        let (left, right) = (left_child(index), right_child(index));
        (left < len && self.is_better(left, index))
            || (right < len && self.is_better(right, index))
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.put(self.heap[a].clone(), a);
        self.positions.put(self.heap[b].clone(), b);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 && self.is_better(index, parent(index)) {
            let up = parent(index);
            self.swap(index, up);
            index = up;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let (left, right) = (left_child(index), right_child(index));
            let mut best = index;
            if left < len && self.is_better(left, best) {
                best = left;
            }
            if right < len && self.is_better(right, best) {
                best = right;
            }
            if best == index {
                break;
            }
            self.swap(index, best);
            index = best;
        }
    }
}

impl<T: Debug, C> Debug for IndexedHeap<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("heap", &self.heap)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

    /// Priorities stored outside the elements, like tentative distances in Dijkstra.
    struct ByTable {
        priority: Vec<i64>,
    }

    impl Comparator<usize> for ByTable {
        fn compare(&self, a: &usize, b: &usize) -> Ordering {
            self.priority[*a].cmp(&self.priority[*b])
        }
    }

    fn drain<T: Hash + Eq + Clone, C: Comparator<T>>(heap: &mut IndexedHeap<T, C>) -> Vec<T> {
        std::iter::from_fn(|| heap.poll()).collect()
    }

    fn assert_invariant<T: Hash + Eq + Clone, C: Comparator<T>>(heap: &IndexedHeap<T, C>) {
        for i in 1..heap.heap.len() {
            assert!(
                !heap.is_better(i, parent(i)),
                "element at {i} is better than its parent"
            );
        }
        for (i, item) in heap.heap.iter().enumerate() {
            assert_eq!(heap.positions.get(item), Some(&i));
        }
        assert_eq!(heap.positions.len(), heap.heap.len());
    }

    #[test]
    fn test_empty_heap() {
        let mut heap: IndexedHeap<u32> = IndexedHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.poll(), None);
    }

    #[test]
    fn test_poll_returns_ascending_order() {
        let mut heap = IndexedHeap::new();
        for x in [5, 3, 9, 1, 7, 2, 8] {
            assert!(heap.offer(x));
        }
        assert_invariant(&heap);
        assert_eq!(drain(&mut heap), vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_max_heap_returns_descending_order() {
        let mut heap = IndexedHeap::<i32>::max_heap();
        for x in [4, -1, 10, 3] {
            heap.offer(x);
        }
        assert_eq!(heap.peek(), Some(&10));
        assert_eq!(drain(&mut heap), vec![10, 4, 3, -1]);
    }

    #[test]
    fn test_peek_does_not_change_len() {
        let mut heap = IndexedHeap::new();
        heap.offer('q');
        heap.offer('c');
        assert_eq!(heap.peek(), Some(&'c'));
        assert_eq!(heap.peek(), Some(&'c'));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_duplicate_offer_is_rejected() {
        let mut heap = IndexedHeap::new();
        assert!(heap.offer(4));
        assert!(!heap.offer(4));
        assert_eq!(heap.len(), 1);
        assert!(heap.contains(&4));
        heap.poll();
        assert!(!heap.contains(&4));
    }

    #[test]
    fn test_update_priority_on_absent_element_fails_without_effect() {
        let mut heap = IndexedHeap::new();
        heap.offer(1);
        heap.offer(2);
        assert_eq!(heap.update_priority(&3), Err(ContainerError::AbsentElement));
        assert_eq!(drain(&mut heap), vec![1, 2]);
    }

    #[test]
    fn test_update_priority_moves_element_up() {
        let mut heap: IndexedHeap<usize, ByTable> = IndexedHeap::with_comparator(ByTable {
            priority: vec![10, 20, 30, 40, 50],
        });
        for i in 0..5 {
            heap.offer(i);
        }
        heap.comparator_mut().priority[4] = 0;
        heap.update_priority(&4).unwrap();
        assert_invariant(&heap);
        assert_eq!(heap.peek(), Some(&4));
        assert_eq!(drain(&mut heap), vec![4, 0, 1, 2, 3]);
    }

    #[test]
    fn test_update_priority_moves_element_down() {
        let mut heap: IndexedHeap<usize, ByTable> = IndexedHeap::with_comparator(ByTable {
            priority: vec![10, 20, 30, 40, 50],
        });
        for i in 0..5 {
            heap.offer(i);
        }
        heap.comparator_mut().priority[0] = 45;
        heap.update_priority(&0).unwrap();
        assert_invariant(&heap);
        assert_eq!(drain(&mut heap), vec![1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_update_priority_without_change_keeps_order() {
        let mut heap: IndexedHeap<usize, ByTable> = IndexedHeap::with_comparator(ByTable {
            priority: vec![3, 1, 2],
        });
        for i in 0..3 {
            heap.offer(i);
        }
        heap.update_priority(&2).unwrap();
        assert_invariant(&heap);
        assert_eq!(drain(&mut heap), vec![1, 2, 0]);
    }

    #[test]
    fn test_closure_comparator() {
        let mut heap = IndexedHeap::with_comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        for x in [-7, 3, -1, 5] {
            heap.offer(x);
        }
        assert_eq!(drain(&mut heap), vec![-1, 3, 5, -7]);
    }

    #[test]
    fn test_into_comparator_returns_the_table() {
        let mut heap: IndexedHeap<usize, ByTable> = IndexedHeap::with_comparator(ByTable {
            priority: vec![1, 2],
        });
        heap.offer(0);
        heap.comparator_mut().priority[1] = 9;
        assert_eq!(heap.into_comparator().priority, vec![1, 9]);
    }

    #[test]
    fn test_randomized_updates_keep_sorted_extraction() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 200;
        let priority: Vec<i64> = (0..n).map(|_| rng.random_range(0..1_000)).collect();
        let mut heap: IndexedHeap<usize, ByTable> =
            IndexedHeap::with_comparator(ByTable { priority });

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        for i in order {
            heap.offer(i);
        }

        for _ in 0..500 {
            let item = rng.random_range(0..n);
            heap.comparator_mut().priority[item] = rng.random_range(0..1_000);
            heap.update_priority(&item).unwrap();
        }
        assert_invariant(&heap);

        // interleave some polls with further updates
        let mut extracted = Vec::new();
        for _ in 0..50 {
            let best = heap.poll().unwrap();
            for remaining in heap.iter() {
                assert!(
                    heap.comparator().compare(&best, remaining) != Ordering::Greater,
                    "polled element is worse than one still in the heap"
                );
            }
            extracted.push(best);

            let item = rng.random_range(0..n);
            if heap.contains(&item) {
                heap.comparator_mut().priority[item] = rng.random_range(0..1_000);
                heap.update_priority(&item).unwrap();
            } else {
                assert_eq!(heap.update_priority(&item), Err(ContainerError::AbsentElement));
            }
        }
        assert_invariant(&heap);

        let rest = drain(&mut heap);
        assert_eq!(extracted.len() + rest.len(), n);
        let table = heap.into_comparator().priority;
        assert!(rest.windows(2).all(|w| table[w[0]] <= table[w[1]]));
    }
}
