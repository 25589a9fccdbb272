use std::cmp::Ordering;

/// A total order over `T` deciding which of two heap elements is better.
///
/// `Ordering::Less` means `a` is better than `b` and sits closer to the root.
/// Implementations may consult external state (e.g. a table of tentative
/// distances); whenever that state changes for an element still in the heap,
/// the owner must call [`crate::sets::heap::IndexedHeap::update_priority`].
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their own `Ord` implementation, smallest first.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips another comparator: turns a min-heap into a max-heap.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
