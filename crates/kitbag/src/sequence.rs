//! Sequence helpers: bounds-checked indexing, keyed sorting, compaction

// Standard library
use std::cmp::{Ordering, Reverse};

/// Direction for keyed sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Ascending key order
    #[default]
    Forward,
    /// Descending key order
    Reverse,
}

/// Extension methods for slices (and anything that derefs to one).
///
/// Sorting is keyed: the caller passes a function extracting the
/// comparison key from each element. Both directions are stable, so
/// elements with equal keys keep their original relative order.
///
/// # Examples
///
/// ```
/// use kitbag::{Order, SliceExt};
///
/// let names = ["carol", "bob", "alice"];
/// assert_eq!(names.at(1), Some(&"bob"));
/// assert_eq!(names.at(3), None);
///
/// let sorted = names.sorted_on(|name| name.len(), Order::Forward);
/// assert_eq!(sorted, ["bob", "carol", "alice"]);
/// ```
pub trait SliceExt<T> {
    /// Retrieve the element at `index`, or `None` when out of bounds.
    fn at(&self, index: usize) -> Option<&T>;

    /// Mutable variant of [`at`](SliceExt::at).
    fn at_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Return a sorted copy, ordered by the extracted key.
    fn sorted_on<K, F>(&self, key: F, order: Order) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K;

    /// Return a sorted copy, ordering extracted keys with `compare`.
    fn sorted_on_by<K, F, C>(&self, key: F, compare: C) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering;

    /// Sort in place, ordered by the extracted key.
    fn sort_on<K, F>(&mut self, key: F, order: Order)
    where
        K: Ord,
        F: FnMut(&T) -> K;

    /// Sort in place, ordering extracted keys with `compare`.
    fn sort_on_by<K, F, C>(&mut self, key: F, compare: C)
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    fn sorted_on<K, F>(&self, key: F, order: Order) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut sorted = self.to_vec();
        sorted.sort_on(key, order);
        sorted
    }

    fn sorted_on_by<K, F, C>(&self, key: F, compare: C) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        let mut sorted = self.to_vec();
        sorted.sort_on_by(key, compare);
        sorted
    }

    fn sort_on<K, F>(&mut self, mut key: F, order: Order)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        match order {
            // Reverse wraps the key instead of reversing afterwards,
            // keeping equal-key elements in their original order.
            Order::Forward => self.sort_by_key(key),
            Order::Reverse => self.sort_by_key(|element| Reverse(key(element))),
        }
    }

    fn sort_on_by<K, F, C>(&mut self, mut key: F, mut compare: C)
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        self.sort_by(|lhs, rhs| compare(&key(lhs), &key(rhs)));
    }
}

/// Drop absent values from a slice of options.
///
/// # Examples
///
/// ```
/// use kitbag::Compact;
///
/// let readings = [Some(1), None, Some(3)];
/// assert_eq!(readings.compact(), vec![1, 3]);
/// ```
pub trait Compact<T> {
    /// The present values, in order.
    fn compact(&self) -> Vec<T>;
}

impl<T: Clone> Compact<T> for [Option<T>] {
    fn compact(&self) -> Vec<T> {
        self.iter().flatten().cloned().collect()
    }
}
