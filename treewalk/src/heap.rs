use std::cmp::Reverse;

/// An array-backed min-heap: each parent is no greater than its children,
/// so the smallest value is always at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinHeap<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a heap from the given values by sifting down from the last
    /// parent, without paying per-insert sift-up cost.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut heap = Self {
            items: values.into_iter().collect(),
        };
        for i in (0..heap.items.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Adds a value, restoring heap order along its path to the root.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the smallest value.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Returns the smallest value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Number of values in the heap.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[i] >= self.items[parent] {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < self.items.len() && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < self.items.len() && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

/// An array-backed max-heap: the largest value is always at the root.
///
/// Implemented as a [`MinHeap`] over reversed ordering rather than a second
/// copy of the sift routines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxHeap<T: Ord> {
    inner: MinHeap<Reverse<T>>,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            inner: MinHeap::new(),
        }
    }

    /// Builds a heap from the given values.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            inner: MinHeap::from_values(values.into_iter().map(Reverse)),
        }
    }

    /// Adds a value, restoring heap order along its path to the root.
    pub fn push(&mut self, value: T) {
        self.inner.push(Reverse(value));
    }

    /// Removes and returns the largest value.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop().map(|Reverse(value)| value)
    }

    /// Returns the largest value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.peek().map(|reversed| &reversed.0)
    }

    /// Number of values in the heap.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_heap_keeps_smallest_at_root() {
        let mut heap = MinHeap::new();
        heap.push(5);
        heap.push(3);
        heap.push(7);
        assert_eq!(heap.peek(), Some(&3));
    }

    #[test]
    fn test_from_values_heapifies() {
        let heap = MinHeap::from_values([9, 5, 6, 2, 3]);
        assert_eq!(heap.peek(), Some(&2));
        let max = MaxHeap::from_values([9, 5, 6, 2, 3]);
        assert_eq!(max.peek(), Some(&9));
    }

    #[test]
    fn test_empty_heaps() {
        let mut min: MinHeap<i32> = MinHeap::new();
        let mut max: MaxHeap<i32> = MaxHeap::new();
        assert!(min.is_empty());
        assert!(max.is_empty());
        assert_eq!(min.peek(), None);
        assert_eq!(max.peek(), None);
        assert_eq!(min.pop(), None);
        assert_eq!(max.pop(), None);
    }
}
