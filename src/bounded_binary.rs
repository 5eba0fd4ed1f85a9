//! Bounded Binary Heap implementation
//!
//! A binary min-heap stored in a single buffer allocated once, at
//! construction, for exactly `capacity` elements. The buffer is never grown:
//! a `push` into a full heap is rejected with `false` and leaves the heap
//! untouched.
//!
//! Slots `[0, len)` of the buffer form a complete binary tree with the root at
//! index 0, the children of `i` at `2i + 1` and `2i + 2`, and the parent of `i`
//! at `(i - 1) / 2`. Every element is greater than or equal to its parent, so
//! the root is always the minimum.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `len`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_bounded_heaps::bounded_binary::BoundedMinHeap;
//!
//! let mut heap = BoundedMinHeap::new(3);
//! assert!(heap.push(3));
//! assert!(heap.push(1));
//! assert!(heap.push(2));
//! assert!(!heap.push(0)); // full, rejected
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;

use log::trace;

use crate::traits::{BoundedHeap, EmptyHeapError};

/// A fixed-capacity binary min-heap
///
/// The element itself is its priority. Equal elements are all kept; which of
/// several equal elements is returned first is deterministic but otherwise
/// unspecified.
///
/// The heap does no internal locking. Mutation needs `&mut self`, so sharing
/// one heap between threads requires wrapping it in a `Mutex` or similar.
#[derive(Debug, Clone)]
pub struct BoundedMinHeap<T> {
    /// Live elements in heap order; `data.len()` is the heap size
    data: Vec<T>,
    capacity: usize,
}

impl<T: Ord> BoundedMinHeap<T> {
    /// Creates an empty heap that holds at most `capacity` elements
    ///
    /// The backing buffer is allocated here and never reallocated.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "heap capacity must be positive");
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the fixed maximum number of elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Inserts `item`, returning `false` if the heap is full
    ///
    /// A rejected item is dropped and the heap is left unchanged.
    #[must_use = "a full heap rejects the element and returns false"]
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            trace!("bounded heap full at capacity {}, rejecting push", self.capacity);
            return false;
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        true
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Result<&T, EmptyHeapError> {
        self.data.first().ok_or(EmptyHeapError)
    }

    /// Removes and returns the minimum element
    ///
    /// The last element is moved into the root slot and sifted down.
    pub fn pop(&mut self) -> Result<T, EmptyHeapError> {
        if self.data.is_empty() {
            return Err(EmptyHeapError);
        }

        // Takes the root and moves the last element into its slot.
        let result = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(result)
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the live elements in buffer (heap) order
    ///
    /// Index 0 is the minimum; the rest of the order follows the tree layout,
    /// not sorted order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates the live elements in buffer (heap) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// The current slot wins ties against its children and the left child
    /// wins ties against the right one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left(index);
            let right = right(index);
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord> BoundedHeap<T> for BoundedMinHeap<T> {
    fn with_capacity(capacity: usize) -> Self {
        BoundedMinHeap::new(capacity)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> bool {
        BoundedMinHeap::push(self, item)
    }

    fn peek(&self) -> Result<&T, EmptyHeapError> {
        BoundedMinHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, EmptyHeapError> {
        BoundedMinHeap::pop(self)
    }
}

impl<'a, T> IntoIterator for &'a BoundedMinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Renders the live slots in buffer order, e.g. `[0, 1, 2]`
impl<T: fmt::Display> fmt::Display for BoundedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
