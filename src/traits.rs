//! Common traits for bounded heap data structures
//!
//! This module provides the [`BoundedHeap`] trait, the seam through which
//! callers such as [`TopK`](crate::top_k::TopK) use a fixed-capacity heap
//! without depending on a concrete implementation, and the [`EmptyHeapError`]
//! returned when the minimum of an empty heap is requested.
//!
//! The two "no room" conditions are reported differently on purpose:
//!
//! - pushing into a full heap is an expected outcome and returns `false`
//! - reading or removing from an empty heap is a misuse and returns
//!   `Err(EmptyHeapError)`

use thiserror::Error;

/// Error returned by [`BoundedHeap::peek`] and [`BoundedHeap::pop`] when the
/// heap holds no elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("there is no element in the heap")]
pub struct EmptyHeapError;

/// Base trait for fixed-capacity min-heaps
///
/// The capacity is chosen once, at construction, and never changes. The API
/// mirrors `BinaryHeap` where it can:
/// - `push` inserts an element, returning `false` instead of growing when full
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` this is a min-heap, and the element itself is the
/// priority (`T: Ord`). Wrap elements in `std::cmp::Reverse` for max-heap
/// behavior.
///
/// # Example
///
/// ```rust
/// use rust_bounded_heaps::{BoundedHeap, EmptyHeapError};
/// use rust_bounded_heaps::bounded_binary::BoundedMinHeap;
///
/// let mut heap: BoundedMinHeap<i32> = BoundedHeap::with_capacity(2);
/// assert!(heap.push(5));
/// assert!(heap.push(3));
/// assert!(!heap.push(1)); // full
///
/// assert_eq!(heap.peek(), Ok(&3));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Err(EmptyHeapError));
/// ```
pub trait BoundedHeap<T: Ord> {
    /// Creates a new empty heap able to hold exactly `capacity` elements
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the fixed maximum number of elements
    fn capacity(&self) -> usize;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a further `push` would be rejected
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Inserts an element, returning `false` without any mutation if the
    /// heap is already full
    ///
    /// When `false` is returned the element is dropped. Check
    /// [`is_full`](Self::is_full) first if it must be kept.
    ///
    /// # Time Complexity
    /// O(log n)
    #[must_use = "a full heap rejects the element and returns false"]
    fn push(&mut self, item: T) -> bool;

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, EmptyHeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`EmptyHeapError`] if the heap is empty. The heap is left
    /// untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, EmptyHeapError>;
}
