//! Top-k selection over a stream
//!
//! [`TopK`] keeps the `k` largest items it has been offered using a bounded
//! min-heap of capacity `k`. The heap root is the smallest retained item, so
//! each new item is compared against it once: larger items evict the root,
//! anything else is handed straight back to the caller.
//!
//! Memory stays at `k` items no matter how long the stream is, and each offer
//! costs O(log k).
//!
//! # Example
//!
//! ```rust
//! use rust_bounded_heaps::top_k::{top_k, TopK};
//!
//! let mut best = TopK::new(3);
//! for x in [10, 90, 45, 120, 15, 7, 200, 60] {
//!     best.offer(x);
//! }
//! assert_eq!(best.threshold(), Some(&90));
//! assert_eq!(best.into_sorted_vec(), vec![200, 120, 90]);
//!
//! assert_eq!(top_k([4, 8, 1, 9], 2), vec![9, 8]);
//! ```

use std::marker::PhantomData;

use log::trace;

use crate::bounded_binary::BoundedMinHeap;
use crate::traits::BoundedHeap;

/// Retains the `k` largest items offered to it
///
/// Generic over the underlying [`BoundedHeap`]; [`BoundedMinHeap`] is the
/// default.
#[derive(Debug, Clone)]
pub struct TopK<T: Ord, H: BoundedHeap<T> = BoundedMinHeap<T>> {
    heap: H,
    _phantom: PhantomData<T>,
}

impl<T: Ord> TopK<T> {
    /// Creates a selector keeping at most `k` items in a [`BoundedMinHeap`]
    ///
    /// # Panics
    /// Panics if `k` is zero.
    pub fn new(k: usize) -> Self {
        Self::with_capacity(k)
    }
}

impl<T: Ord, H: BoundedHeap<T>> TopK<T, H> {
    /// Creates a selector keeping at most `k` items in the heap type `H`
    ///
    /// # Panics
    /// Panics if `k` is zero.
    pub fn with_capacity(k: usize) -> Self {
        Self {
            heap: H::with_capacity(k),
            _phantom: PhantomData,
        }
    }

    /// Returns the number of items this selector retains once full
    pub fn k(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the number of items currently retained
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the smallest retained item once `k` items are held
    ///
    /// Any further item must be strictly greater than this to be kept.
    pub fn threshold(&self) -> Option<&T> {
        if self.heap.is_full() {
            self.heap.peek().ok()
        } else {
            None
        }
    }

    /// Offers an item to the selector
    ///
    /// Returns `None` if the item was kept without evicting anything, the
    /// evicted item if it displaced the current smallest, or the item itself
    /// if it was not large enough. An item equal to the threshold is not kept.
    pub fn offer(&mut self, item: T) -> Option<T> {
        if !self.heap.is_full() {
            let pushed = self.heap.push(item);
            debug_assert!(pushed);
            return None;
        }

        match self.heap.peek() {
            Ok(min) if item > *min => {}
            _ => return Some(item),
        }

        let evicted = self.heap.pop().ok();
        let pushed = self.heap.push(item);
        debug_assert!(pushed);
        trace!("top-k evicted its smallest item, k = {}", self.heap.capacity());
        evicted
    }

    /// Consumes the selector, returning the retained items largest first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.heap.len());
        while let Ok(item) = self.heap.pop() {
            items.push(item);
        }
        items.reverse();
        items
    }
}

impl<T: Ord, H: BoundedHeap<T>> Extend<T> for TopK<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer(item);
        }
    }
}

/// Returns the `k` largest items of `iter`, largest first
///
/// # Panics
/// Panics if `k` is zero.
pub fn top_k<T: Ord, I: IntoIterator<Item = T>>(iter: I, k: usize) -> Vec<T> {
    let mut selector: TopK<T> = TopK::new(k);
    selector.extend(iter);
    selector.into_sorted_vec()
}
