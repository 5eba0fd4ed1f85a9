//! Bounded Heap Data Structures for Rust
//!
//! This crate provides a fixed-capacity binary min-heap whose backing buffer
//! is allocated once, at construction, and never grown, together with a
//! top-k selector built on it.
//!
//! # Features
//!
//! - **Bounded Min-Heap**: O(log n) push and pop, O(1) peek; a push into a
//!   full heap returns `false` instead of reallocating
//! - **Top-k Selector**: keeps the `k` largest items of a stream in O(k) memory
//!
//! Pushing into a full heap is an ordinary outcome reported as `false`, while
//! reading from an empty heap is an error, [`EmptyHeapError`].
//!
//! # Example
//!
//! ```rust
//! use rust_bounded_heaps::bounded_binary::BoundedMinHeap;
//! use rust_bounded_heaps::EmptyHeapError;
//!
//! let mut heap = BoundedMinHeap::new(9);
//! for i in (0..9).rev() {
//!     assert!(heap.push(i));
//! }
//! assert!(!heap.push(42));
//!
//! for i in 0..9 {
//!     assert_eq!(heap.pop(), Ok(i));
//! }
//! assert_eq!(heap.pop(), Err(EmptyHeapError));
//! ```

pub mod bounded_binary;
pub mod top_k;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{BoundedHeap, EmptyHeapError};
