//! A priority queue implemented with a binary heap, ordered by a runtime priority
//! predicate rather than by the [`Ord`] trait.
//!
//! The predicate is any [`Prioritize`] implementation: a closure
//! `Fn(&T, &T) -> bool` that answers "does the first argument have strictly
//! higher priority than the second?", or one of the ready-made orders in
//! [`order`].
//!
//! ```
//! use heapq::PriorityQueue;
//!
//! // Greater values have higher priority.
//! let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
//! queue.extend([1, 2, 100, 3]);
//! assert_eq!(queue.pop(), Some(100));
//!
//! // Shorter strings have higher priority.
//! let words = vec!["Hi", "Hello", "Goodbye"];
//! let mut queue = PriorityQueue::from_vec(words, |a: &&str, b: &&str| a.len() < b.len());
//! assert_eq!(queue.pop(), Some("Hi"));
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(clippy::redundant_clone, clippy::uninlined_format_args, clippy::useless_vec)
)]

extern crate alloc;

mod polyfill;

pub mod order;
pub mod priority_queue;

pub use order::{MaxFirst, MinFirst, Prioritize, Reversed};
pub use priority_queue::PriorityQueue;
