//! A priority queue implemented with a binary heap.
//!
//! Insertion and popping the highest-priority element have *O*(log(*n*)) time
//! complexity. Checking the highest-priority element is *O*(1). Converting a
//! vector to a priority queue can be done in-place, and has *O*(*n*) complexity.
//! A queue can also be converted to a sorted vector in-place, allowing it to be
//! used for an *O*(*n* \* log(*n*)) in-place heapsort.
//!
//! Priority is decided by a [`Prioritize`] implementation supplied when the queue
//! is created, typically a closure:
//!
//! ```
//! use heapq::PriorityQueue;
//!
//! #[derive(Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//!     deadline: u32,
//! }
//!
//! // Earliest deadline first.
//! let mut jobs = PriorityQueue::new(|a: &Job, b: &Job| a.deadline < b.deadline);
//!
//! jobs.push(Job { name: "report", deadline: 30 });
//! jobs.push(Job { name: "backup", deadline: 10 });
//! jobs.push(Job { name: "deploy", deadline: 20 });
//!
//! let order: Vec<_> = jobs.into_iter_sorted().map(|job| job.name).collect();
//! assert_eq!(order, ["backup", "deploy", "report"]);
//! ```

use core::fmt;
#[cfg(feature = "trusted_len")]
use core::iter::TrustedLen;
use core::iter::FusedIterator;
use core::mem::{swap, ManuallyDrop};
use core::ptr;

use alloc::collections::TryReserveError;
use alloc::slice;
use alloc::vec::{self, Vec};

use crate::order::{MaxFirst, Prioritize};

#[cfg(test)]
mod tests;

/// A priority queue implemented with a binary heap.
///
/// The element returned by [`peek`] and [`pop`] is always one that no other
/// element outranks, as decided by the queue's priority predicate `P`.  With
/// the default [`MaxFirst`] order this is a max-heap.
///
/// It is a logic error for an item to be modified in such a way that its
/// priority relative to any other item, as determined by the predicate, changes
/// while it is in the queue. This is normally only possible through interior
/// mutability, global state, I/O, or unsafe code. The behavior resulting from
/// such a logic error is not specified, but will be encapsulated to the
/// `PriorityQueue` that observed the logic error and not result in undefined
/// behavior. This could include panics, incorrect results, aborts, memory
/// leaks, and non-termination.
///
/// # Examples
///
/// ```
/// use heapq::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
///
/// // There's no items in there yet, so peek gives None.
/// assert_eq!(queue.peek(), None);
///
/// queue.push(1);
/// queue.push(5);
/// queue.push(2);
///
/// // Now peek shows the highest-priority item, which is the smallest here.
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.len(), 3);
///
/// // Iteration visits the items in heap order, not priority order.
/// for x in &queue {
///     println!("{x}");
/// }
///
/// // Popping returns them in priority order.
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(5));
/// assert_eq!(queue.pop(), None);
/// assert!(queue.is_empty());
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek] |
/// |---------|---------------|--------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1) |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [peek]: PriorityQueue::peek
/// [pop]: PriorityQueue::pop
/// [push]: PriorityQueue::push
/// [`peek`]: PriorityQueue::peek
/// [`pop`]: PriorityQueue::pop
pub struct PriorityQueue<T, P = MaxFirst<T>> {
    data: Vec<T>,
    order: P,
}

impl<T: Clone, P: Clone> Clone for PriorityQueue<T, P> {
    /// Duplicates the queue. The copy is already in heap order, so no
    /// rebuild takes place.
    fn clone(&self) -> Self {
        PriorityQueue { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, P: Default> Default for PriorityQueue<T, P> {
    /// Creates an empty `PriorityQueue` with the default order.
    #[inline]
    fn default() -> PriorityQueue<T, P> {
        PriorityQueue { data: Vec::new(), order: P::default() }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, P> fmt::Display for PriorityQueue<T, P> {
    /// Renders the contents in heap order, e.g. `[1, 3, 2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T, P: Prioritize<T>> PriorityQueue<T, P> {
    /// Creates an empty `PriorityQueue` ordered by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    /// let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
    /// queue.push(4);
    /// ```
    #[must_use]
    pub fn new(order: P) -> PriorityQueue<T, P> {
        PriorityQueue { data: Vec::new(), order }
    }

    /// Creates an empty `PriorityQueue` with at least the specified capacity.
    ///
    /// The queue will be able to hold at least `capacity` elements without
    /// reallocating. If `capacity` is 0, the queue will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::{MinFirst, PriorityQueue};
    /// let mut queue = PriorityQueue::with_capacity(MinFirst::new(), 50);
    /// assert!(queue.capacity() >= 50);
    /// queue.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(order: P, capacity: usize) -> PriorityQueue<T, P> {
        PriorityQueue { data: Vec::with_capacity(capacity), order }
    }

    /// Creates a `PriorityQueue` holding the elements of `vec`, ordered by
    /// `order`.
    ///
    /// The vector's buffer is reused and brought into heap order in place,
    /// in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::from_vec((1..=100).collect(), |a: &i32, b: &i32| a < b);
    /// assert_eq!(queue.len(), 100);
    /// assert_eq!(queue.pop(), Some(1));
    /// ```
    pub fn from_vec(vec: Vec<T>, order: P) -> PriorityQueue<T, P> {
        let mut queue = PriorityQueue { data: vec, order };
        queue.rebuild();
        queue
    }

    /// Removes the highest-priority item from the queue and returns it, or
    /// `None` if it is empty.
    ///
    /// When several items share the highest priority, which of them is
    /// returned is deterministic but unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    /// let mut queue = PriorityQueue::from_vec(vec![1, 3], |a: &i32, b: &i32| a > b);
    ///
    /// assert_eq!(queue.pop(), Some(3));
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a queue containing *n* elements is
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { sink(&mut self.data, 0, &self.order) };
            }
            item
        })
    }

    /// Pushes an item onto the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    /// let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
    /// queue.push(3);
    /// queue.push(5);
    /// queue.push(1);
    ///
    /// assert_eq!(queue.len(), 3);
    /// assert_eq!(queue.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1). It degrades when elements are pushed in predominantly
    /// rising priority; in the worst case the amortized cost per push is
    /// *O*(log(*n*)) against a queue containing *n* elements.
    pub fn push(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { swim(&mut self.data, old_len, &self.order) };
    }

    /// Returns a vector of the queue's elements from highest to lowest
    /// priority, leaving the queue untouched.
    ///
    /// The result is exactly the sequence that repeatedly calling [`pop`] on a
    /// clone of the queue would produce, including the relative order of
    /// elements of equal priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    ///
    /// let queue = PriorityQueue::from_vec(
    ///     vec!["Hi", "Hello", "Shalom"],
    ///     |a: &&str, b: &&str| a.len() < b.len(),
    /// );
    ///
    /// assert_eq!(queue.to_sorted_vec(), ["Hi", "Hello", "Shalom"]);
    /// assert_eq!(queue.len(), 3);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n* \* log(*n*)) time and *O*(*n*) extra space for the copy.
    ///
    /// [`pop`]: PriorityQueue::pop
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut data = self.data.clone();
        sort_by_rank(&mut data, &self.order);
        data
    }

    /// Consumes the `PriorityQueue` and returns a vector of its elements from
    /// highest to lowest priority, sorting in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::{MaxFirst, PriorityQueue};
    ///
    /// let mut queue = PriorityQueue::from_vec(vec![1, 2, 4, 5, 7], MaxFirst::new());
    /// queue.push(6);
    /// queue.push(3);
    ///
    /// assert_eq!(queue.into_sorted_vec(), [7, 6, 5, 4, 3, 2, 1]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        sort_by_rank(&mut self.data, &self.order);
        self.data
    }

    /// Returns an iterator which retrieves elements in priority order.
    /// This method consumes the original queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::{MaxFirst, PriorityQueue};
    /// let queue = PriorityQueue::from_vec(vec![1, 2, 3, 4, 5], MaxFirst::new());
    ///
    /// assert_eq!(queue.into_iter_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, P> {
        IntoIterSorted { inner: self }
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// Elements are pushed one at a time in `other`'s heap order, and are
    /// ranked by `self`'s predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::{MinFirst, PriorityQueue};
    ///
    /// let mut a = PriorityQueue::from_vec(vec![-10, 1, 2, 3, 3], MinFirst::new());
    /// let mut b = PriorityQueue::from_vec(vec![-20, 5, 43], MinFirst::new());
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.extend(other.drain());
    }

    /// Brings the whole of `data` into heap order.
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { sink(&mut self.data, n, &self.order) };
        }
    }

    fn extend_desugared<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }
}

impl<T, P> PriorityQueue<T, P> {
    /// Returns an iterator visiting all values in the underlying vector, in
    /// heap order.
    ///
    /// Heap order is *not* priority order: only the first item is guaranteed
    /// to be one of highest priority. Use [`to_sorted_vec`] or
    /// [`into_iter_sorted`] to visit items by priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::{MaxFirst, PriorityQueue};
    /// let queue = PriorityQueue::from_vec(vec![1, 2, 3, 4], MaxFirst::new());
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in queue.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    ///
    /// [`to_sorted_vec`]: PriorityQueue::to_sorted_vec
    /// [`into_iter_sorted`]: PriorityQueue::into_iter_sorted
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the highest-priority item in the queue, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::{MaxFirst, PriorityQueue};
    /// let mut queue = PriorityQueue::new(MaxFirst::new());
    /// assert_eq!(queue.peek(), None);
    ///
    /// queue.push(1);
    /// queue.push(5);
    /// queue.push(2);
    /// assert_eq!(queue.peek(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Borrows the queue's priority predicate.
    #[must_use]
    pub fn order(&self) -> &P {
        &self.order
    }

    /// Returns the number of elements the queue can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for at least `additional` elements more
    /// than the current length. Does nothing if the capacity is already
    /// sufficient.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length. The allocator may reserve more space to speculatively
    /// avoid frequent allocations.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    /// let mut queue: PriorityQueue<i32> = PriorityQueue::default();
    /// queue.reserve(100);
    /// assert!(queue.capacity() >= 100);
    /// queue.push(4);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Tries to reserve the minimum capacity for at least `additional` elements
    /// more than the current length.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an
    /// error is returned.
    pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve_exact(additional)
    }

    /// Tries to reserve capacity for at least `additional` elements more than
    /// the current length. This method preserves the contents even if an error
    /// occurs.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    /// use std::collections::TryReserveError;
    ///
    /// fn find_max_slow(data: &[u32]) -> Result<Option<u32>, TryReserveError> {
    ///     let mut queue: PriorityQueue<u32> = PriorityQueue::default();
    ///
    ///     // Pre-reserve the memory, exiting if we can't
    ///     queue.try_reserve(data.len())?;
    ///
    ///     // Now we know this can't OOM in the middle of our complex work
    ///     queue.extend(data.iter());
    ///
    ///     Ok(queue.pop())
    /// }
    /// # find_max_slow(&[1, 2, 3]).expect("why is the test harness OOMing on 12 bytes?");
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Discards capacity with a lower bound.
    ///
    /// The capacity will remain at least as large as both the length
    /// and the supplied value.
    #[inline]
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.data.shrink_to(min_capacity)
    }

    /// Consumes the `PriorityQueue` and returns the underlying vector in heap
    /// order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of elements in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::PriorityQueue;
    /// let mut queue: PriorityQueue<i32> = PriorityQueue::default();
    ///
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.len(), 0);
    ///
    /// queue.push(1);
    ///
    /// assert!(!queue.is_empty());
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the queue, returning an iterator over the removed elements in
    /// heap order. If the iterator is dropped before being fully consumed, it
    /// drops the remaining elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapq::{MaxFirst, PriorityQueue};
    /// let mut queue = PriorityQueue::from_vec(vec![1, 3], MaxFirst::new());
    ///
    /// assert_eq!(queue.drain().count(), 2);
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all items from the queue.
    pub fn clear(&mut self) {
        self.drain();
    }
}

/// Moves the element at `pos` towards the root for as long as it outranks its
/// parent.
///
/// # Safety
///
/// The caller must guarantee that `pos < data.len()`.
unsafe fn swim<T, P: Prioritize<T>>(data: &mut [T], pos: usize, order: &P) {
    // Take out the value at `pos` and create a hole.
    // SAFETY: The caller guarantees that pos < data.len()
    let mut hole = unsafe { Hole::new(data, pos) };

    while hole.pos() > 0 {
        let parent = (hole.pos() - 1) / 2;

        // SAFETY: hole.pos() > 0, so parent < hole.pos() is a valid
        //  index distinct from the hole.
        if !order.outranks(hole.element(), unsafe { hole.get(parent) }) {
            break;
        }

        // SAFETY: Same as above
        unsafe { hole.move_to(parent) };
    }
}

/// Moves the element at `pos` towards the leaves for as long as its
/// highest-priority child outranks it.
///
/// Of two children, the left one is only chosen when it strictly outranks the
/// right one; children of equal priority resolve to the right.
///
/// # Safety
///
/// The caller must guarantee that `pos < data.len()`.
unsafe fn sink<T, P: Prioritize<T>>(data: &mut [T], pos: usize, order: &P) {
    let end = data.len();
    // SAFETY: The caller guarantees that pos < data.len().
    let mut hole = unsafe { Hole::new(data, pos) };
    let mut child = 2 * hole.pos() + 1;

    // Loop invariant: child == 2 * hole.pos() + 1.
    while child < end {
        // SAFETY: child < end and child + 1 < end are checked before use, and
        //  both are greater than hole.pos().
        if child + 1 < end
            && !order.outranks(unsafe { hole.get(child) }, unsafe { hole.get(child + 1) })
        {
            child += 1;
        }

        // if we are already in order, stop.
        // SAFETY: child is either the old child or the old child + 1, both
        //  already proven valid and != hole.pos().
        if !order.outranks(unsafe { hole.get(child) }, hole.element()) {
            return;
        }

        // SAFETY: same as above.
        unsafe { hole.move_to(child) };
        child = 2 * hole.pos() + 1;
    }
}

/// Sorts a heap-ordered slice from highest to lowest priority.
///
/// Each round swaps the root with the last element of the shrinking heap and
/// sinks the new root, which is exactly the data movement of
/// [`PriorityQueue::pop`]; reversing the outcome therefore reproduces the
/// sequence of successive pops, ties included.
fn sort_by_rank<T, P: Prioritize<T>>(data: &mut [T], order: &P) {
    let mut end = data.len();
    while end > 1 {
        end -= 1;
        data.swap(0, end);
        // SAFETY: 0 < end, so the heap slice is non-empty.
        unsafe { sink(&mut data[..end], 0, order) };
    }
    data.reverse();
}

// `swim` and `sink` move an element out of the slice (leaving behind a hole),
// shift the others along and move the removed element back into the slice at
// the final location of the hole. The `Hole` makes sure the hole is filled
// back at the end of its scope, even if the predicate panics.

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the elements of a `PriorityQueue`, in heap order.
///
/// This `struct` is created by [`PriorityQueue::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `PriorityQueue`, in heap order.
///
/// This `struct` is created by [`PriorityQueue::into_iter()`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// An owning iterator over the elements of a `PriorityQueue`, in priority
/// order.
///
/// This `struct` is created by [`PriorityQueue::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, P = MaxFirst<T>> {
    inner: PriorityQueue<T, P>,
}

impl<T, P: Prioritize<T>> Iterator for IntoIterSorted<T, P> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, P: Prioritize<T>> ExactSizeIterator for IntoIterSorted<T, P> {}

impl<T, P: Prioritize<T>> FusedIterator for IntoIterSorted<T, P> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T, P: Prioritize<T>> TrustedLen for IntoIterSorted<T, P> {}

/// A draining iterator over the elements of a `PriorityQueue`, in heap order.
///
/// This `struct` is created by [`PriorityQueue::drain()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T, P: Prioritize<T> + Default> From<Vec<T>> for PriorityQueue<T, P> {
    /// Converts a `Vec<T>` into a `PriorityQueue<T, P>` under the default order.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> PriorityQueue<T, P> {
        PriorityQueue::from_vec(vec, P::default())
    }
}

impl<T, P: Prioritize<T> + Default, const N: usize> From<[T; N]> for PriorityQueue<T, P> {
    /// ```
    /// use heapq::PriorityQueue;
    ///
    /// let mut h1: PriorityQueue<i32> = PriorityQueue::from([1, 4, 2, 3]);
    /// let mut h2: PriorityQueue<i32> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, P> From<PriorityQueue<T, P>> for Vec<T> {
    /// Converts a `PriorityQueue<T, P>` into a `Vec<T>` in heap order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(queue: PriorityQueue<T, P>) -> Vec<T> {
        queue.data
    }
}

impl<T, P: Prioritize<T> + Default> FromIterator<T> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PriorityQueue<T, P> {
        PriorityQueue::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, P> IntoIterator for PriorityQueue<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the queue in heap order. The queue cannot be used after calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, P> IntoIterator for &'a PriorityQueue<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, P: Prioritize<T>> Extend<T> for PriorityQueue<T, P> {
    /// Pushes every item of `iter`, in iteration order.
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_desugared(iter);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a, T: 'a + Copy, P: Prioritize<T>> Extend<&'a T> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
