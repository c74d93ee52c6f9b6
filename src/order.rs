//! Priority predicates for [`PriorityQueue`].
//!
//! A [`Prioritize`] implementation decides, for any two elements, whether the
//! first has strictly higher priority than the second.  Any closure of type
//! `Fn(&T, &T) -> bool` qualifies; the zero-sized orders in this module cover the
//! common cases of delegating to [`Ord`].
//!
//! [`PriorityQueue`]: crate::PriorityQueue

use core::{fmt, marker::PhantomData};

/// A strict priority relation over values of type `T`.
///
/// `outranks(a, b)` must return `true` iff `a` has strictly higher priority
/// than `b`.  The relation must be asymmetric (if `a` outranks `b` then `b`
/// does not outrank `a`) and consistent for as long as the values are held by a
/// queue.  Elements of equal priority (neither outranks the other) are
/// permitted, but no ordering guarantee is made between them.
///
/// It is a logic error for the relation to change while a queue holds values.
/// The behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the queue that observed it and not result in undefined
/// behavior.
pub trait Prioritize<T: ?Sized> {
    /// Returns `true` if `this` has strictly higher priority than `that`.
    fn outranks(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Prioritize<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}

/// A zero-sized order under which greater values (per [`Ord`]) have higher
/// priority, making the queue a max-heap.
pub struct MaxFirst<T: ?Sized>(PhantomData<fn(&T)>);

/// A zero-sized order under which lesser values (per [`Ord`]) have higher
/// priority, making the queue a min-heap.
pub struct MinFirst<T: ?Sized>(PhantomData<fn(&T)>);

macro_rules! ord_orders {
    ($($name:ident => $op:tt),* $(,)?) => {$(
        impl<T: ?Sized> $name<T> {
            /// Creates the order.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: ?Sized + Ord> Prioritize<T> for $name<T> {
            // Delegate to `T`'s implementation of [`PartialOrd`] rather than going
            // through `Ord::cmp`, so that inconsistent implementations behave as
            // the operator would.
            #[inline]
            fn outranks(&self, this: &T, that: &T) -> bool {
                this $op that
            }
        }
    )*};
}

ord_orders! {
    MaxFirst => >,
    MinFirst => <,
}

/// An adaptor that inverts another order: whatever `P` ranks highest, this
/// ranks lowest.
///
/// ```
/// use heapq::{MaxFirst, PriorityQueue, Reversed};
///
/// let mut queue = PriorityQueue::from_vec(vec![3, 1, 2], Reversed(MaxFirst::new()));
/// assert_eq!(queue.pop(), Some(1));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<P>(pub P);

impl<T: ?Sized, P: Prioritize<T>> Prioritize<T> for Reversed<P> {
    #[inline]
    fn outranks(&self, this: &T, that: &T) -> bool {
        self.0.outranks(that, this)
    }
}
