//! Enforced-Arc heap wrapper.
//!
//! `Heap<T>` has a module-private constructor so external code cannot
//! build heap values directly; the only way to allocate is through the
//! factory methods on [`Value`](super::Value). This keeps every heap
//! variant behind thread-safe reference counting.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Arc-backed heap allocation with a private constructor.
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap allocation.
    ///
    /// `pub(super)` on purpose: only the value module's factory methods
    /// may allocate.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_allocation() {
        let a = Heap::new(String::from("snot"));
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn deref_reaches_inner() {
        let heap = Heap::new(vec![1, 2, 3]);
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Heap::new(String::from("x")), Heap::new(String::from("x")));
        assert_ne!(Heap::new(String::from("x")), Heap::new(String::from("y")));
    }
}
