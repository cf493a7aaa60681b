//! IDs and ranges for the flat AST.
//!
//! AST nodes live in [`ExprArena`](crate::ExprArena) vectors and
//! reference each other through 4-byte indices instead of `Box`:
//! - O(1) integer equality
//! - cache locality (nodes stored contiguously)
//! - cheap `Clone`/`Hash` for whole trees

use std::fmt;

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Index into the pattern arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct PatternId(u32);

impl PatternId {
    /// Create a new `PatternId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        PatternId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}

/// Index into the match-expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct MatchId(u32);

impl MatchId {
    /// Create a new `MatchId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        MatchId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchId({})", self.0)
    }
}

/// Contiguous range in a flattened node list.
///
/// Layout: (start: u32, len: u16). Node lists in this engine (case
/// lists, record entries, sequence elements) are short; 65k elements
/// per list is far beyond anything a pattern will hold.
macro_rules! define_range {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Number of elements in the range.
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start.saturating_add(u32::from(self.len))
                )
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }
    };
}

define_range! {
    /// Range of expressions in the flattened expression list.
    ExprRange
}

define_range! {
    /// Range of sub-patterns in the flattened pattern list.
    PatternRange
}

define_range! {
    /// Range of cases belonging to one match expression.
    CaseRange
}

define_range! {
    /// Range of record-literal entries.
    EntryRange
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expr_id_validity() {
        assert!(ExprId::new(0).is_valid());
        assert!(!ExprId::INVALID.is_valid());
        assert_eq!(ExprId::default(), ExprId::INVALID);
    }

    #[test]
    fn range_len() {
        let range = CaseRange::new(4, 3);
        assert_eq!(range.len(), 3);
        assert!(!range.is_empty());
        assert!(CaseRange::EMPTY.is_empty());
    }

    #[test]
    fn debug_formats() {
        assert_eq!(format!("{:?}", ExprId::new(5)), "ExprId(5)");
        assert_eq!(format!("{:?}", ExprRange::new(2, 3)), "ExprRange(2..5)");
    }
}
