//! Structural patterns.
//!
//! Record patterns are open: fields not mentioned in the pattern are
//! ignored by matching and pass through unchanged into the bound result.

use crate::{ExprId, Name, PatternId, PatternRange};

/// Structural pattern matched against a runtime value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Pattern {
    /// Matches anything, binds nothing: `_`.
    Wildcard,
    /// Matches anything, binds the value: `x`.
    Binding(Name),
    /// Literal equality. The expression must be a literal node
    /// (null/bool/int/float/string); anything else is a malformed
    /// pattern and a hard evaluation error.
    Literal(ExprId),
    /// Record pattern: `%{ snot ~= json||, badger == 42 }`.
    ///
    /// Each field is a (name, sub-pattern) pair; fields are checked in
    /// declaration order. A missing field fails the match, except for
    /// an `Absent` sub-pattern which requires the field to be missing.
    Record(Vec<FieldPattern>),
    /// Sequence pattern: `%[ a, b ]` with an optional rest binding for
    /// the remaining elements.
    Sequence {
        elements: PatternRange,
        rest: Option<Name>,
    },
    /// Extractor invocation: `~= extractorName|optionalArgs|`.
    ///
    /// Matches iff the value is a string and the named extractor
    /// decodes it; the decoded value replaces the string in the bound
    /// result. An unknown extractor name is a hard evaluation error.
    Extractor { name: Name, args: Option<Name> },
    /// Field-absence predicate: `absent field`.
    ///
    /// Only meaningful as a record field's sub-pattern; anywhere else
    /// it never matches.
    Absent,
}

/// A single field check in a record pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldPattern {
    pub name: Name,
    pub pattern: PatternId,
}
