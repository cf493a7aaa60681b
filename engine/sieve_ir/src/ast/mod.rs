//! AST nodes for match expressions and their bodies.
//!
//! These nodes arrive from the surrounding language's parser. The
//! expression language here is deliberately small: it is the subset a
//! case body needs to rebuild subjects for nested matches (literals,
//! binding references, field access, record and list construction, and
//! nested match expressions). Everything else the host language offers
//! is evaluated upstream, before this engine sees a subject.

mod pattern;

pub use pattern::{FieldPattern, Pattern};

use crate::{CaseRange, EntryRange, ExprId, ExprRange, MatchId, Name, PatternId, Span, Spanned};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    /// Create an expression node.
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Null literal.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Float literal, stored as bits for Hash compatibility.
    Float(u64),
    /// String literal (interned).
    Str(Name),
    /// Binding reference: `extraction`.
    Ident(Name),
    /// Field access: `extraction.snot`.
    Field { base: ExprId, field: Name },
    /// Record construction: `{ "snot": expr }`. Entries keep
    /// declaration order.
    Record(EntryRange),
    /// List construction: `[a, b, c]`.
    List(ExprRange),
    /// Nested match expression, usable anywhere an expression is.
    Match(MatchId),
}

/// A single entry in a record-construction expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordEntry {
    pub key: Name,
    pub value: ExprId,
}

/// One case of a match expression.
///
/// `binding`, when present, names the (field-substituted) matched value
/// within `body` and `guard`. A non-truthy `guard` skips the case as if
/// the pattern had not matched.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Case {
    pub pattern: PatternId,
    pub binding: Option<Name>,
    pub guard: Option<ExprId>,
    pub body: ExprId,
    pub span: Span,
}

impl Spanned for Case {
    fn span(&self) -> Span {
        self.span
    }
}

/// A match expression: ordered cases over a subject, first-match-wins,
/// with a mandatory default body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchExpr {
    pub subject: ExprId,
    pub cases: CaseRange,
    pub default_body: ExprId,
    pub span: Span,
}

impl Spanned for MatchExpr {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nodes_report_their_spans() {
        let expr = Expr::new(ExprKind::Int(1), Span::new(2, 3));
        assert_eq!(Spanned::span(&expr), Span::new(2, 3));

        let case = Case {
            pattern: PatternId::new(0),
            binding: None,
            guard: None,
            body: ExprId::new(0),
            span: Span::new(4, 9),
        };
        assert_eq!(Spanned::span(&case), Span::new(4, 9));

        let match_expr = MatchExpr {
            subject: ExprId::new(0),
            cases: CaseRange::EMPTY,
            default_body: ExprId::new(1),
            span: Span::new(0, 9),
        };
        assert_eq!(Spanned::span(&match_expr), Span::new(0, 9));
    }

    #[test]
    fn float_literals_are_hashable_via_bits() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_kind(kind: &ExprKind) -> u64 {
            let mut hasher = DefaultHasher::new();
            kind.hash(&mut hasher);
            hasher.finish()
        }

        let a = ExprKind::Float(2.5f64.to_bits());
        let b = ExprKind::Float(2.5f64.to_bits());
        assert_eq!(hash_kind(&a), hash_kind(&b));
        assert_eq!(a, b);
    }
}
