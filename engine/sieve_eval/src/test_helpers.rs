//! Shared helpers for matcher and evaluator tests.
//!
//! Tests receive their AST from hand-built arenas; these helpers keep
//! that plumbing out of the test bodies.

use sieve_extract::{ExtractorRegistry, Record, Value};
use sieve_ir::{
    Case, Expr, ExprArena, ExprId, ExprKind, FieldPattern, MatchExpr, MatchId, Name, Pattern,
    PatternId, RecordEntry, Span, StringInterner,
};

use crate::MatchContext;

/// Build a record value from (field, value) pairs.
pub(crate) fn record_value(pairs: &[(&str, Value)]) -> Value {
    Value::record(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect::<Record>(),
    )
}

/// Arena, interner, and registry bundle for building test ASTs.
pub(crate) struct TestSetup {
    pub arena: ExprArena,
    pub interner: StringInterner,
    pub registry: ExtractorRegistry,
}

impl TestSetup {
    pub fn new() -> Self {
        TestSetup {
            arena: ExprArena::new(),
            interner: StringInterner::new(),
            registry: ExtractorRegistry::new(),
        }
    }

    pub fn cx(&self) -> MatchContext<'_> {
        MatchContext {
            arena: &self.arena,
            interner: &self.interner,
            registry: &self.registry,
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    // Expressions

    pub fn expr(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, Span::DUMMY))
    }

    pub fn int(&mut self, n: i64) -> ExprId {
        self.expr(ExprKind::Int(n))
    }

    pub fn str_expr(&mut self, s: &str) -> ExprId {
        let name = self.name(s);
        self.expr(ExprKind::Str(name))
    }

    pub fn ident(&mut self, s: &str) -> ExprId {
        let name = self.name(s);
        self.expr(ExprKind::Ident(name))
    }

    pub fn field(&mut self, base: ExprId, field: &str) -> ExprId {
        let name = self.name(field);
        self.expr(ExprKind::Field { base, field: name })
    }

    pub fn record_expr(&mut self, entries: &[(&str, ExprId)]) -> ExprId {
        let entries: Vec<RecordEntry> = entries
            .iter()
            .map(|(k, v)| RecordEntry {
                key: self.name(k),
                value: *v,
            })
            .collect();
        let range = self.arena.alloc_entries(entries);
        self.expr(ExprKind::Record(range))
    }

    pub fn list_expr(&mut self, items: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(items.to_vec());
        self.expr(ExprKind::List(range))
    }

    pub fn match_expr(&mut self, subject: ExprId, cases: Vec<Case>, default_body: ExprId) -> MatchId {
        let cases = self.arena.alloc_cases(cases);
        self.arena.alloc_match(MatchExpr {
            subject,
            cases,
            default_body,
            span: Span::DUMMY,
        })
    }

    // Cases

    pub fn case(&mut self, pattern: PatternId, binding: Option<&str>, body: ExprId) -> Case {
        Case {
            pattern,
            binding: binding.map(|b| self.name(b)),
            guard: None,
            body,
            span: Span::DUMMY,
        }
    }

    pub fn guarded_case(
        &mut self,
        pattern: PatternId,
        binding: Option<&str>,
        guard: ExprId,
        body: ExprId,
    ) -> Case {
        Case {
            guard: Some(guard),
            ..self.case(pattern, binding, body)
        }
    }

    // Patterns

    pub fn pattern(&mut self, pattern: Pattern) -> PatternId {
        self.arena.alloc_pattern(pattern)
    }

    pub fn literal_int_pattern(&mut self, n: i64) -> PatternId {
        let expr = self.int(n);
        self.pattern(Pattern::Literal(expr))
    }

    pub fn literal_str_pattern(&mut self, s: &str) -> PatternId {
        let expr = self.str_expr(s);
        self.pattern(Pattern::Literal(expr))
    }

    pub fn extractor_pattern(&mut self, name: &str) -> PatternId {
        let name = self.name(name);
        self.pattern(Pattern::Extractor { name, args: None })
    }

    pub fn record_pattern(&mut self, fields: &[(&str, PatternId)]) -> PatternId {
        let fields: Vec<FieldPattern> = fields
            .iter()
            .map(|(k, p)| FieldPattern {
                name: self.name(k),
                pattern: *p,
            })
            .collect();
        self.pattern(Pattern::Record(fields))
    }

    pub fn sequence_pattern(&mut self, elements: &[PatternId], rest: Option<Name>) -> PatternId {
        let elements = self.arena.alloc_pattern_list(elements.to_vec());
        self.pattern(Pattern::Sequence { elements, rest })
    }

    // Values

    pub fn record_value(&self, pairs: &[(&str, Value)]) -> Value {
        record_value(pairs)
    }
}
