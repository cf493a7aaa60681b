//! Arena allocation for AST nodes.
//!
//! All nodes of one parsed query live in a single `ExprArena`; ids and
//! ranges from `crate::ids` index into it. The arena is append-only:
//! nodes are never removed or mutated after allocation.

use crate::ast::{Case, Expr, MatchExpr, Pattern, RecordEntry};
use crate::{CaseRange, EntryRange, ExprId, ExprRange, MatchId, PatternId, PatternRange};

/// Arena holding the flattened AST of a query.
#[derive(Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    entries: Vec<RecordEntry>,
    patterns: Vec<Pattern>,
    pattern_lists: Vec<PatternId>,
    cases: Vec<Case>,
    matches: Vec<MatchExpr>,
}

fn arena_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena capacity exceeded: {len} nodes"))
}

fn list_len(len: usize) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("node list too long: {len} elements"))
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression node.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(arena_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Get an expression node.
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Allocate a contiguous expression list.
    pub fn alloc_expr_list(&mut self, items: Vec<ExprId>) -> ExprRange {
        let start = arena_index(self.expr_lists.len());
        let len = list_len(items.len());
        self.expr_lists.extend(items);
        ExprRange::new(start, len)
    }

    /// Get an expression list.
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Allocate record-construction entries.
    pub fn alloc_entries(&mut self, items: Vec<RecordEntry>) -> EntryRange {
        let start = arena_index(self.entries.len());
        let len = list_len(items.len());
        self.entries.extend(items);
        EntryRange::new(start, len)
    }

    /// Get record-construction entries.
    pub fn get_entries(&self, range: EntryRange) -> &[RecordEntry] {
        let start = range.start as usize;
        &self.entries[start..start + range.len()]
    }

    /// Allocate a pattern node.
    pub fn alloc_pattern(&mut self, pattern: Pattern) -> PatternId {
        let id = PatternId::new(arena_index(self.patterns.len()));
        self.patterns.push(pattern);
        id
    }

    /// Get a pattern node.
    pub fn get_pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.index()]
    }

    /// Allocate a contiguous sub-pattern list.
    pub fn alloc_pattern_list(&mut self, items: Vec<PatternId>) -> PatternRange {
        let start = arena_index(self.pattern_lists.len());
        let len = list_len(items.len());
        self.pattern_lists.extend(items);
        PatternRange::new(start, len)
    }

    /// Get a sub-pattern list.
    pub fn get_pattern_list(&self, range: PatternRange) -> &[PatternId] {
        let start = range.start as usize;
        &self.pattern_lists[start..start + range.len()]
    }

    /// Allocate the cases of one match expression.
    pub fn alloc_cases(&mut self, items: Vec<Case>) -> CaseRange {
        let start = arena_index(self.cases.len());
        let len = list_len(items.len());
        self.cases.extend(items);
        CaseRange::new(start, len)
    }

    /// Get the cases of a match expression.
    pub fn get_cases(&self, range: CaseRange) -> &[Case] {
        let start = range.start as usize;
        &self.cases[start..start + range.len()]
    }

    /// Allocate a match expression.
    pub fn alloc_match(&mut self, expr: MatchExpr) -> MatchId {
        let id = MatchId::new(arena_index(self.matches.len()));
        self.matches.push(expr);
        id
    }

    /// Get a match expression.
    pub fn get_match(&self, id: MatchId) -> &MatchExpr {
        &self.matches[id.index()]
    }
}
