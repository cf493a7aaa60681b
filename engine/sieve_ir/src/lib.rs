//! Sieve IR - AST and interning types for the Sieve match engine.
//!
//! This crate contains the core data structures shared by the engine:
//! - Spans for source locations
//! - Names for interned identifiers
//! - AST nodes (Expr, Pattern, Case, `MatchExpr`)
//! - Arena allocation for AST nodes
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId`(u32) indices
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.
//! Types that contain strings use interned Name for O(1) equality.
//!
//! The engine receives its AST from the surrounding language's parser;
//! nothing in this crate lexes or parses source text.

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;
mod span;

pub use arena::ExprArena;
pub use ast::{Case, Expr, ExprKind, FieldPattern, MatchExpr, Pattern, RecordEntry};
pub use ids::{CaseRange, EntryRange, ExprId, ExprRange, MatchId, PatternId, PatternRange};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, Spanned};
