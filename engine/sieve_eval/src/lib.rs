#![deny(clippy::arithmetic_side_effects)]
//! Sieve Eval - Structural matcher and match evaluator for the Sieve
//! engine.
//!
//! This crate is the heart of the engine: it matches values against
//! structural patterns, applies extractors to string fields during
//! matching (substituting the decoded values into the bound result),
//! and evaluates ordered case lists with first-match-wins semantics and
//! a mandatory default branch.
//!
//! # Architecture
//!
//! - `matcher`: pattern-against-value matching. "No match" is a normal
//!   outcome (`MatchOutcome::NotMatched`); only structural
//!   misconfiguration is an error.
//! - `evaluator`: the per-match-expression state machine, scope
//!   handling, and the minimal body-expression language (enough to
//!   rebuild subjects for nested matches).
//! - `Environment`: binding scoping with a scope stack.
//! - `ensure_sufficient_stack`: stack growth for unbounded nesting
//!   depth.
//!
//! # Re-exports
//!
//! This crate re-exports value and extractor types from `sieve_extract`
//! for convenience: `Value`, `Record`, `Heap`, `ExtractorRegistry`,
//! `ExtractorDefinition`, `SharedExtractor`, `DecodeError`,
//! `DecodeResult`.

mod environment;
pub mod errors;
mod evaluator;
mod matcher;
mod stack;

#[cfg(test)]
mod test_helpers;

// Re-export value and extractor types from sieve_extract
pub use sieve_extract::{
    DecodeError, DecodeResult, ExtractorDefinition, ExtractorRegistry, Heap, Record,
    SharedExtractor, Value,
};

pub use environment::Environment;
pub use errors::{
    invalid_literal_pattern, no_such_field, not_a_record, undefined_binding, unknown_extractor,
    EvalError, EvalErrorKind, EvalResult,
};
pub use evaluator::{evaluate, Evaluator};
pub use matcher::{matches, Bindings, MatchContext, MatchOutcome};
pub use stack::ensure_sufficient_stack;
