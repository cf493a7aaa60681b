//! Structural matching of patterns against values.
//!
//! The matcher's contract splits outcomes three ways:
//! - `Ok(Matched { .. })`: the pattern matched; the outcome carries the
//!   transformed value (extracted fields replaced by their decoded
//!   values) and the bindings collected along the way.
//! - `Ok(NotMatched)`: every value-level failure (literal mismatch,
//!   missing field, type mismatch, decode failure). These drive case
//!   fallthrough and are never surfaced as errors.
//! - `Err(..)`: structural misconfiguration only, meaning an unknown
//!   extractor name or a malformed literal pattern node.
//!
//! Matching never mutates the subject. Record and sequence matches build
//! fresh values (copy-on-match), so the subject can be shared freely
//! across re-entrant or concurrent evaluations.

use smallvec::SmallVec;
use tracing::trace;

use sieve_extract::{ExtractorRegistry, Value};
use sieve_ir::{
    ExprArena, ExprId, ExprKind, FieldPattern, Name, Pattern, PatternId, PatternRange,
    StringInterner,
};

use crate::errors::{invalid_literal_pattern, unknown_extractor, EvalError};
use crate::stack::ensure_sufficient_stack;

/// Bindings collected during one pattern match.
pub type Bindings = SmallVec<[(Name, Value); 4]>;

/// Outcome of matching a pattern against a value.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchOutcome {
    /// The pattern matched. `value` is the transformed subject;
    /// `bindings` are the names introduced by sub-patterns.
    Matched { value: Value, bindings: Bindings },
    /// The pattern did not match. A normal outcome, not an error.
    NotMatched,
}

impl MatchOutcome {
    /// A match that introduces no bindings.
    fn of(value: Value) -> Self {
        MatchOutcome::Matched {
            value,
            bindings: Bindings::new(),
        }
    }

    /// Check if this outcome is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// Everything the matcher needs besides the pattern and the value.
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    pub arena: &'a ExprArena,
    pub interner: &'a StringInterner,
    pub registry: &'a ExtractorRegistry,
}

/// Match a pattern against a value.
pub fn matches(
    pattern: PatternId,
    value: &Value,
    cx: &MatchContext<'_>,
) -> Result<MatchOutcome, EvalError> {
    ensure_sufficient_stack(|| match cx.arena.get_pattern(pattern) {
        Pattern::Wildcard => Ok(MatchOutcome::of(value.clone())),
        Pattern::Binding(name) => {
            let mut bindings = Bindings::new();
            bindings.push((*name, value.clone()));
            Ok(MatchOutcome::Matched {
                value: value.clone(),
                bindings,
            })
        }
        Pattern::Literal(expr) => {
            let literal = literal_value(*expr, cx)?;
            if literal == *value {
                Ok(MatchOutcome::of(value.clone()))
            } else {
                Ok(MatchOutcome::NotMatched)
            }
        }
        Pattern::Record(fields) => match_record(fields, value, cx),
        Pattern::Sequence { elements, rest } => match_sequence(*elements, *rest, value, cx),
        Pattern::Extractor { name, args } => match_extractor(*name, *args, value, cx),
        // Only meaningful as a record field predicate; handled in
        // match_record before recursing.
        Pattern::Absent => Ok(MatchOutcome::NotMatched),
    })
}

/// Resolve a literal pattern's expression node into a value.
fn literal_value(expr: ExprId, cx: &MatchContext<'_>) -> Result<Value, EvalError> {
    let node = cx.arena.get_expr(expr);
    match &node.kind {
        ExprKind::Null => Ok(Value::Null),
        ExprKind::Bool(b) => Ok(Value::Bool(*b)),
        ExprKind::Int(n) => Ok(Value::Int(*n)),
        ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(*bits))),
        ExprKind::Str(name) => Ok(Value::string(cx.interner.lookup(*name))),
        _ => Err(invalid_literal_pattern().with_span(node.span)),
    }
}

fn match_record(
    fields: &[FieldPattern],
    value: &Value,
    cx: &MatchContext<'_>,
) -> Result<MatchOutcome, EvalError> {
    let Some(record) = value.as_record() else {
        return Ok(MatchOutcome::NotMatched);
    };

    // Unmentioned fields pass through unchanged into the bound result.
    let mut out = record.clone();
    let mut bindings = Bindings::new();

    // Declaration order; short-circuit on the first failing field.
    for field in fields {
        let field_name = cx.interner.lookup(field.name);

        if matches!(cx.arena.get_pattern(field.pattern), Pattern::Absent) {
            if record.contains_key(field_name) {
                return Ok(MatchOutcome::NotMatched);
            }
            continue;
        }

        // Missing field: no match, no default substitution.
        let Some(field_value) = record.get(field_name) else {
            return Ok(MatchOutcome::NotMatched);
        };

        match matches(field.pattern, field_value, cx)? {
            MatchOutcome::Matched {
                value: matched,
                bindings: sub,
            } => {
                bindings.extend(sub);
                // Replaces the value in place; IndexMap keeps the
                // field's original position.
                out.insert(field_name.to_owned(), matched);
            }
            MatchOutcome::NotMatched => return Ok(MatchOutcome::NotMatched),
        }
    }

    Ok(MatchOutcome::Matched {
        value: Value::record(out),
        bindings,
    })
}

fn match_sequence(
    elements: PatternRange,
    rest: Option<Name>,
    value: &Value,
    cx: &MatchContext<'_>,
) -> Result<MatchOutcome, EvalError> {
    let Some(items) = value.as_list() else {
        return Ok(MatchOutcome::NotMatched);
    };
    let element_ids = cx.arena.get_pattern_list(elements);

    if items.len() < element_ids.len() {
        return Ok(MatchOutcome::NotMatched);
    }
    if rest.is_none() && items.len() != element_ids.len() {
        return Ok(MatchOutcome::NotMatched);
    }

    let mut out = Vec::with_capacity(items.len());
    let mut bindings = Bindings::new();
    for (pattern, item) in element_ids.iter().zip(items.iter()) {
        match matches(*pattern, item, cx)? {
            MatchOutcome::Matched {
                value: matched,
                bindings: sub,
            } => {
                bindings.extend(sub);
                out.push(matched);
            }
            MatchOutcome::NotMatched => return Ok(MatchOutcome::NotMatched),
        }
    }

    let remainder = &items[element_ids.len()..];
    if let Some(rest_name) = rest {
        bindings.push((rest_name, Value::list(remainder.to_vec())));
    }
    out.extend(remainder.iter().cloned());

    Ok(MatchOutcome::Matched {
        value: Value::list(out),
        bindings,
    })
}

fn match_extractor(
    name: Name,
    args: Option<Name>,
    value: &Value,
    cx: &MatchContext<'_>,
) -> Result<MatchOutcome, EvalError> {
    // Extractors only apply to strings; anything else is an ordinary
    // type mismatch, not an error.
    let Some(raw) = value.as_str() else {
        return Ok(MatchOutcome::NotMatched);
    };

    let extractor_name = cx.interner.lookup(name);
    let Some(extractor) = cx.registry.lookup(extractor_name) else {
        return Err(unknown_extractor(extractor_name));
    };

    let args = args.map(|a| cx.interner.lookup(a));
    match extractor.decode(raw, args) {
        Ok(decoded) => Ok(MatchOutcome::of(decoded)),
        Err(e) => {
            trace!(extractor = extractor_name, error = %e, "decode failed; no match");
            Ok(MatchOutcome::NotMatched)
        }
    }
}
