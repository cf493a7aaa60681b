//! Error types for match evaluation.
//!
//! "No match" is not an error; it is a normal matcher outcome that
//! drives case fallthrough, modeled by
//! [`MatchOutcome`](crate::MatchOutcome). The errors here are the hard
//! failures: structural misconfiguration (an unknown extractor name, a
//! malformed pattern node) and body-evaluation failures (undefined
//! bindings, bad field access). Factory functions populate both `kind`
//! and `message`.

use std::fmt;

use sieve_extract::Value;
use sieve_ir::Span;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// Each variant carries structured data for the error condition,
/// enabling programmatic matching instead of string parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A pattern referenced an extractor name the registry does not
    /// know. Fatal to the enclosing evaluation, never folded into
    /// "no match".
    UnknownExtractor { name: String },
    /// A body expression referenced a binding that is not in scope.
    UndefinedBinding { name: String },
    /// A body expression accessed a field that does not exist.
    NoSuchField { field: String },
    /// A body expression accessed a field on a non-record value.
    NotARecord { type_name: String },
    /// A literal pattern pointed at a non-literal expression node.
    InvalidLiteralPattern,
    /// Catch-all for errors not yet categorized into structured kinds.
    Custom { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownExtractor { name } => write!(f, "unknown extractor: {name}"),
            Self::UndefinedBinding { name } => write!(f, "undefined binding: {name}"),
            Self::NoSuchField { field } => write!(f, "no field {field} on record"),
            Self::NotARecord { type_name } => {
                write!(f, "cannot access field on {type_name}")
            }
            Self::InvalidLiteralPattern => write!(f, "invalid literal pattern"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, precomputed from the kind.
    pub message: String,
    /// Source location where the error occurred, when known.
    pub span: Option<Span>,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the specific factory functions when a
    /// structured kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
            span: None,
        }
    }

    /// Create an error from a structured kind.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

/// Unknown extractor referenced by a pattern.
#[cold]
pub fn unknown_extractor(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownExtractor {
        name: name.to_string(),
    })
}

/// Undefined binding referenced by a body expression.
#[cold]
pub fn undefined_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedBinding {
        name: name.to_string(),
    })
}

/// Field access on a record that lacks the field.
#[cold]
pub fn no_such_field(field: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchField {
        field: field.to_string(),
    })
}

/// Field access on a non-record value.
#[cold]
pub fn not_a_record(type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotARecord {
        type_name: type_name.to_string(),
    })
}

/// Literal pattern pointing at a non-literal expression node.
#[cold]
pub fn invalid_literal_pattern() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLiteralPattern)
}
