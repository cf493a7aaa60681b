//! Decode error types.
//!
//! An extractor either succeeds with a `Value` or fails with a
//! `DecodeError`; there are no partial or ambiguous outcomes. At the
//! pattern level a decode failure is not an error at all: the matcher
//! folds it into "no match" so default branches stay universal
//! catch-alls. The typed failure reason exists for hosts that call
//! extractors directly and for trace-level logging.

use std::fmt;

use crate::Value;

/// Result of a decode attempt.
pub type DecodeResult = Result<Value, DecodeError>;

/// Why a decode attempt failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Input was not a well-formed JSON document.
    MalformedJson { detail: String },
    /// Input was not valid base64 (alphabet or padding).
    MalformedBase64 { detail: String },
    /// Decoded bytes were not valid UTF-8.
    InvalidUtf8 { detail: String },
    /// Failure from a host-registered extractor.
    Failed { extractor: String, detail: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedJson { detail } => write!(f, "malformed JSON: {detail}"),
            DecodeError::MalformedBase64 { detail } => write!(f, "malformed base64: {detail}"),
            DecodeError::InvalidUtf8 { detail } => {
                write!(f, "decoded bytes are not UTF-8: {detail}")
            }
            DecodeError::Failed { extractor, detail } => {
                write!(f, "extractor '{extractor}' failed: {detail}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
