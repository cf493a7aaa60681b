#![deny(clippy::arithmetic_side_effects)]
//! Sieve Extract - Runtime values and extractors for the Sieve match engine.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`)
//! - Decode error types (`DecodeError`, `DecodeResult`)
//! - The extractor trait, registry, and the built-in `json` and
//!   `base64` extractors
//!
//! # Architecture
//!
//! Extractors follow the Open/Closed principle:
//! - New extractors can be added by implementing `ExtractorDefinition`
//! - No modifications to existing code required
//! - Extractors are registered by name in `ExtractorRegistry`
//!
//! # Value Types
//!
//! The value module provides runtime values with enforced Arc usage:
//! - All heap allocations go through `Value::` factory methods
//! - `Heap<T>` wrapper enforces this invariant
//! - Thread-safe reference counting via `Arc`; values are immutable
//!   once constructed, so extraction always builds new values

mod errors;
pub mod extractors;
mod registry;
mod value;

pub use errors::{DecodeError, DecodeResult};
pub use extractors::{Base64Extractor, JsonExtractor};
pub use registry::{ExtractorDefinition, ExtractorRegistry, SharedExtractor};
pub use value::{Heap, Record, Value};
