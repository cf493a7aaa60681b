//! Built-in extractor implementations.
//!
//! Both built-ins are pure, stateless ZSTs. Each module also exposes an
//! `encode` companion so hosts (and the round-trip tests) can go the
//! other way.

pub mod base64;
pub mod json;

pub use self::base64::Base64Extractor;
pub use self::json::JsonExtractor;
