//! Extractor registry for looking up extractor definitions by name.

use std::ops::Deref;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::extractors::{Base64Extractor, JsonExtractor};
use crate::DecodeResult;

/// Trait defining an extractor's behavior.
///
/// An extractor is a named, pluggable decoder that attempts to
/// reinterpret a raw string as structured data. Implementations must be
/// pure: no side effects, no shared mutable state, so matching stays
/// re-entrant and safe to run concurrently.
///
/// # Open/Closed Principle
/// Adding a new extractor requires:
/// 1. Implement `ExtractorDefinition`
/// 2. Register it via `ExtractorRegistry::register`
///
/// No modifications to the matcher or evaluator needed.
pub trait ExtractorDefinition: Send + Sync {
    /// The extractor's name (e.g., "json", "base64"). Lookup is
    /// case-sensitive.
    fn name(&self) -> &'static str;

    /// Attempt to decode `raw` into a structured value.
    ///
    /// `args` carries the optional `|...|` argument string from the
    /// invocation site; extractors that take no configuration ignore it.
    fn decode(&self, raw: &str, args: Option<&str>) -> DecodeResult;
}

/// Shared extractor definition wrapper for storing extractors in the
/// registry.
///
/// This newtype enforces that all extractor sharing goes through this
/// type, preventing accidental direct `Arc<dyn ExtractorDefinition>`
/// usage. Uses `Arc` internally so handles stay cheap to clone and safe
/// to hold across threads.
#[derive(Clone)]
pub struct SharedExtractor(Arc<dyn ExtractorDefinition>);

impl SharedExtractor {
    /// Create a new shared extractor from a definition.
    pub fn new<E: ExtractorDefinition + 'static>(extractor: E) -> Self {
        SharedExtractor(Arc::new(extractor))
    }
}

impl Deref for SharedExtractor {
    type Target = dyn ExtractorDefinition;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Registry mapping extractor names to definitions.
///
/// The host runtime populates the registry at startup; the matcher only
/// calls [`lookup`](Self::lookup). A name that resolves to `None` is a
/// hard evaluation error (`UnknownExtractor`) at the call site, never a
/// silent no-match.
pub struct ExtractorRegistry {
    extractors: FxHashMap<&'static str, SharedExtractor>,
}

impl ExtractorRegistry {
    /// Create an empty registry (for testing or custom configurations).
    pub fn empty() -> Self {
        ExtractorRegistry {
            extractors: FxHashMap::default(),
        }
    }

    /// Create a new registry with the built-in extractors registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(SharedExtractor::new(JsonExtractor));
        registry.register(SharedExtractor::new(Base64Extractor));
        registry
    }

    /// Register an extractor under its canonical name.
    ///
    /// Re-registering a name replaces the previous definition.
    pub fn register(&mut self, extractor: SharedExtractor) {
        self.extractors.insert(extractor.name(), extractor);
    }

    /// Look up an extractor by name. Case-sensitive, O(1) expected.
    pub fn lookup(&self, name: &str) -> Option<SharedExtractor> {
        self.extractors.get(name).cloned()
    }

    /// Names of all registered extractors.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extractors.keys().copied()
    }

    /// Number of registered extractors.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
