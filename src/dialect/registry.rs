//! Process-wide dialect registry.
//!
//! Compile calls read the registry concurrently; registration happens at
//! startup (or in tests). Unknown names fall back to the `"default"`
//! configuration so unconfigured dialects stay usable with sane output.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::dialect::DialectOptions;

pub const DEFAULT_DIALECT: &str = "default";

/// A name-to-options map safe for concurrent reads and occasional writes.
///
/// Tests may construct private registries to avoid cross-test interference;
/// production code normally uses the shared [`registry()`].
#[derive(Debug)]
pub struct DialectRegistry {
    dialects: RwLock<HashMap<String, Arc<DialectOptions>>>,
}

impl DialectRegistry {
    /// Creates a registry seeded with the built-in dialects:
    /// `default`, `postgres`, `mysql` and `sqlite`.
    pub fn new() -> DialectRegistry {
        let registry = DialectRegistry {
            dialects: RwLock::new(HashMap::new()),
        };
        registry.register(DEFAULT_DIALECT, DialectOptions::default());
        registry.register("postgres", super::postgres::options());
        registry.register("mysql", super::mysql::options());
        registry.register("sqlite", super::sqlite::options());
        registry
    }

    pub fn register(&self, name: impl Into<String>, options: DialectOptions) {
        self.dialects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), Arc::new(options));
    }

    pub fn deregister(&self, name: &str) {
        self.dialects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    /// Looks up a dialect by name, falling back to `"default"` for unknown
    /// names. If `"default"` itself has been removed, the built-in default
    /// configuration is returned.
    pub fn get(&self, name: &str) -> Arc<DialectOptions> {
        let dialects = self
            .dialects
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        dialects
            .get(name)
            .or_else(|| dialects.get(DEFAULT_DIALECT))
            .cloned()
            .unwrap_or_else(|| Arc::new(DialectOptions::default()))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .dialects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl Default for DialectRegistry {
    fn default() -> DialectRegistry {
        DialectRegistry::new()
    }
}

/// The shared process-wide registry.
pub fn registry() -> &'static DialectRegistry {
    static REGISTRY: OnceLock<DialectRegistry> = OnceLock::new();
    REGISTRY.get_or_init(DialectRegistry::new)
}

/// Registers a dialect on the shared registry.
pub fn register_dialect(name: impl Into<String>, options: DialectOptions) {
    registry().register(name, options);
}

/// Removes a dialect from the shared registry. Used mainly in tests.
pub fn deregister_dialect(name: &str) {
    registry().deregister(name);
}

/// Looks up a dialect's options, falling back to the default configuration.
pub fn dialect_options(name: &str) -> Arc<DialectOptions> {
    registry().get(name)
}
