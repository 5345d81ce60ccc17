//! Native module registration.
//!
//! Native modules stand in for executable code files: the host registers a
//! factory under a relative path key, and any code file whose extensionless
//! path ends with that key loads the factory's value.
//!
//! ```ignore
//! let registry = Registry::new()
//!     .module("controllers/users", || Value::object([
//!         ("list", Value::function(|_| Ok(Value::from("users list")))),
//!     ]));
//! // controllers/users.json -> factory value
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::namespace::Value;

type Factory = Arc<dyn Fn() -> Value + Send + Sync>;

/// Table of native module factories keyed by relative path.
#[derive(Clone, Default)]
pub struct Registry {
    modules: Vec<(PathBuf, Factory)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`register`](Self::register).
    pub fn module<F>(mut self, key: impl AsRef<Path>, factory: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.register(key, factory);
        self
    }

    /// Register a factory. Registering the same key again replaces it.
    pub fn register<F>(&mut self, key: impl AsRef<Path>, factory: F)
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        let key = key.as_ref().to_path_buf();
        self.modules.retain(|(existing, _)| *existing != key);
        self.modules.push((key, Arc::new(factory)));
    }

    /// Fresh value for the most specific key matching `path`.
    ///
    /// A key matches when the path, extension removed, ends with all of the
    /// key's components.
    pub fn resolve(&self, path: &Path) -> Option<Value> {
        let stem = path.with_extension("");
        self.modules
            .iter()
            .filter(|(key, _)| stem.ends_with(key))
            .max_by_key(|(key, _)| key.components().count())
            .map(|(_, factory)| factory())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.modules.iter().map(|(key, _)| key))
            .finish()
    }
}
