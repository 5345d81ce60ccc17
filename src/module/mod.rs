//! Module sources: turning discovered files into values.
//!
//! # Source kinds
//!
//! | Kind       | Default extensions | Becomes                           |
//! |------------|--------------------|-----------------------------------|
//! | `Code`     | `json`, `toml`     | registry value, or parsed data    |
//! | `Template` | `hbs`              | callable [`Template`] node        |
//!
//! Code files are never executed. A code file either matches a native
//! module in the [`Registry`] or is parsed as a declarative data module.

mod data;
mod registry;

use std::ffi::OsStr;
use std::path::Path;

use crate::error::LoadError;
use crate::namespace::Value;
use crate::template::Template;

pub use data::DataFormat;
pub use registry::Registry;

/// How a source file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Code,
    Template,
}

/// The seam between the namespace core and file evaluation.
pub trait ModuleLoader {
    /// Classify a file, `None` if it should not be loaded at all.
    fn source_kind(&self, path: &Path) -> Option<SourceKind>;

    /// Produce the exported value of a code file.
    fn evaluate(&self, path: &Path) -> Result<Value, LoadError>;

    /// Read and compile a template file.
    fn compile_template(&self, path: &Path) -> Result<Template, LoadError> {
        Template::from_file(path)
    }
}

/// Extension lists (without the leading dot) per source kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    pub code: Vec<String>,
    pub template: Vec<String>,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            code: vec!["json".into(), "toml".into()],
            template: vec!["hbs".into()],
        }
    }
}

impl Extensions {
    pub fn kind_of(&self, path: &Path) -> Option<SourceKind> {
        let ext = path.extension().and_then(OsStr::to_str)?;
        if self.code.iter().any(|e| e == ext) {
            Some(SourceKind::Code)
        } else if self.template.iter().any(|e| e == ext) {
            Some(SourceKind::Template)
        } else {
            None
        }
    }
}

/// Default loader: native registry first, then data modules.
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    extensions: Extensions,
    registry: Registry,
}

impl SourceLoader {
    pub fn new(extensions: Extensions, registry: Registry) -> Self {
        Self {
            extensions,
            registry,
        }
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl ModuleLoader for SourceLoader {
    fn source_kind(&self, path: &Path) -> Option<SourceKind> {
        self.extensions.kind_of(path)
    }

    fn evaluate(&self, path: &Path) -> Result<Value, LoadError> {
        if let Some(value) = self.registry.resolve(path) {
            return Ok(value);
        }
        let format = path
            .extension()
            .and_then(OsStr::to_str)
            .and_then(DataFormat::from_extension)
            .ok_or_else(|| LoadError::Unregistered {
                path: path.to_path_buf(),
            })?;
        data::evaluate(path, format)
    }
}
