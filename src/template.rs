//! Compiled template renderers.
//!
//! A template source compiles once into a [`Template`], a cheap-to-clone
//! renderer of a data mapping. Rendering HTML-escapes interpolated values.
//!
//! ```ignore
//! let page = Template::compile("views/welcome.hbs", "<h1>{{msg}}</h1>")?;
//! let data = Value::object([("msg", Value::from("Welcome"))]);
//! assert_eq!(page.render(&data)?, "<h1>Welcome</h1>");
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use handlebars::Handlebars;
use thiserror::Error;

use crate::error::LoadError;
use crate::namespace::Value;

/// Template compilation or rendering failure.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template syntax error")]
    Syntax(#[from] handlebars::TemplateError),

    #[error("template render error")]
    Render(#[from] handlebars::RenderError),
}

/// A compiled template, rendering a data mapping to text.
#[derive(Clone)]
pub struct Template {
    name: Arc<str>,
    registry: Arc<Handlebars<'static>>,
}

impl Template {
    /// Compile template source text.
    ///
    /// `name` identifies the template in error messages, usually its path.
    pub fn compile(name: impl Into<String>, source: &str) -> Result<Self, TemplateError> {
        let name: String = name.into();
        let mut registry = Handlebars::new();
        registry.register_template_string(&name, source)?;
        Ok(Self {
            name: name.into(),
            registry: Arc::new(registry),
        })
    }

    /// Read and compile a template file, named by its path.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::compile(path.to_string_lossy(), &source).map_err(|source| LoadError::Template {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render with `data` as the root context.
    pub fn render(&self, data: &Value) -> Result<String, TemplateError> {
        Ok(self.registry.render(&self.name, &data.to_json())?)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Template").field(&self.name).finish()
    }
}
