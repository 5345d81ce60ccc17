//! Error types for loading and invoking mounted modules.

use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateError;

/// A load pass failed on a single file.
///
/// Never retried or swallowed: the first error aborts the pass and is
/// returned to the caller of [`App::load`](crate::App::load).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error when reading `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON module `{path}`")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed TOML module `{path}`")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("malformed template `{path}`")]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("`{path}` has no configured code or template extension")]
    Unsupported { path: PathBuf },

    #[error("no module registered for `{path}`")]
    Unregistered { path: PathBuf },

    #[error("cannot mount `{path}`: `{key}` already holds a {found} value")]
    NotANamespace {
        key: String,
        found: &'static str,
        path: PathBuf,
    },
}

/// Invoking a mounted value failed.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("`{0}` is not callable")]
    NotCallable(String),

    #[error("nothing is mounted at `{0}`")]
    NotFound(String),

    #[error("template render failed")]
    Render(#[from] TemplateError),

    #[error("{0}")]
    Native(String),
}

impl CallError {
    /// Error raised from inside a registered native function.
    pub fn native(message: impl Into<String>) -> Self {
        Self::Native(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::Unsupported {
            path: PathBuf::from("/srv/models/user.yaml"),
        };
        assert!(err.to_string().contains("/srv/models/user.yaml"));

        let err = LoadError::NotANamespace {
            key: "admin".into(),
            found: "string",
            path: PathBuf::from("/srv/controllers/admin/users.json"),
        };
        let display = err.to_string();
        assert!(display.contains("`admin`"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_call_error_native() {
        let err = CallError::native("user not found");
        assert_eq!(err.to_string(), "user not found");
    }
}
