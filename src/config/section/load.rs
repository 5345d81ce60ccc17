//! `[load]` section configuration.
//!
//! Which namespace directories exist, where to look for them, and which
//! file extensions are loaded as code or as templates.
//!
//! # Example
//!
//! ```toml
//! [load]
//! dirs = ["controllers", "models", "views"]
//! search = [".", "~/shared/app"]
//! code = ["json", "toml"]
//! template = ["hbs"]
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::module::Extensions;

/// Namespace directories mounted when no `dirs` list is configured.
pub const DEFAULT_DIRS: &[&str] = &[
    "logs",
    "db",
    "templates",
    "views",
    "lib",
    "helpers",
    "settings",
    "plugins",
    "schemas",
    "models",
    "managers",
    "orchestrators",
    "controllers",
    "clients",
    "routers",
    "routes",
    "events",
    "jobs",
    "queues",
    "workers",
];

/// Loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Namespace directory names, each mounted as a top-level router.
    pub dirs: Vec<String>,

    /// Search roots, relative to the config file's directory.
    /// Later roots win on colliding names.
    pub search: Vec<PathBuf>,

    /// Extensions loaded as code modules (without the dot).
    pub code: Vec<String>,

    /// Extensions compiled as templates (without the dot).
    pub template: Vec<String>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        let Extensions { code, template } = Extensions::default();
        Self {
            dirs: DEFAULT_DIRS.iter().map(|d| d.to_string()).collect(),
            search: vec![PathBuf::from(".")],
            code,
            template,
        }
    }
}

impl LoadConfig {
    pub fn extensions(&self) -> Extensions {
        Extensions {
            code: self.code.clone(),
            template: self.template.clone(),
        }
    }

    /// Check names and extension lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for dir in &self.dirs {
            if dir.is_empty() || dir.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "[load.dirs] `{dir}` must be a single directory name"
                )));
            }
        }

        if self.search.is_empty() {
            return Err(ConfigError::Validation(
                "[load.search] needs at least one directory".into(),
            ));
        }

        for (field, list) in [("code", &self.code), ("template", &self.template)] {
            for ext in list {
                if ext.is_empty() || ext.starts_with('.') {
                    return Err(ConfigError::Validation(format!(
                        "[load.{field}] `{ext}` must be an extension without the leading dot"
                    )));
                }
            }
        }

        if let Some(ext) = self.code.iter().find(|ext| self.template.contains(ext)) {
            return Err(ConfigError::Validation(format!(
                "[load] `{ext}` is listed as both a code and a template extension"
            )));
        }

        Ok(())
    }
}
