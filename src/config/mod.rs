//! Application configuration from `nsmount.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section definitions
//! │   ├── load       # [load]
//! │   └── server     # [server]
//! ├── error          # ConfigError
//! ├── util           # Config file lookup
//! └── mod.rs         # AppConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                            |
//! |------------|----------------------------------------------------|
//! | `[load]`   | Namespace dirs, search roots, extension lists      |
//! | `[server]` | Host and port for applications serving the graph   |
//!
//! Every other table is kept as opaque settings, reachable through
//! [`AppConfig::setting`].

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{DEFAULT_DIRS, LoadConfig, ServerConfig};
use util::find_config_file;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::log;
use crate::utils::path::{normalize_path, resolve_dir};

/// Sections whose unknown keys are reported. Other tables are free-form.
const TYPED_SECTIONS: &[&str] = &["load", "server"];

/// Root configuration structure representing nsmount.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Absolute path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Application root directory, parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Loading settings
    #[serde(default)]
    pub load: LoadConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// The whole document, for opaque lookups (internal use only)
    #[serde(skip)]
    pub settings: toml::Table,
}

impl AppConfig {
    /// Load configuration, searching upward from the working directory.
    ///
    /// Without a config file, defaults apply and the working directory
    /// becomes the application root.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|err| ConfigError::Io(PathBuf::from("."), err))?;
        Self::load_from(config_name, &cwd)
    }

    /// [`load`](Self::load) with an explicit starting directory.
    pub fn load_from(config_name: &Path, start: &Path) -> Result<Self, ConfigError> {
        let mut config = match find_config_file(config_name, start) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => Self::default(),
        };

        let root = match config.config_path.parent() {
            Some(parent) if !config.config_path.as_os_str().is_empty() => parent.to_path_buf(),
            _ => start.to_path_buf(),
        };
        config.finalize(&root);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Paths stay as written; they are resolved when loading from disk.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting unknown fields of the typed sections.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let settings: toml::Table = toml::from_str(content)?;

        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let mut config: Self =
            serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                let path = path.to_string();
                let section = path.split('.').next().unwrap_or_default();
                if TYPED_SECTIONS.contains(&section) {
                    ignored.push(path);
                }
            })?;

        config.settings = settings;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve the root and every search directory to absolute paths.
    fn finalize(&mut self, root: &Path) {
        let root = normalize_path(root);
        if !self.config_path.as_os_str().is_empty() {
            self.config_path = normalize_path(&self.config_path);
        }
        self.load.search = self
            .load
            .search
            .iter()
            .map(|dir| resolve_dir(dir, &root))
            .collect();
        self.root = root;
    }

    /// Replace the configured search roots, resolving against `base`.
    ///
    /// Used for `--search` flags, which are relative to the working directory.
    pub fn override_search(&mut self, dirs: &[PathBuf], base: &Path) {
        if dirs.is_empty() {
            return;
        }
        self.load.search = dirs.iter().map(|dir| resolve_dir(dir, base)).collect();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.load.validate()
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Look up a dotted key in the raw config document.
    ///
    /// ```ignore
    /// config.setting("server.port")      // Some(Integer(3000)) if set in the file
    /// config.setting("database.url")     // free-form section
    /// ```
    pub fn setting(&self, key: &str) -> Option<&toml::Value> {
        let mut parts = key.split('.');
        let mut current = self.settings.get(parts.next()?)?;
        for part in parts {
            current = current.as_table()?.get(part)?;
        }
        Some(current)
    }
}

/// Parse config and panic on unknown typed fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AppConfig {
    let (parsed, ignored) = AppConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(matches!(
            AppConfig::from_str("[load\ndirs = []"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[load]\ndirz = [\"x\"]\n[database]\nurl = \"postgres://\"";
        let (_, ignored) = AppConfig::parse_with_ignored(content).unwrap();
        assert_eq!(ignored, ["load.dirz"]);
    }

    #[test]
    fn test_setting_lookup() {
        let config = test_parse_config(
            "[server]\nport = 8080\n[database]\nurl = \"postgres://localhost\"\n[database.pool]\nsize = 4",
        );
        assert_eq!(
            config.setting("database.url").and_then(toml::Value::as_str),
            Some("postgres://localhost")
        );
        assert_eq!(
            config.setting("database.pool.size").and_then(toml::Value::as_integer),
            Some(4)
        );
        assert_eq!(
            config.setting("server.port").and_then(toml::Value::as_integer),
            Some(8080)
        );
        assert!(config.setting("database.url.scheme").is_none());
        assert!(config.setting("missing").is_none());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(Path::new("nsmount-absent.toml"), dir.path()).unwrap();
        assert_eq!(config.root, normalize_path(dir.path()));
        assert_eq!(config.load.search, [normalize_path(dir.path())]);
        assert!(config.config_path.as_os_str().is_empty());
    }

    #[test]
    fn test_load_resolves_search_against_root() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("controllers");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join("nsmount.toml"),
            "[load]\nsearch = [\".\", \"vendor/shared\"]\n",
        )
        .unwrap();

        let config = AppConfig::load_from(Path::new("nsmount.toml"), &nested).unwrap();
        let root = normalize_path(dir.path());
        assert_eq!(config.root, root);
        assert_eq!(config.load.search, [root.clone(), root.join("vendor/shared")]);
    }

    #[test]
    fn test_load_rejects_invalid_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("nsmount.toml"), "[load]\ntemplate = [\".hbs\"]\n").unwrap();
        let result = AppConfig::load_from(Path::new("nsmount.toml"), dir.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_override_search() {
        let mut config = test_parse_config("");
        config.override_search(&[], Path::new("/work"));
        assert_eq!(config.load.search, [PathBuf::from(".")]);

        config.override_search(&[PathBuf::from("app"), PathBuf::from("/abs")], Path::new("/work"));
        assert_eq!(
            config.load.search,
            [PathBuf::from("/work/app"), PathBuf::from("/abs")]
        );
    }
}
