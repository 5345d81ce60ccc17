//! The application context: one root namespace graph and its configuration.
//!
//! An [`App`] owns the root node. Construction mounts an empty router per
//! configured namespace directory; loading fills those routers from every
//! search root, in order.
//!
//! ```ignore
//! let config = AppConfig::load(Path::new("nsmount.toml"))?;
//! let app = App::with_registry(config, registry);
//! app.load_default()?;
//! let page = app.call("views.welcome", &[data])?;
//! ```

use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::discover::discover_files;
use crate::error::{CallError, LoadError};
use crate::fileset::FileSet;
use crate::module::{Registry, SourceLoader};
use crate::namespace::{NodeRef, Value, load_file_sets};
use crate::utils::path::{reduce_common_prefix, strip_extensions};
use crate::utils::plural_count;
use crate::{debug, log};

/// Root member names that namespace directories may not take.
pub const RESERVED_NAMES: &[&str] = &["load", "console", "start", "express", "server"];

/// One namespace directory and its normalized file sets, one per search root
/// that contributed files.
#[derive(Debug, Clone)]
pub struct Mount {
    pub namespace: String,
    pub sets: Vec<FileSet>,
}

impl Mount {
    pub fn file_count(&self) -> usize {
        self.sets.iter().map(FileSet::len).sum()
    }
}

/// Outcome of a load pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Files installed.
    pub files: usize,
    /// Namespaces that received at least one file.
    pub namespaces: usize,
}

pub struct App {
    config: AppConfig,
    root: NodeRef,
    loader: SourceLoader,
    namespaces: Vec<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_registry(config, Registry::new())
    }

    /// Build the root graph with a router per configured namespace directory.
    pub fn with_registry(config: AppConfig, registry: Registry) -> Self {
        let loader = SourceLoader::new(config.load.extensions(), registry);
        let root = NodeRef::new();
        let mut namespaces = Vec::new();

        for name in &config.load.dirs {
            if RESERVED_NAMES.contains(&name.as_str()) {
                log!("warning"; "namespace `{}` is reserved, skipping", name);
                continue;
            }
            if root.contains(name) {
                continue;
            }
            root.set(name.as_str(), Value::Node(NodeRef::router()));
            namespaces.push(name.clone());
        }

        Self {
            config,
            root,
            loader,
            namespaces,
        }
    }

    /// Discover and normalize files for every namespace.
    ///
    /// Each search root yields its own file set, so names are reduced per
    /// root. Search roots without files for a namespace contribute no set.
    pub fn plan(&self, search_dirs: &[PathBuf]) -> Vec<Mount> {
        let extensions = self.loader.extensions();
        self.namespaces
            .iter()
            .map(|namespace| {
                let sets = search_dirs
                    .iter()
                    .map(|dir| discover_files(dir, namespace, extensions))
                    .filter(|files| !files.is_empty())
                    .map(|files| strip_extensions(reduce_common_prefix(FileSet::from_paths(files))))
                    .collect();
                Mount {
                    namespace: namespace.clone(),
                    sets,
                }
            })
            .collect()
    }

    /// Load every namespace from `search_dirs`. Later roots win on collisions.
    pub fn load(&self, search_dirs: &[PathBuf]) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport::default();
        for mount in self.plan(search_dirs) {
            if mount.sets.is_empty() {
                continue;
            }
            let Some(node) = self.namespace(&mount.namespace) else {
                continue;
            };
            let files = load_file_sets(&node, &mount.sets, &self.loader)?;
            debug!("load"; "{} into {}", plural_count(files, "file"), mount.namespace);
            report.files += files;
            report.namespaces += 1;
        }
        Ok(report)
    }

    /// Load from the configured search roots.
    pub fn load_default(&self) -> Result<LoadReport, LoadError> {
        self.load(&self.config.load.search)
    }

    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Names of the mounted namespace directories, in configured order.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn namespace(&self, name: &str) -> Option<NodeRef> {
        self.root.get(name)?.as_node().cloned()
    }

    /// Resolve a dotted path such as `controllers.admin.users`.
    pub fn lookup(&self, path: &str) -> Option<Value> {
        self.root.lookup(path.split('.'))
    }

    /// Invoke the callable at a dotted path.
    pub fn call(&self, path: &str, args: &[Value]) -> Result<Value, CallError> {
        let target = self
            .lookup(path)
            .ok_or_else(|| CallError::NotFound(path.to_string()))?;
        if !target.is_callable() {
            return Err(CallError::NotCallable(path.to_string()));
        }
        target.call(args)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_root(&self) -> &Path {
        self.config.get_root()
    }

    /// Dotted lookup into the raw configuration.
    pub fn setting(&self, key: &str) -> Option<&toml::Value> {
        self.config.setting(key)
    }
}
