//! Installing a single loaded file at its final key.

use std::path::Path;

use super::node::{Callable, NodeRef};
use super::value::Value;
use crate::debug;
use crate::error::LoadError;
use crate::module::{ModuleLoader, SourceKind};

/// Load `path` and install it at `node[key]`.
///
/// Templates are compiled into callable nodes. Code files are evaluated and
/// installed as-is; when `is_index` is set, the value's members are also
/// shallow-copied onto `node` itself, replacing same-named members.
pub fn load_leaf(
    node: &NodeRef,
    key: &str,
    path: &Path,
    is_index: bool,
    loader: &dyn ModuleLoader,
) -> Result<(), LoadError> {
    match loader.source_kind(path) {
        Some(SourceKind::Template) => {
            let template = loader.compile_template(path)?;
            node.set(key, Value::Node(NodeRef::with_callable(Callable::Template(template))));
        }
        Some(SourceKind::Code) => {
            let value = loader.evaluate(path)?;
            node.set(key, value.clone());
            if is_index && let Value::Node(module) = &value {
                debug!("mount"; "splicing {} member(s) of {}", module.len(), path.display());
                node.assign_from(module);
            }
        }
        None => {
            return Err(LoadError::Unsupported {
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
