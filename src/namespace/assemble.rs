//! Walking a slash-delimited name into nested namespace nodes.

use std::path::Path;

use super::leaf::load_leaf;
use super::node::NodeRef;
use super::value::Value;
use crate::error::LoadError;
use crate::module::ModuleLoader;
use crate::utils::camelize;

/// Install the file at `path` under `root` following `name`.
///
/// Every segment is camelized. Intermediate segments descend into existing
/// nodes; a missing or falsy slot gets a fresh router. A truthy non-node value
/// in an intermediate slot cannot hold children and fails the install.
pub fn install_at_path(
    root: &NodeRef,
    name: &str,
    path: &Path,
    is_index: bool,
    loader: &dyn ModuleLoader,
) -> Result<(), LoadError> {
    let (parents, leaf) = match name.rsplit_once('/') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, name),
    };

    let mut node = root.clone();
    for segment in parents.into_iter().flat_map(|p| p.split('/')) {
        let key = camelize(segment);
        node = match node.get(&key) {
            Some(Value::Node(child)) => child,
            Some(other) if other.is_truthy() => {
                return Err(LoadError::NotANamespace {
                    key: key.into_owned(),
                    found: other.type_name(),
                    path: path.to_path_buf(),
                });
            }
            _ => {
                let router = NodeRef::router();
                node.set(key, Value::Node(router.clone()));
                router
            }
        };
    }

    load_leaf(&node, &camelize(leaf), path, is_index, loader)
}
