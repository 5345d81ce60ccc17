//! Shared namespace nodes.
//!
//! A [`NodeRef`] is a handle to an ordered member map plus an optional
//! [`Callable`] capability. Handles are cheap to clone and all clones see
//! the same members, so a router obtained before a load pass observes
//! members installed during it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use super::value::{Function, Value};
use crate::error::CallError;
use crate::template::Template;

/// Member key that routers forward calls to.
pub const INDEX_KEY: &str = "index";

/// What happens when a node is called.
#[derive(Debug, Clone)]
pub enum Callable {
    /// Auto-vivified namespace: forwards to the `index` member at call time.
    Router,
    Native(Function),
    Template(Template),
}

#[derive(Debug, Default)]
struct Node {
    members: IndexMap<String, Value>,
    callable: Option<Callable>,
}

/// Shared handle to a namespace node.
#[derive(Clone, Default)]
pub struct NodeRef(Arc<RwLock<Node>>);

impl NodeRef {
    /// Plain object node with no members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty router node.
    pub fn router() -> Self {
        Self::with_callable(Callable::Router)
    }

    pub fn with_callable(callable: Callable) -> Self {
        Self(Arc::new(RwLock::new(Node {
            members: IndexMap::new(),
            callable: Some(callable),
        })))
    }

    pub fn from_members<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let members = members.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self(Arc::new(RwLock::new(Node {
            members,
            callable: None,
        })))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.read().members.get(key).cloned()
    }

    /// Set a member, returning the value it replaced.
    pub fn set(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.write().members.insert(key.into(), value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.read().members.contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.0.read().members.keys().cloned().collect()
    }

    /// Snapshot of all members in insertion order.
    pub fn members(&self) -> Vec<(String, Value)> {
        self.0
            .read()
            .members
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.read().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().members.is_empty()
    }

    pub fn is_callable(&self) -> bool {
        self.0.read().callable.is_some()
    }

    pub fn is_router(&self) -> bool {
        matches!(self.0.read().callable, Some(Callable::Router))
    }

    /// Short label for display: `router`, `function`, `template` or `object`.
    pub fn kind_label(&self) -> &'static str {
        match self.0.read().callable {
            Some(Callable::Router) => "router",
            Some(Callable::Native(_)) => "function",
            Some(Callable::Template(_)) => "template",
            None => "object",
        }
    }

    /// Shallow-copy every member of `source` onto this node.
    ///
    /// Same-named members are overwritten. Copying a node onto itself is a no-op.
    pub fn assign_from(&self, source: &NodeRef) {
        if self.ptr_eq(source) {
            return;
        }
        let members = source.members();
        self.0.write().members.extend(members);
    }

    /// Invoke the node.
    ///
    /// Routers resolve `index` when called, not when installed. A router
    /// without a callable `index` returns `false`.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        // Clone out so no lock is held while user code runs.
        let callable = self.0.read().callable.clone();
        match callable {
            Some(Callable::Router) => match self.get(INDEX_KEY) {
                Some(Value::Node(index)) if index.is_callable() => index.call(args),
                _ => Ok(Value::Bool(false)),
            },
            Some(Callable::Native(function)) => function.call(args),
            Some(Callable::Template(template)) => {
                let data = args.first().cloned().unwrap_or_default();
                Ok(Value::String(template.render(&data)?))
            }
            None => Err(CallError::NotCallable(self.kind_label().to_string())),
        }
    }

    /// Walk exact member keys.
    pub fn lookup<'a, I>(&self, keys: I) -> Option<Value>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = Value::Node(self.clone());
        for key in keys {
            current = current.get(key)?;
        }
        Some(current)
    }

    #[inline]
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Stable identity while the node is alive, for cycle detection.
    #[inline]
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl fmt::Debug for NodeRef {
    // Keys only: nodes may reference each other.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("kind", &self.kind_label())
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(text: &'static str) -> Value {
        Value::function(move |_| Ok(Value::from(text)))
    }

    #[test]
    fn test_router_without_index_is_falsy() {
        let router = NodeRef::router();
        assert_eq!(router.call(&[]).unwrap(), Value::Bool(false));

        router.set(INDEX_KEY, Value::object([("shared", Value::from("data"))]));
        assert_eq!(router.call(&[]).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_router_binds_index_late() {
        let router = NodeRef::router();
        let handle = router.clone();
        router.set(INDEX_KEY, constant("home"));
        assert_eq!(handle.call(&[]).unwrap(), Value::from("home"));
    }

    #[test]
    fn test_router_handle_keeps_own_index_after_slot_replaced() {
        let router = NodeRef::router();
        router.set(INDEX_KEY, constant("original"));
        let parent = NodeRef::from_members([("admin", Value::Node(router.clone()))]);

        let replacement = NodeRef::from_members([(INDEX_KEY, constant("replacement"))]);
        parent.set("admin", Value::Node(replacement));

        // The handle resolves `index` on itself, not on the parent's slot.
        assert_eq!(router.call(&[]).unwrap(), Value::from("original"));
        assert_eq!(
            parent.lookup(["admin", INDEX_KEY]).unwrap().call(&[]).unwrap(),
            Value::from("replacement")
        );
        assert!(!parent.get("admin").unwrap().is_callable());
    }

    #[test]
    fn test_router_forwards_arguments() {
        let router = NodeRef::router();
        router.set(
            INDEX_KEY,
            Value::function(|args| Ok(Value::from(format!("user {}", args[0])))),
        );
        assert_eq!(
            router.call(&[Value::from("123")]).unwrap(),
            Value::from("user 123")
        );
    }

    #[test]
    fn test_nested_router_chain() {
        let outer = NodeRef::router();
        let inner = NodeRef::router();
        inner.set(INDEX_KEY, constant("deep"));
        outer.set(INDEX_KEY, Value::Node(inner));
        assert_eq!(outer.call(&[]).unwrap(), Value::from("deep"));
    }

    #[test]
    fn test_plain_node_is_not_callable() {
        let node = NodeRef::new();
        assert!(matches!(node.call(&[]), Err(CallError::NotCallable(_))));
    }

    #[test]
    fn test_assign_from_overwrites() {
        let target = NodeRef::from_members([("existing", Value::from("value")), ("shared", Value::Int(1))]);
        let source = NodeRef::from_members([("shared", Value::from("data"))]);
        target.assign_from(&source);
        assert_eq!(target.get("existing"), Some(Value::from("value")));
        assert_eq!(target.get("shared"), Some(Value::from("data")));
    }

    #[test]
    fn test_assign_from_self_is_noop() {
        let node = NodeRef::from_members([("a", Value::Int(1))]);
        node.assign_from(&node.clone());
        assert_eq!(node.len(), 1);
    }

    #[test]
    fn test_lookup() {
        let leaf = Value::object([("action", constant("ok"))]);
        let root = NodeRef::from_members([("admin", Value::object([("users", leaf)]))]);
        let action = root.lookup(["admin", "users", "action"]).unwrap();
        assert_eq!(action.call(&[]).unwrap(), Value::from("ok"));
        assert!(root.lookup(["admin", "missing"]).is_none());
    }

    #[test]
    fn test_template_node_renders_first_argument() {
        let template = Template::compile("t", "<h1>{{msg}}</h1>").unwrap();
        let node = NodeRef::with_callable(Callable::Template(template));
        let data = Value::object([("msg", Value::from("Welcome"))]);
        assert_eq!(node.call(&[data]).unwrap(), Value::from("<h1>Welcome</h1>"));
    }
}
