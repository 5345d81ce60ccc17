//! Values mounted in the namespace graph.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::node::{Callable, NodeRef};
use crate::error::CallError;

/// Any value a module can export.
///
/// Scalars and lists are plain data. Objects, functions, templates and
/// routers are all [`NodeRef`]s: shared member maps with an optional
/// callable capability.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Node(NodeRef),
}

impl Value {
    /// Build a plain object node from key/value pairs.
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Node(NodeRef::from_members(members))
    }

    /// Wrap a native function as a callable node.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self::Node(NodeRef::with_callable(Callable::Native(Function::new(f))))
    }

    /// Truthiness: `null`, `false`, zero, NaN and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::List(_) | Self::Node(_) => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Node(node) if node.is_callable() => "function",
            Self::Node(_) => "object",
        }
    }

    pub fn as_node(&self) -> Option<&NodeRef> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        self.as_node().is_some_and(NodeRef::is_callable)
    }

    /// Member lookup, `None` for anything that is not a node.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_node()?.get(key)
    }

    /// Invoke a callable value.
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        match self {
            Self::Node(node) => node.call(args),
            other => Err(CallError::NotCallable(other.type_name().to_string())),
        }
    }

    /// Convert to JSON.
    ///
    /// Callable nodes are dropped from objects and become `null` in lists,
    /// and a node reachable from itself is cut off as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        self.to_json_guarded(&mut FxHashSet::default())
    }

    fn to_json_guarded(&self, ancestors: &mut FxHashSet<usize>) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Int(n) => Json::from(*n),
            Self::Float(n) => serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number),
            Self::String(s) => Json::String(s.clone()),
            Self::List(items) => Json::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Self::Node(node) if node.is_callable() => Json::Null,
                        item => item.to_json_guarded(ancestors),
                    })
                    .collect(),
            ),
            Self::Node(node) => {
                if node.is_callable() || !ancestors.insert(node.addr()) {
                    return Json::Null;
                }
                let object = node
                    .members()
                    .into_iter()
                    .filter(|(_, value)| !value.is_callable())
                    .map(|(key, value)| (key, value.to_json_guarded(ancestors)))
                    .collect();
                ancestors.remove(&node.addr());
                Json::Object(object)
            }
        }
    }
}

impl PartialEq for Value {
    /// Structural for data, identity for nodes.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => (*a as f64) == *b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Node(a), Self::Node(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(","))
            }
            Self::Node(node) => write!(f, "[{}]", node.kind_label()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(map) => Self::object(map.into_iter().map(|(k, v)| (k, Self::from(v)))),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::String(s),
            toml::Value::Integer(n) => Self::Int(n),
            toml::Value::Float(n) => Self::Float(n),
            toml::Value::Boolean(b) => Self::Bool(b),
            toml::Value::Datetime(dt) => Self::String(dt.to_string()),
            toml::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => {
                Self::object(table.into_iter().map(|(k, v)| (k, Self::from(v))))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<NodeRef> for Value {
    fn from(node: NodeRef) -> Self {
        Self::Node(node)
    }
}

// ============================================================================
// Function
// ============================================================================

type NativeFn = dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync;

/// A registered native function.
#[derive(Clone)]
pub struct Function(Arc<NativeFn>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        (self.0)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Float(f64::NAN).is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(Value::List(Vec::new()).is_truthy());
        assert!(Value::object::<&str, _>([]).is_truthy());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::from(1.5).type_name(), "number");
        assert_eq!(Value::object([("a", Value::Null)]).type_name(), "object");
        assert_eq!(Value::function(|_| Ok(Value::Null)).type_name(), "function");
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": [true, 2.5], "mid": null}"#).unwrap();
        let value = Value::from(json);
        let node = value.as_node().unwrap();
        assert_eq!(node.keys(), ["zeta", "alpha", "mid"]);
        assert_eq!(node.get("zeta"), Some(Value::Int(1)));
        assert_eq!(
            node.get("alpha"),
            Some(Value::List(vec![Value::Bool(true), Value::Float(2.5)]))
        );
    }

    #[test]
    fn test_to_json_drops_functions() {
        let value = Value::object([
            ("name", Value::from("user")),
            ("get", Value::function(|_| Ok(Value::Null))),
        ]);
        assert_eq!(value.to_json(), serde_json::json!({ "name": "user" }));
    }

    #[test]
    fn test_to_json_cuts_cycles() {
        let node = NodeRef::new();
        node.set("me", Value::Node(node.clone()));
        node.set("n", Value::Int(1));
        assert_eq!(
            Value::Node(node).to_json(),
            serde_json::json!({ "me": null, "n": 1 })
        );
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::Float(42.0).to_string(), "42");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Int(-3).to_string(), "-3");
    }

    #[test]
    fn test_call_non_callable() {
        let err = Value::from("text").call(&[]).unwrap_err();
        assert!(matches!(err, CallError::NotCallable(name) if name == "string"));
    }
}
