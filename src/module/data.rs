//! Declarative data modules (JSON and TOML).

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::namespace::Value;

/// Formats a code file can be parsed from without a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
}

impl DataFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Read and parse a data module. Any top-level JSON value is accepted.
pub fn evaluate(path: &Path, format: DataFormat) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        DataFormat::Json => serde_json::from_str::<serde_json::Value>(&content)
            .map(Value::from)
            .map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            }),
        DataFormat::Toml => toml::from_str::<toml::Table>(&content)
            .map(|table| Value::from(toml::Value::Table(table)))
            .map_err(|source| LoadError::Toml {
                path: path.to_path_buf(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_json_module() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "user.json", r#"{"test": true, "value": 42}"#);
        let value = evaluate(&path, DataFormat::Json).unwrap();
        assert_eq!(value.get("test"), Some(Value::Bool(true)));
        assert_eq!(value.get("value"), Some(Value::Int(42)));
    }

    #[test]
    fn test_json_primitive_module() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "greeting.json", r#""hello""#);
        assert_eq!(evaluate(&path, DataFormat::Json).unwrap(), Value::from("hello"));
    }

    #[test]
    fn test_toml_module() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "limits.toml", "max = 10\n[retry]\nbackoff = 1.5\n");
        let value = evaluate(&path, DataFormat::Toml).unwrap();
        assert_eq!(value.get("max"), Some(Value::Int(10)));
        assert_eq!(
            value.get("retry").and_then(|r| r.get("backoff")),
            Some(Value::Float(1.5))
        );
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{ not json");
        let err = evaluate(&path, DataFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.toml", "key = ");
        let err = evaluate(&path, DataFormat::Toml).unwrap_err();
        assert!(matches!(err, LoadError::Toml { .. }));
    }
}
