//! `call` command: invoke a mounted callable from the shell.

use anyhow::{Context, Result};
use nsmount::{App, Value};

pub fn call_path(app: &App, path: &str, args: &[String], pretty: bool) -> Result<()> {
    let args: Vec<Value> = args.iter().map(|arg| parse_arg(arg)).collect();
    let result = app
        .call(path, &args)
        .with_context(|| format!("failed to call `{path}`"))?;

    let json = result.to_json();
    let formatted = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    println!("{formatted}");
    Ok(())
}

/// JSON when it parses, otherwise the raw text.
fn parse_arg(arg: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(arg)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(arg))
}
