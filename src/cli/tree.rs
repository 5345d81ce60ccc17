//! `tree` command: print the loaded namespace graph.

use std::fmt::Write;

use anyhow::{Result, bail};
use nsmount::{App, Value};
use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;

pub fn print_tree(app: &App, namespace: Option<&str>) -> Result<()> {
    let mut out = String::new();
    match namespace {
        Some(name) => {
            let Some(node) = app.lookup(name) else {
                bail!("nothing is mounted at `{name}`");
            };
            render_entry(&mut out, name, &node, "", true, &mut FxHashSet::default());
        }
        None => {
            let mut seen = FxHashSet::default();
            let names = app.namespaces();
            for (i, name) in names.iter().enumerate() {
                if let Some(node) = app.namespace(name) {
                    let value = Value::Node(node);
                    render_entry(&mut out, name, &value, "", i + 1 == names.len(), &mut seen);
                }
            }
        }
    }
    print!("{out}");
    Ok(())
}

/// Render one member and, for nodes, its children.
///
/// `seen` holds nodes on the current branch so shared or cyclic nodes
/// print once per branch.
fn render_entry(
    out: &mut String,
    name: &str,
    value: &Value,
    prefix: &str,
    last: bool,
    seen: &mut FxHashSet<usize>,
) {
    let branch = if last { "└── " } else { "├── " };
    let _ = writeln!(out, "{prefix}{branch}{} {}", name.bold(), label(value));

    let Value::Node(node) = value else { return };
    if !seen.insert(node.addr()) {
        return;
    }

    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    let members = node.members();
    for (i, (key, child)) in members.iter().enumerate() {
        render_entry(out, key, child, &child_prefix, i + 1 == members.len(), seen);
    }
    seen.remove(&node.addr());
}

fn label(value: &Value) -> String {
    match value {
        Value::Node(node) => match node.kind_label() {
            "router" => "(router)".blue().to_string(),
            "template" => "(template)".magenta().to_string(),
            "function" => "(function)".green().to_string(),
            kind => format!("({kind})").dimmed().to_string(),
        },
        Value::String(s) => format!("= {s:?}").dimmed().to_string(),
        other => format!("= {other}").dimmed().to_string(),
    }
}
