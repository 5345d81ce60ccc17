//! `files` command: show how discovered files are named.

use anyhow::{Result, bail};
use nsmount::App;
use owo_colors::OwoColorize;

pub fn list_files(app: &App, namespace: Option<&str>) -> Result<()> {
    if let Some(name) = namespace
        && !app.namespaces().iter().any(|ns| ns == name)
    {
        bail!("`{name}` is not a configured namespace directory");
    }

    let root = app.config_root();
    for mount in app.plan(&app.config().load.search) {
        if namespace.is_some_and(|name| name != mount.namespace) || mount.sets.is_empty() {
            continue;
        }
        println!("{}", mount.namespace.bold());
        for set in &mount.sets {
            for (path, name) in set.iter() {
                let shown = path.strip_prefix(root).unwrap_or(path);
                println!("  {} {} {}", name.cyan(), "<-".dimmed(), shown.display());
            }
        }
    }
    Ok(())
}
