//! Command-line interface module.

mod args;
pub mod call;
pub mod files;
pub mod tree;

pub use args::{Cli, Commands};

use anyhow::{Context, Result};
use nsmount::{App, AppConfig};

/// Print the effective configuration as TOML.
pub fn print_config(config: &AppConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("failed to serialize config")?;
    if config.config_path.as_os_str().is_empty() {
        println!("# no config file found, showing defaults");
    } else {
        println!("# {}", config.config_path.display());
    }
    print!("{rendered}");
    Ok(())
}

/// Load every namespace, reporting the totals.
pub fn load_app(app: &App) -> Result<()> {
    let report = app.load_default().context("failed to load namespaces")?;
    nsmount::log!(
        "load";
        "mounted {} into {}",
        nsmount::utils::plural_count(report.files, "file"),
        nsmount::utils::plural_count(report.namespaces, "namespace")
    );
    Ok(())
}
