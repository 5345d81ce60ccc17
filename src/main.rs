//! nsmount - mount module directories as a namespace graph.

mod cli;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use nsmount::{App, AppConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    nsmount::logger::set_verbose(cli.verbose);

    let mut config = AppConfig::load(&cli.config)?;
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    config.override_search(&cli.search, &cwd);

    match &cli.command {
        Commands::Config => cli::print_config(&config),
        Commands::Files { namespace } => {
            let app = App::new(config);
            cli::files::list_files(&app, namespace.as_deref())
        }
        Commands::Tree { namespace } => {
            let app = App::new(config);
            cli::load_app(&app)?;
            cli::tree::print_tree(&app, namespace.as_deref())
        }
        Commands::Call { path, args, pretty } => {
            let app = App::new(config);
            cli::load_app(&app)?;
            cli::call::call_path(&app, path, args, *pretty)
        }
    }
}
