//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Mount module directories as a namespace graph
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nsmount.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "nsmount.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Search root to load from (repeatable, overrides [load].search)
    #[arg(short, long = "search", global = true, value_hint = clap::ValueHint::DirPath)]
    pub search: Vec<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and print the namespace graph
    #[command(visible_alias = "t")]
    Tree {
        /// Only print this namespace (e.g. `controllers`)
        namespace: Option<String>,
    },

    /// List discovered files with their namespace names
    #[command(visible_alias = "f")]
    Files {
        /// Only list this namespace
        namespace: Option<String>,
    },

    /// Load, then invoke a callable and print the result as JSON
    #[command(visible_alias = "c")]
    Call {
        /// Dotted path of the callable (e.g. `views.error`)
        path: String,

        /// Arguments, each parsed as JSON or taken as a plain string
        args: Vec<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the effective configuration
    Config,
}
