//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Ordered taxonomy trees: slug paths, lookups and navigation markup
#[derive(Parser, Debug)]
#[command(name = "taxonomy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the taxonomy as nested list markup
    Render {
        /// Taxonomy document (JSON)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// List container tag
        #[arg(long)]
        outer_tag: Option<String>,

        /// Item tag
        #[arg(long)]
        inner_tag: Option<String>,

        /// Link prefix
        #[arg(long)]
        start_path: Option<String>,
    },

    /// Print the ancestor path of a node
    Path {
        /// Taxonomy document (JSON)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Node id
        id: String,
    },

    /// Resolve a slug path (e.g. /news/local) to a node id
    Resolve {
        /// Taxonomy document (JSON)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Slug path
        path: String,
    },

    /// Print a node as JSON
    Find {
        /// Taxonomy document (JSON)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Node id
        id: String,
    },

    /// Show the taxonomy as a tree
    Show {
        /// Taxonomy document (JSON)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show {
        /// Directory with a local .taxonomy.toml
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Print a commented template config
    Template,

    /// Show config file locations
    Path,
}
