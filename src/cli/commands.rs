//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linktags")]
#[command(about = "Maintenance passes for an HTML-in-markdown link directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Content file or directory (overrides the configured `content`)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file to use instead of discovering linktags.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that rewrites content.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WriteArgs {
    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Copy each file to <name>.<timestamp>.bak before rewriting it
    #[arg(long)]
    pub backup: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive location, category, and username tags for every link
    Enrich {
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Repair underscores, missing type tags, and untagged links
    Fix {
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Report tag consistency problems
    Audit {
        /// Remove duplicate tags after confirmation
        #[arg(long)]
        fix: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Number of most-used tags to list
        #[arg(long, default_value_t = 20)]
        top: usize,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Check that links carry the tags their text and flags require
    Verify {
        /// Add missing tags after confirmation
        #[arg(long)]
        fix: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Sort links alphabetically inside each link grid
    Sort {
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Drop the "• location" suffix from link text
    Clean {
        #[command(flatten)]
        write: WriteArgs,
    },

    /// Export all links to CSV
    ExportCsv {
        /// Output file (default: configured csv_output)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Rewrite the youtubeMap table in the hover-menu script
    YoutubeMap {
        /// Script to update (default: configured hover_menu_script)
        #[arg(long, value_name = "PATH")]
        script: Option<PathBuf>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Report completeness: categories, countries, duplicates, thin tagging
    Analyze {
        /// Write the sorted username list (default path: configured usernames_output)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        usernames: Option<Option<PathBuf>>,
    },

    /// Show tag coverage
    Stats,

    /// Create linktags.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Content file or directory, relative to the project directory
        #[arg(long, value_name = "PATH")]
        content: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
