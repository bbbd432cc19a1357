//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::catalog::ContentKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio content catalog CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Catalog file path (relative to project root), overrides `[catalog].path`
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Print JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rank records for a "more like this" section
    Recommend {
        /// Which collection to rank
        #[arg(value_enum)]
        kind: ContentKind,

        /// Slug of the page being viewed, left out of the result
        #[arg(short, long)]
        exclude: Option<String>,

        /// Maximum number of records (default: `[recommend].limit`, negative means none)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Only rank records carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print every rankable record in priority order
    List {
        #[arg(value_enum)]
        kind: ContentKind,

        /// Only list records carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Split metric display strings into prefix, number and suffix
    Metric {
        /// Display strings such as "$184.4M" or "<10%"
        #[arg(required_unless_present = "item", conflicts_with = "item")]
        values: Vec<String>,

        /// Parse the metrics of this catalog record instead
        #[arg(short, long)]
        item: Option<String>,

        /// Collection the `--item` slug belongs to
        #[arg(short, long, value_enum, default_value = "projects")]
        kind: ContentKind,

        /// Also print counter frames from 0 to the value (capped at 240)
        #[arg(short, long, default_value_t = 0)]
        frames: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Report records that will be dropped or rendered oddly
    Check {
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Cli {
    /// Whether the command reads the catalog file.
    pub const fn needs_catalog(&self) -> bool {
        match &self.command {
            Commands::Recommend { .. } | Commands::List { .. } | Commands::Check { .. } => true,
            Commands::Metric { item, .. } => item.is_some(),
        }
    }
}
