//! Command line argument parsing for the apifinder CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// apifinder - search a catalog of third-party APIs
#[derive(Parser, Debug, Clone)]
#[command(name = "apifinder")]
#[command(about = "Tag, rank and interactively search a catalog of third-party APIs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ApiFinderArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Category taxonomy file (JSON object of category to synonym list)
    #[arg(long, value_name = "TAXONOMY_FILE", env = "APIFINDER_TAXONOMY", global = true)]
    pub taxonomy: Option<PathBuf>,

    /// Configuration file (JSON) overriding weights, tag and search settings
    #[arg(short, long, value_name = "CONFIG_FILE", env = "APIFINDER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ApiFinderArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Synthesize search tags for a catalog and write it as JSON
    Enrich(EnrichArgs),

    /// Show the tags synthesized for one category and description
    Tags(TagsArgs),

    /// Rank a catalog against a single query
    Search(SearchArgs),

    /// Read queries from stdin, one line per input change, with debouncing
    Interactive(InteractiveArgs),
}

/// Arguments for enriching a catalog
#[derive(Parser, Debug, Clone)]
pub struct EnrichArgs {
    /// Catalog file (.csv or JSON)
    #[arg(value_name = "CATALOG")]
    pub input: PathBuf,

    /// Output file for the enriched JSON catalog (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Arguments for tag synthesis
#[derive(Parser, Debug, Clone)]
pub struct TagsArgs {
    /// Entry category
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Entry description
    #[arg(value_name = "DESCRIPTION", default_value = "")]
    pub description: String,
}

/// Arguments for a one-shot search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Catalog file (.csv or JSON)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return (default: configured result limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show per-field score contributions
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for interactive search
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Catalog file (.csv or JSON)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Debounce delay in milliseconds (default: configured delay)
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
