//! CLI argument parsing.
//!
//! # Usage
//!
//! ```bash
//! tablero show leaderboard.json --family qwen --sort math --baseline base
//! tablero tasks leaderboard.json --domain math --tag math --tag-mode exclusive
//! tablero info leaderboard.json --format json
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::filter::{TagMode, SIZE_STOP_LABELS};
use crate::schema::{BaselineKind, Domain};

/// Tablero: model-evaluation leaderboard viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "tablero")]
#[command(version)]
#[command(about = "Filter, sort, and rank model evaluation scores from a leaderboard JSON file")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except the rendered table
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the summary leaderboard table
    Show(ShowArgs),

    /// Render the detailed per-task table for one domain
    Tasks(TasksArgs),

    /// Display dataset information
    Info(InfoArgs),
}

/// Arguments for the show command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Sort column (name, tags, year, overall, general, math, code, reasoning)
    #[arg(long, default_value = "overall")]
    pub sort: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the tasks command
#[derive(Parser, Debug, Clone)]
pub struct TasksArgs {
    /// Task domain to detail (general, math, code, reasoning)
    #[arg(short, long)]
    pub domain: Domain,

    /// Sort column (name, tags, average, efficiency, or a task column as
    /// `task` or `task:metric`)
    #[arg(long, default_value = "average")]
    pub sort: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    /// Path to the leaderboard JSON file
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Filter options shared between show and tasks.
#[derive(Parser, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the leaderboard JSON file
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Model family to display (defaults to the first family in the file)
    #[arg(short, long)]
    pub family: Option<String>,

    /// Case-insensitive substring search on record names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by tag; repeat for multiple tags
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Tag matching mode (include, exclusive)
    #[arg(long, default_value = "include")]
    pub tag_mode: TagMode,

    /// Lower size bucket (0, 1K, 10K, 50K, 100K, 500K, 1M)
    #[arg(long, value_name = "BUCKET")]
    pub min_size: Option<SizeBucket>,

    /// Upper size bucket (1K, 10K, 50K, 100K, 500K, 1M, inf)
    #[arg(long, value_name = "BUCKET")]
    pub max_size: Option<SizeBucket>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Baseline for score deltas (base, instruct)
    #[arg(short, long)]
    pub baseline: Option<BaselineKind>,

    /// Output format (text, markdown, json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// A stop on the size slider, parsed from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBucket(pub usize);

impl FromStr for SizeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        let index = SIZE_STOP_LABELS.iter().position(|label| {
            label.eq_ignore_ascii_case(normalized)
                || (*label == "∞" && normalized.eq_ignore_ascii_case("inf"))
        });
        index.map(SizeBucket).ok_or_else(|| {
            format!("Unknown size bucket: {s}. Valid buckets: 0, 1K, 10K, 50K, 100K, 500K, 1M, inf")
        })
    }
}

/// Output format for rendered tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, markdown, json"
            )),
        }
    }
}

impl FromStr for TagMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "include" => Ok(TagMode::Include),
            "exclusive" => Ok(TagMode::Exclusive),
            _ => Err(format!("Unknown tag mode: {s}. Valid modes: include, exclusive")),
        }
    }
}

/// Parse CLI arguments from an iterator (testable entry point).
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
