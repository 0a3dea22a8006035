//! Clap argument types and validation.

use clap::Parser;
use std::path::PathBuf;

/// AI code review that files the findings as tracker issues.
#[derive(Parser, Debug)]
#[command(name = "issuemill", version = issuemill::constants::VERSION)]
pub struct Cli {
    /// Root directory to evaluate. Prompted interactively when absent.
    pub path: Option<PathBuf>,

    /// Tracker team that will own the created issues.
    #[arg(long, env = issuemill::constants::ENV_TEAM)]
    pub team: Option<String>,

    /// File every extracted issue without asking.
    #[arg(long, short = 'y', default_value_t = false)]
    pub yes: bool,

    /// Override the configured LLM model id.
    #[arg(long)]
    pub model: Option<String>,

    /// Additional directory names to exclude from the scan.
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub exclude_dir: Vec<String>,

    /// Additional file names to exclude from the scan.
    #[arg(long, value_name = "NAME", value_delimiter = ',')]
    pub exclude_file: Vec<String>,

    /// Additional file-name suffixes to exclude from the scan.
    #[arg(long, value_name = "SUFFIX", value_delimiter = ',')]
    pub exclude_type: Vec<String>,

    /// Suppress review text and per-issue echo. Only outcomes and errors
    /// are shown.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}
