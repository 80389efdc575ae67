//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// buzzcast - score trending news and publish a short post to X and Threads
#[derive(Parser, Debug)]
#[command(name = "buzzcast")]
#[command(about = "Score trending news and publish a short post to X and Threads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, score, generate and publish once
    Run {
        /// Do not call any platform API
        #[arg(long)]
        dry_run: bool,

        /// Platforms to publish to (comma-separated)
        #[arg(long, value_delimiter = ',')]
        platforms: Vec<String>,

        /// Skip the JSON backup
        #[arg(long)]
        no_backup: bool,
    },

    /// Print the ranked candidates
    Score {
        /// Maximum number of candidates to print
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Print the post for the top candidate without publishing
    Generate,

    /// Test platform credentials
    Check {
        /// Platforms to check (comma-separated)
        #[arg(long, value_delimiter = ',')]
        platforms: Vec<String>,
    },

    /// Validate text against platform limits
    Validate {
        /// Post text
        text: String,

        /// Platforms to validate against (comma-separated)
        #[arg(long, value_delimiter = ',')]
        platforms: Vec<String>,
    },
}
