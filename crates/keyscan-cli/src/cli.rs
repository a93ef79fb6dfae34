//! Command-line argument types

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use keyscan_core::digest::{DEFAULT_DIGEST_DIR, DEFAULT_REPORT_PATH};

/// Default `--keywords` value of the digest command
pub const DEFAULT_KEYWORDS_ARG: &str = "protocol,SOP,process,naming";

#[derive(Parser)]
#[command(name = "keyscan")]
#[command(author, version, about = "Keyword audit of digests and nested archives")]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append keyword hits from thread digest tables to a CSV report
    Digest {
        /// Directory containing PR<n>_THREAD_DIGEST.md files
        #[arg(long, env = "KEYSCAN_DIGEST_DIR", default_value = DEFAULT_DIGEST_DIR)]
        digest_dir: PathBuf,

        /// CSV file to append matches to
        #[arg(long, env = "KEYSCAN_REPORT", default_value = DEFAULT_REPORT_PATH)]
        report: PathBuf,

        /// Comma-separated keywords; the first listed wins when several match
        #[arg(long, env = "KEYSCAN_KEYWORDS", default_value = DEFAULT_KEYWORDS_ARG)]
        keywords: String,
    },

    /// Walk the current directory and nested zips, rewriting walk_report.csv
    Walk,
}
