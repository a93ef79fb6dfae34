//! keyscan: Keyword audit of digests and nested archives

use std::path::Path;

use clap::Parser;
use keyscan_cli::commands;
use keyscan_cli::logging::setup_logging;
use keyscan_cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Digest {
            digest_dir,
            report,
            keywords,
        } => {
            commands::digest::run(&digest_dir, &report, &keywords)?;
        }
        Commands::Walk => {
            commands::walk::run(Path::new("."))?;
        }
    }

    Ok(())
}
