// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Records go to stdout, logs to stderr
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            file,
            format,
            source,
            rules,
            pretty,
        } => commands::cmd_parse(&file, &format, source.as_deref(), rules.as_deref(), pretty),
        Commands::Ingest { config, pretty } => commands::cmd_ingest(&config, pretty),
        Commands::Nevra { identifiers } => commands::cmd_nevra(&identifiers),
        Commands::Formats => {
            commands::cmd_formats();
            Ok(())
        }
    }
}
