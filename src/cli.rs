// src/cli.rs
//! CLI definitions for repo-ingest
//!
//! The command implementations live in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "repo-ingest")]
#[command(author, version)]
#[command(about = "Parse repository listings into canonical package records", long_about = None)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one listing file and print its records as JSON lines
    Parse {
        /// Listing file to parse
        file: PathBuf,

        /// Listing format (see `repo-ingest formats`)
        #[arg(short, long)]
        format: String,

        /// Source name reported to the transformer (default: file stem)
        #[arg(short, long)]
        source: Option<String>,

        /// Transformer rules file
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Ingest every source listed in a config file
    Ingest {
        /// Ingestion config file
        #[arg(short, long, default_value = "ingest.toml")]
        config: PathBuf,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Decompose RPM-style identifiers into their NEVRA fields
    Nevra {
        /// Identifiers such as `bash-5.2.26-3.fc40.x86_64.rpm`
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// List supported listing formats
    Formats,
}
