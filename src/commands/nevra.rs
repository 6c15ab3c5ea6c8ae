// src/commands/nevra.rs
//! Identifier inspection and format listing commands

use anyhow::{Context, Result};
use repo_ingest::ListingFormat;
use repo_ingest::nevra::{Nevra, strip_package_suffix};
use strum::IntoEnumIterator;

/// Decompose identifiers and print their fields
pub fn cmd_nevra(identifiers: &[String]) -> Result<()> {
    for identifier in identifiers {
        let nevra = Nevra::parse(strip_package_suffix(identifier))
            .with_context(|| format!("Cannot decompose '{}'", identifier))?;

        println!("{}", identifier);
        println!("  Name:        {}", nevra.name);
        match nevra.epoch {
            Some(epoch) => println!("  Epoch:       {}", epoch),
            None => println!("  Epoch:       (none)"),
        }
        println!("  Version:     {}", nevra.version);
        println!("  Release:     {}", nevra.release);
        println!("  Arch:        {}", nevra.arch);
        println!("  Raw version: {}", nevra.raw_version());
    }
    Ok(())
}

/// List supported listing formats
pub fn cmd_formats() {
    println!("Listing formats:");
    for format in ListingFormat::iter() {
        println!("  {:<16} {}", format, format.description());
    }
}
