//! Symbology discovery commands (`barc symbology ...`).

use anyhow::{Context, Result};
use barcode::SymbologyRegistry;
use clap::{Args, Subcommand};

/// Symbology subcommands.
#[derive(Subcommand, Debug)]
pub enum SymbologyCommand {
    /// List all implemented symbologies.
    List,
    /// Show details for a symbology.
    Show(SymbologyShowArgs),
}

/// Arguments for `barc symbology show`.
#[derive(Args, Debug)]
pub struct SymbologyShowArgs {
    /// Symbology name to display.
    pub name: String,
}

/// Execute a symbology command.
pub fn handle(command: SymbologyCommand) -> Result<()> {
    match command {
        SymbologyCommand::List => list(),
        SymbologyCommand::Show(args) => show(args),
    }
}

fn list() -> Result<()> {
    println!("Implemented symbologies:");
    for encoding in SymbologyRegistry::list() {
        println!("  - {}: {}", encoding.name(), encoding.description());
    }
    Ok(())
}

fn show(args: SymbologyShowArgs) -> Result<()> {
    let encoding = SymbologyRegistry::get(&args.name)
        .with_context(|| format!("symbology '{}' is not implemented", args.name))?;
    println!("Symbology: {}", encoding.name());
    println!("{}", encoding.description());
    println!("Accepted values: {}", encoding.value_help());
    Ok(())
}
