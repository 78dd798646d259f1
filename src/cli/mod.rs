//! Command-line interface wiring for the `barc` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod common;
pub mod encode;
pub mod render;
pub mod symbology;
pub mod utils;

/// Parsed CLI entrypoint for the `barc` binary.
#[derive(Parser, Debug)]
#[command(name = "barc", version, about = "UPC-A barcode symbol toolkit")]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level command families made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(subcommand)]
    Encode(encode::EncodeCommand),
    #[command(subcommand)]
    Check(check::CheckCommand),
    #[command(subcommand)]
    Render(render::RenderCommand),
    #[command(subcommand)]
    Symbology(symbology::SymbologyCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(cmd) => encode::handle(cmd),
        Command::Check(cmd) => check::handle(cmd),
        Command::Render(cmd) => render::handle(cmd),
        Command::Symbology(cmd) => symbology::handle(cmd),
    }
}
