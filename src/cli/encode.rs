//! Encoding commands (`barc encode ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use barcode::{SymbologyRegistry, encode_lines_to_batch};
use clap::{Args, Subcommand};

use crate::cli::common::RenderStyleArg;
use crate::cli::utils::{encode_options, read_text_arg};

/// Encode subcommands.
#[derive(Subcommand, Debug)]
pub enum EncodeCommand {
    /// Encode a single value into a module sequence.
    Value(EncodeValueArgs),
    /// Encode one value per input line.
    Batch(EncodeBatchArgs),
}

/// Arguments for `barc encode value`.
#[derive(Args, Debug)]
pub struct EncodeValueArgs {
    /// Digit string to encode.
    pub value: String,
    /// Symbology to encode with.
    #[arg(long, default_value = "UPC-A")]
    pub symbology: String,
    /// Trust a supplied check digit instead of verifying it.
    #[arg(long)]
    pub no_verify: bool,
    /// Quiet zone width in modules on each side.
    #[arg(long)]
    pub quiet_zone: Option<usize>,
    /// Render the module sequence to stdout.
    #[arg(long)]
    pub render: bool,
    /// Emit the module sequence as JSON.
    #[arg(long)]
    pub json: bool,
    /// Rendering style used with --render.
    #[arg(long, default_value_t = RenderStyleArg::Bars, value_enum)]
    pub style: RenderStyleArg,
}

/// Arguments for `barc encode batch`.
#[derive(Args, Debug)]
pub struct EncodeBatchArgs {
    /// Read values from file (`-` for stdin), one per line.
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Symbology to encode with.
    #[arg(long, default_value = "UPC-A")]
    pub symbology: String,
    /// Trust supplied check digits instead of verifying them.
    #[arg(long)]
    pub no_verify: bool,
    /// Render every symbol to stdout.
    #[arg(long)]
    pub render: bool,
    /// Rendering style used with --render.
    #[arg(long, default_value_t = RenderStyleArg::Bars, value_enum)]
    pub style: RenderStyleArg,
}

/// Execute an encode command.
pub fn handle(command: EncodeCommand) -> Result<()> {
    match command {
        EncodeCommand::Value(args) => value(args),
        EncodeCommand::Batch(args) => batch(args),
    }
}

fn value(args: EncodeValueArgs) -> Result<()> {
    let encoder = SymbologyRegistry::get(&args.symbology)?;
    let options = encode_options(args.no_verify, args.quiet_zone);
    let sequence = encoder
        .encode(&args.value, &options)
        .with_context(|| format!("failed to encode '{}'", args.value))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
    } else if args.render {
        print!("{}", sequence.render(args.style.into()));
    } else {
        println!(
            "Encoded {} as {}: {} modules ({} quiet zone each side)",
            sequence.value(),
            sequence.symbology(),
            sequence.symbol_modules().len(),
            sequence.quiet_zone()
        );
    }
    Ok(())
}

fn batch(args: EncodeBatchArgs) -> Result<()> {
    let text = read_text_arg(None, args.from.clone())?;
    let encoder = SymbologyRegistry::get(&args.symbology)?;
    let options = encode_options(args.no_verify, None);
    let batch = encode_lines_to_batch(encoder, &text, &options)
        .context("failed to encode batch input")?;

    if args.render {
        print!("{}", batch.render(args.style.into()));
    } else {
        println!(
            "Encoded {} symbol(s) with {}",
            batch.symbols.len(),
            encoder.name()
        );
    }
    Ok(())
}
