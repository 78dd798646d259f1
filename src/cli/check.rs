//! Check digit commands (`barc check ...`).

use anyhow::{Context, Result, bail};
use barcode::{EncodeOptions, SymbolEncoding, UpcA, compute_check_digit};
use clap::{Args, Subcommand};

/// Check digit subcommands.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Compute the check digit for an 11-digit value.
    Compute(CheckComputeArgs),
    /// Verify the check digit of a 12-digit value.
    Verify(CheckVerifyArgs),
}

/// Arguments for `barc check compute`.
#[derive(Args, Debug)]
pub struct CheckComputeArgs {
    /// 11-digit data string.
    pub value: String,
}

/// Arguments for `barc check verify`.
#[derive(Args, Debug)]
pub struct CheckVerifyArgs {
    /// 12-digit value including its check digit.
    pub value: String,
}

/// Execute a check command.
pub fn handle(command: CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Compute(args) => compute(args),
        CheckCommand::Verify(args) => verify(args),
    }
}

fn compute(args: CheckComputeArgs) -> Result<()> {
    let digit = compute_check_digit(&args.value)
        .with_context(|| format!("failed to compute check digit for '{}'", args.value))?;
    println!("Check digit: {}", digit);
    println!("Full value:  {}{}", args.value, digit);
    Ok(())
}

fn verify(args: CheckVerifyArgs) -> Result<()> {
    let count = args.value.chars().count();
    if count != 12 {
        bail!("verification requires 12 digits (got {count})");
    }
    let sequence = UpcA
        .encode(&args.value, &EncodeOptions::default())
        .with_context(|| format!("verification failed for '{}'", args.value))?;
    println!("Check digit OK for {}", sequence.value());
    Ok(())
}
