//! Rendering commands (`barc render ...`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use barcode::{ImageRenderOptions, SymbologyRegistry, encode_lines_to_batch, render_symbol_image};
use clap::{Args, Subcommand};

use crate::cli::common::{PageLayoutArg, RenderStyleArg, SymbolImageStyleArg};
use crate::cli::utils::{encode_options, read_text_arg, write_output};

/// Available render subcommands.
#[derive(Subcommand, Debug)]
pub enum RenderCommand {
    /// Render PNG images of the encoded symbols.
    Image(RenderImageArgs),
    /// Emit an ASCII rendering of one symbol.
    Ascii(RenderAsciiArgs),
}

/// Args for `barc render image`.
#[derive(Args, Debug)]
pub struct RenderImageArgs {
    /// Digit string to render (omit when using --from).
    pub value: Option<String>,
    /// Read values from file (`-` for stdin), one per line.
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Output file or directory for generated PNGs.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,
    /// Symbology to encode with.
    #[arg(long, default_value = "UPC-A")]
    pub symbology: String,
    /// Visual style applied to the symbol.
    #[arg(long, default_value_t = SymbolImageStyleArg::Plain, value_enum)]
    pub style: SymbolImageStyleArg,
    /// Output page layout.
    #[arg(long = "pagesize", default_value_t = PageLayoutArg::Symbol, value_enum)]
    pub pagesize: PageLayoutArg,
    /// Dots per inch used when rasterising.
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,
    /// GS1 magnification factor (0.8-2.0).
    #[arg(long, default_value_t = 1.0)]
    pub magnification: f32,
    /// Trust supplied check digits instead of verifying them.
    #[arg(long)]
    pub no_verify: bool,
    /// Quiet zone width in modules on each side.
    #[arg(long)]
    pub quiet_zone: Option<usize>,
}

/// Args for `barc render ascii`.
#[derive(Args, Debug)]
pub struct RenderAsciiArgs {
    /// Digit string to render.
    pub value: String,
    /// Output file (`-` for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Symbology to encode with.
    #[arg(long, default_value = "UPC-A")]
    pub symbology: String,
    /// Rendering style.
    #[arg(long, default_value_t = RenderStyleArg::Bars, value_enum)]
    pub style: RenderStyleArg,
    /// Trust a supplied check digit instead of verifying it.
    #[arg(long)]
    pub no_verify: bool,
}

/// Execute a render command.
pub fn handle(command: RenderCommand) -> Result<()> {
    match command {
        RenderCommand::Image(args) => image(args),
        RenderCommand::Ascii(args) => ascii(args),
    }
}

fn image(args: RenderImageArgs) -> Result<()> {
    let encoder = SymbologyRegistry::get(&args.symbology)?;
    let options = encode_options(args.no_verify, args.quiet_zone);
    let text = read_text_arg(args.value.clone(), args.from.clone())?;
    let batch = encode_lines_to_batch(encoder, &text, &options)
        .context("failed to encode input values")?;
    if batch.symbols.is_empty() {
        return Err(anyhow!("no values to render"));
    }

    let render_options = ImageRenderOptions {
        style: args.style.into(),
        dpi: args.dpi.clamp(72, 1200),
        layout: args.pagesize.into(),
        magnification: args.magnification,
    };

    let output_path = args.output;
    let is_single_file_target = output_path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if batch.symbols.len() > 1 && is_single_file_target {
        return Err(anyhow!(
            "output path must be a directory when rendering multiple symbols"
        ));
    }

    if is_single_file_target {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory {}", parent.display())
                })?;
            }
        }
    } else {
        fs::create_dir_all(&output_path).with_context(|| {
            format!("failed to create output directory {}", output_path.display())
        })?;
    }

    for (idx, symbol) in batch.symbols.iter().enumerate() {
        let target_path = if is_single_file_target {
            output_path.clone()
        } else {
            output_path.join(format!("{}_{:04}.png", symbol.value(), idx + 1))
        };
        let image = render_symbol_image(symbol, &render_options)?;
        image
            .save(&target_path)
            .with_context(|| format!("failed to write {}", target_path.display()))?;
    }

    if is_single_file_target {
        println!(
            "Rendered symbol image to {} at {} DPI",
            output_path.display(),
            render_options.dpi
        );
    } else {
        println!(
            "Rendered {} symbol image(s) to {} at {} DPI",
            batch.symbols.len(),
            output_path.display(),
            render_options.dpi
        );
    }
    Ok(())
}

fn ascii(args: RenderAsciiArgs) -> Result<()> {
    let encoder = SymbologyRegistry::get(&args.symbology)?;
    let options = encode_options(args.no_verify, None);
    let sequence = encoder
        .encode(&args.value, &options)
        .with_context(|| format!("failed to encode '{}'", args.value))?;
    let output = sequence.render(args.style.into());
    match args.output {
        Some(path) => {
            write_output(&path, &output)?;
            println!("Wrote rendering of {} to {}", sequence.value(), path.display());
        }
        None => {
            print!("{}", output);
        }
    }
    Ok(())
}
