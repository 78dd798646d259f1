//! Core library for linear barcode symbol encoding and rendering.

mod core;
mod image;

pub use crate::core::tables::{DIGIT_MODULES, QUIET_ZONE_MODULES, SYMBOL_MODULES};
pub use crate::core::{
    BarModule, EncodeError, EncodeOptions, ModuleSequence, RenderStyle, SymbolBatch,
    SymbolEncoding, SymbologyRegistry, UpcA, compute_check_digit,
};
pub use crate::image::{
    ImageRenderOptions, PageLayout, RenderError, SymbolImageStyle, render_symbol_image,
};

/// Encode one UPC-A value with the supplied options.
pub fn encode_upca(value: &str, options: &EncodeOptions) -> Result<ModuleSequence, EncodeError> {
    UpcA.encode(value, options)
}

/// Encode each non-blank input line as a symbol of the given encoder.
pub fn encode_lines_to_batch<E: SymbolEncoding + ?Sized>(
    encoder: &E,
    text: &str,
    options: &EncodeOptions,
) -> Result<SymbolBatch, EncodeError> {
    SymbolBatch::from_lines(encoder, text, options)
}
