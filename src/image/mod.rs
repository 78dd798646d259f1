//! Rendering helpers for producing PNG output of barcode symbols.

mod paint;

pub use paint::{
    GLYPH_HEIGHT, GLYPH_WIDTH, ImageRenderOptions, PageLayout, RenderError, SymbolImageStyle,
    render_symbol_image,
};
