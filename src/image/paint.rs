use image::imageops::overlay;
use image::{DynamicImage, ImageBuffer, Rgba};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use thiserror::Error;

use crate::core::symbol::ModuleSequence;

const NOMINAL_MODULE_IN: f32 = 0.013; // 0.330 mm X-dimension at 100 % magnification
const NOMINAL_BAR_HEIGHT_IN: f32 = 1.02;
const VERTICAL_MARGIN_IN: f32 = 0.06;
const TEXT_GAP_IN: f32 = 0.03;
const A4_WIDTH_IN: f32 = 8.27;
const A4_HEIGHT_IN: f32 = 11.69;
pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;

/// Visual styles for PNG rendering.
#[derive(Debug, Clone, Copy)]
pub enum SymbolImageStyle {
    Plain,
    Retail,
    Thermal,
}

/// Target layout for the generated image.
#[derive(Debug, Clone, Copy)]
pub enum PageLayout {
    Symbol,
    A4,
}

/// Options controlling PNG generation.
#[derive(Debug, Clone, Copy)]
pub struct ImageRenderOptions {
    pub style: SymbolImageStyle,
    pub dpi: u32,
    pub layout: PageLayout,
    /// GS1 magnification factor, clamped to 0.8-2.0.
    pub magnification: f32,
}

impl Default for ImageRenderOptions {
    fn default() -> Self {
        Self {
            style: SymbolImageStyle::Plain,
            dpi: 300,
            layout: PageLayout::Symbol,
            magnification: 1.0,
        }
    }
}

/// Failure modes of the renderer. The renderer knows nothing about
/// symbologies; an empty sequence is the only thing it can reject.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot render an empty module sequence")]
    EmptySequence,
}

struct Palette {
    page_bg: Rgba<u8>,
    space: Rgba<u8>,
    bar: Rgba<u8>,
    text: Rgba<u8>,
}

/// Render a module sequence into a PNG image using the supplied options.
///
/// Purely a function of the sequence and the scale options: bars are drawn
/// from `is_bar`/`width_factor` alone, and the human-readable line is the
/// value string the sequence already carries.
pub fn render_symbol_image(
    sequence: &ModuleSequence,
    options: &ImageRenderOptions,
) -> Result<DynamicImage, RenderError> {
    if sequence.is_empty() {
        return Err(RenderError::EmptySequence);
    }

    let dpi = options.dpi.clamp(72, 1200);
    let dpi_f = dpi as f32;
    let magnification = options.magnification.clamp(0.8, 2.0);
    let palette = palette(options.style);

    let module_px = (NOMINAL_MODULE_IN * magnification * dpi_f).round().max(1.0) as u32;
    let bar_height_px = (NOMINAL_BAR_HEIGHT_IN * magnification * dpi_f).round() as u32;
    let margin_px = (VERTICAL_MARGIN_IN * dpi_f).round() as u32;
    let text_gap_px = (TEXT_GAP_IN * dpi_f).round() as u32;

    let glyph_scale = ((dpi_f / 120.0).ceil() as u32).max(2);
    let text_height_px = GLYPH_HEIGHT as u32 * glyph_scale;

    let width_px = sequence.width_in_modules() as u32 * module_px;
    let height_px = margin_px + bar_height_px + text_gap_px + text_height_px + margin_px;

    let mut symbol_img = ImageBuffer::from_pixel(width_px, height_px, palette.space);

    let mut cursor_px = 0u32;
    for module in sequence.modules() {
        let module_width = u32::from(module.width_factor) * module_px;
        if module.is_bar {
            draw_filled_rect_mut(
                &mut symbol_img,
                Rect::at(cursor_px as i32, margin_px as i32).of_size(module_width, bar_height_px),
                palette.bar,
            );
        }
        cursor_px += module_width;
    }

    let glyph_advance = (GLYPH_WIDTH as u32 + 1) * glyph_scale;
    let value_chars: Vec<char> = sequence.value().chars().collect();
    let text_width_px = value_chars.len() as u32 * glyph_advance;
    let text_x = (width_px.saturating_sub(text_width_px) / 2) as i32;
    let text_y = (margin_px + bar_height_px + text_gap_px) as i32;
    for (idx, ch) in value_chars.iter().enumerate() {
        let glyph_x = text_x + (idx as u32 * glyph_advance) as i32;
        draw_glyph(&mut symbol_img, glyph_x, text_y, *ch, palette.text, glyph_scale);
    }

    let final_image = match options.layout {
        PageLayout::Symbol => DynamicImage::ImageRgba8(symbol_img),
        PageLayout::A4 => {
            let page_width = inches_to_px(A4_WIDTH_IN, dpi);
            let page_height = inches_to_px(A4_HEIGHT_IN, dpi);
            let mut page = ImageBuffer::from_pixel(page_width, page_height, palette.page_bg);
            let offset_x = ((page_width as i32 - width_px as i32) / 2).max(0);
            let offset_y = ((page_height as i32 - height_px as i32) / 2).max(0);
            overlay(&mut page, &symbol_img, offset_x as i64, offset_y as i64);
            DynamicImage::ImageRgba8(page)
        }
    };

    Ok(final_image)
}

fn inches_to_px(inches: f32, dpi: u32) -> u32 {
    (inches * dpi as f32).round() as u32
}

fn palette(style: SymbolImageStyle) -> Palette {
    match style {
        SymbolImageStyle::Plain => Palette {
            page_bg: rgba(0xff, 0xff, 0xff, 0xff),
            space: rgba(0xff, 0xff, 0xff, 0xff),
            bar: rgba(0x00, 0x00, 0x00, 0xff),
            text: rgba(0x00, 0x00, 0x00, 0xff),
        },
        SymbolImageStyle::Retail => Palette {
            page_bg: rgba(0xfd, 0xfa, 0xf3, 0xff),
            space: rgba(0xf9, 0xf4, 0xe9, 0xff),
            bar: rgba(0x1c, 0x1a, 0x17, 0xff),
            text: rgba(0x28, 0x24, 0x1f, 0xff),
        },
        SymbolImageStyle::Thermal => Palette {
            page_bg: rgba(0xf2, 0xf0, 0xec, 0xff),
            space: rgba(0xec, 0xe9, 0xe4, 0xff),
            bar: rgba(0x26, 0x23, 0x26, 0xff),
            text: rgba(0x26, 0x23, 0x26, 0xff),
        },
    }
}

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    Rgba([r, g, b, a])
}

fn draw_glyph(
    image: &mut ImageBuffer<Rgba<u8>, Vec<u8>>,
    x: i32,
    y: i32,
    ch: char,
    color: Rgba<u8>,
    scale: u32,
) {
    let pattern = glyph_pattern(ch);
    for (row, bits) in pattern.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                let px = x + (col as i32 * scale as i32);
                let py = y + (row as i32 * scale as i32);
                draw_filled_rect_mut(image, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}

#[rustfmt::skip]
fn glyph_pattern(ch: char) -> [u8; GLYPH_HEIGHT] {
    match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        _ => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbology::{EncodeOptions, SymbolEncoding};
    use crate::core::upca::UpcA;

    #[test]
    fn empty_sequence_is_rejected() {
        let empty = ModuleSequence::new("TEST", String::new(), 0, Vec::new());
        match render_symbol_image(&empty, &ImageRenderOptions::default()) {
            Err(RenderError::EmptySequence) => {}
            Ok(_) => panic!("expected empty sequence to be rejected"),
        }
    }

    #[test]
    fn symbol_layout_width_tracks_the_module_count() {
        let seq = UpcA.encode("036000291452", &EncodeOptions::default()).unwrap();
        let options = ImageRenderOptions { dpi: 300, ..Default::default() };
        let img = render_symbol_image(&seq, &options).unwrap().to_rgba8();
        // 0.013 in * 300 dpi rounds to 4 px per module.
        assert_eq!(img.width(), seq.width_in_modules() as u32 * 4);
    }

    #[test]
    fn a4_layout_produces_a_full_page() {
        let seq = UpcA.encode("036000291452", &EncodeOptions::default()).unwrap();
        let options = ImageRenderOptions {
            layout: PageLayout::A4,
            ..Default::default()
        };
        let img = render_symbol_image(&seq, &options).unwrap().to_rgba8();
        assert_eq!(img.width(), inches_to_px(A4_WIDTH_IN, 300));
        assert_eq!(img.height(), inches_to_px(A4_HEIGHT_IN, 300));
    }
}
