use std::fmt::{self, Write};

use serde::Serialize;

use crate::core::symbology::{EncodeError, EncodeOptions, SymbolEncoding};

/// Rows used when rendering bars as block characters.
const BAR_ROWS: usize = 8;

/// Atomic unit of a linear barcode symbol: a dark bar or a light space.
///
/// UPC-A only emits single-width modules; `width_factor` exists so
/// symbologies with multi-module elements can share the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarModule {
    pub is_bar: bool,
    pub width_factor: u8,
}

impl BarModule {
    pub const fn bar() -> Self {
        Self { is_bar: true, width_factor: 1 }
    }

    pub const fn space() -> Self {
        Self { is_bar: false, width_factor: 1 }
    }
}

/// Ordered, immutable module sequence produced by one encode call.
///
/// The quiet zones are real space modules at both ends of the list; the
/// logical symbol between them is what correctness invariants are stated
/// against (95 modules for UPC-A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSequence {
    symbology: &'static str,
    value: String,
    quiet_zone: usize,
    modules: Vec<BarModule>,
}

impl ModuleSequence {
    /// Assemble a finished sequence. `modules` must already carry
    /// `quiet_zone` space modules on each side.
    pub fn new(
        symbology: &'static str,
        value: String,
        quiet_zone: usize,
        modules: Vec<BarModule>,
    ) -> Self {
        Self { symbology, value, quiet_zone, modules }
    }

    pub fn symbology(&self) -> &'static str {
        self.symbology
    }

    /// The resolved value the symbol encodes, check digit included.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn quiet_zone(&self) -> usize {
        self.quiet_zone
    }

    /// All modules, quiet zones included.
    pub fn modules(&self) -> &[BarModule] {
        &self.modules
    }

    /// The logical symbol with the quiet zones stripped.
    pub fn symbol_modules(&self) -> &[BarModule] {
        &self.modules[self.quiet_zone..self.modules.len() - self.quiet_zone]
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total width in base module units, quiet zones included.
    pub fn width_in_modules(&self) -> usize {
        self.modules
            .iter()
            .map(|module| usize::from(module.width_factor))
            .sum()
    }

    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = String::with_capacity((self.width_in_modules() + 1) * (BAR_ROWS + 2));
        writeln!(&mut out, "{} [{}]", self.value, self.symbology).unwrap();
        match style {
            RenderStyle::Bars => {
                let row = self.module_row('\u{2588}', ' ');
                for _ in 0..BAR_ROWS {
                    writeln!(&mut out, "{}", row).unwrap();
                }
            }
            RenderStyle::Ascii01 => {
                writeln!(&mut out, "{}", self.module_row('1', '0')).unwrap();
            }
        }
        out
    }

    fn module_row(&self, mark: char, blank: char) -> String {
        let mut row = String::with_capacity(self.width_in_modules());
        for module in &self.modules {
            let glyph = if module.is_bar { mark } else { blank };
            for _ in 0..module.width_factor {
                row.push(glyph);
            }
        }
        row
    }
}

/// Symbols encoded from a multi-line input, one per non-blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolBatch {
    pub symbols: Vec<ModuleSequence>,
}

impl SymbolBatch {
    /// Encode every non-blank line of `text`. Each line is trimmed first;
    /// any line that fails to encode fails the whole batch.
    pub fn from_lines<E: SymbolEncoding + ?Sized>(
        encoder: &E,
        text: &str,
        options: &EncodeOptions,
    ) -> Result<Self, EncodeError> {
        let mut symbols = Vec::new();
        for line in text.lines() {
            let value = line.trim();
            if value.is_empty() {
                continue;
            }
            symbols.push(encoder.encode(value, options)?);
        }
        Ok(Self { symbols })
    }

    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = String::new();
        for symbol in &self.symbols {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&symbol.render(style));
        }
        out
    }
}

/// ASCII rendering styles.
#[derive(Debug, Clone, Copy)]
pub enum RenderStyle {
    Bars,
    Ascii01,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Bars => write!(f, "bars"),
            RenderStyle::Ascii01 => write!(f, "ascii-01"),
        }
    }
}
