//! Shared clap helper types for CLI commands.

use barcode::{PageLayout, RenderStyle, SymbolImageStyle};
use clap::ValueEnum;

/// Render styles available for ASCII symbol views.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RenderStyleArg {
    Bars,
    #[value(name = "ascii-01")]
    Ascii01,
}

impl From<RenderStyleArg> for RenderStyle {
    fn from(value: RenderStyleArg) -> Self {
        match value {
            RenderStyleArg::Bars => RenderStyle::Bars,
            RenderStyleArg::Ascii01 => RenderStyle::Ascii01,
        }
    }
}

/// Styles available for PNG rendering.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SymbolImageStyleArg {
    Plain,
    Retail,
    Thermal,
}

impl From<SymbolImageStyleArg> for SymbolImageStyle {
    fn from(value: SymbolImageStyleArg) -> SymbolImageStyle {
        match value {
            SymbolImageStyleArg::Plain => SymbolImageStyle::Plain,
            SymbolImageStyleArg::Retail => SymbolImageStyle::Retail,
            SymbolImageStyleArg::Thermal => SymbolImageStyle::Thermal,
        }
    }
}

/// Output page layout options for image rendering.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PageLayoutArg {
    Symbol,
    A4,
}

impl From<PageLayoutArg> for PageLayout {
    fn from(value: PageLayoutArg) -> PageLayout {
        match value {
            PageLayoutArg::Symbol => PageLayout::Symbol,
            PageLayoutArg::A4 => PageLayout::A4,
        }
    }
}
