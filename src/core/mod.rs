//! Core domain primitives: pattern tables, checksum, encoders, and the
//! module-sequence data model.

pub mod checksum;
pub mod symbol;
pub mod symbology;
pub mod tables;
pub mod upca;

pub use checksum::compute_check_digit;
pub use symbol::{BarModule, ModuleSequence, RenderStyle, SymbolBatch};
pub use symbology::{EncodeError, EncodeOptions, SymbolEncoding, SymbologyRegistry};
pub use upca::UpcA;
