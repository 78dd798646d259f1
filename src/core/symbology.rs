use thiserror::Error;

use crate::core::symbol::ModuleSequence;
use crate::core::tables::QUIET_ZONE_MODULES;
use crate::core::upca::UpcA;

/// Errors produced while turning a digit string into a module sequence.
///
/// Every variant is a caller input error; the computation is deterministic,
/// so retrying with the same input always fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("value must be 11 or 12 digits (got {0})")]
    BadLength(usize),
    #[error("invalid character '{0}' (U+{1:04X}) at column {2}")]
    BadCharacter(char, u32, usize),
    #[error("check digit mismatch: supplied {supplied}, computed {computed}")]
    ChecksumMismatch { supplied: u8, computed: u8 },
    #[error("unsupported symbology '{0}'")]
    UnsupportedSymbology(String),
}

/// Options accepted by every [`SymbolEncoding::encode`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Recompute and compare the check digit when 12 digits are supplied.
    pub verify_check_digit: bool,
    /// Space modules added on each side of the symbol.
    pub quiet_zone_modules: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            verify_check_digit: true,
            quiet_zone_modules: QUIET_ZONE_MODULES,
        }
    }
}

/// A linear symbology that can turn a value into an ordered module sequence.
///
/// The trait is the seam other symbologies plug into; the registry below
/// only knows UPC-A today and refuses everything else rather than emitting
/// a pattern a scanner cannot read.
pub trait SymbolEncoding: std::fmt::Debug {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// One-line description of the values the encoder accepts.
    fn value_help(&self) -> &'static str;
    fn encode(&self, value: &str, options: &EncodeOptions)
    -> Result<ModuleSequence, EncodeError>;
}

static UPC_A: UpcA = UpcA;

/// Registry of symbologies recognised by the CLI and library callers.
pub struct SymbologyRegistry;

impl SymbologyRegistry {
    /// Return the implemented symbologies.
    pub fn list() -> Vec<&'static dyn SymbolEncoding> {
        vec![&UPC_A]
    }

    /// Resolve a symbology by name (case-insensitive).
    pub fn get(name: &str) -> Result<&'static dyn SymbolEncoding, EncodeError> {
        for encoding in Self::list() {
            if encoding.name().eq_ignore_ascii_case(name) {
                return Ok(encoding);
            }
        }
        Err(EncodeError::UnsupportedSymbology(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_upc_a_case_insensitively() {
        assert_eq!(SymbologyRegistry::get("UPC-A").unwrap().name(), "UPC-A");
        assert_eq!(SymbologyRegistry::get("upc-a").unwrap().name(), "UPC-A");
    }

    #[test]
    fn registry_rejects_everything_else() {
        for name in ["code128", "ean-13", "code39", "qr"] {
            match SymbologyRegistry::get(name) {
                Err(EncodeError::UnsupportedSymbology(n)) => assert_eq!(n, name),
                other => panic!("expected unsupported symbology, got {other:?}"),
            }
        }
    }

    #[test]
    fn default_options_verify_and_use_the_gs1_quiet_zone() {
        let options = EncodeOptions::default();
        assert!(options.verify_check_digit);
        assert_eq!(options.quiet_zone_modules, QUIET_ZONE_MODULES);
    }
}
