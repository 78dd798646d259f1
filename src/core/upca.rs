//! UPC-A symbol assembly.
//!
//! The encoder is a pure pipeline: validate the digit string, resolve the
//! 12-digit symbol value, look up the parity layout from the leading
//! digit, encode both halves from the pattern tables, and wrap the result
//! in guards and quiet zones. Each stage either produces exactly what the
//! next stage needs or fails with a stage-attributable error.

use crate::core::checksum::{check_digit_of, parse_digits};
use crate::core::symbol::{BarModule, ModuleSequence};
use crate::core::symbology::{EncodeError, EncodeOptions, SymbolEncoding};
use crate::core::tables::{
    CENTER_GUARD, G_CODES, L_CODES, LEFT_RIGHT_GUARD, PARITY_PATTERNS, R_CODES, SYMBOL_MODULES,
};

const DATA_DIGITS: usize = 11;
const SYMBOL_DIGITS: usize = 12;
const HALF_DIGITS: usize = 6;

/// The UPC-A encoder.
#[derive(Debug)]
pub struct UpcA;

impl UpcA {
    /// Validate the input and return the twelve digit values of the symbol,
    /// computing or verifying the check digit as requested.
    fn resolve_symbol_digits(value: &str, verify: bool) -> Result<Vec<u8>, EncodeError> {
        let count = value.chars().count();
        match count {
            DATA_DIGITS => {
                let mut digits = parse_digits(value, DATA_DIGITS)?;
                digits.push(check_digit_of(&digits));
                Ok(digits)
            }
            SYMBOL_DIGITS => {
                let digits = parse_digits(value, SYMBOL_DIGITS)?;
                if verify {
                    let computed = check_digit_of(&digits[..DATA_DIGITS]);
                    let supplied = digits[DATA_DIGITS];
                    if supplied != computed {
                        return Err(EncodeError::ChecksumMismatch { supplied, computed });
                    }
                }
                Ok(digits)
            }
            other => Err(EncodeError::BadLength(other)),
        }
    }
}

impl SymbolEncoding for UpcA {
    fn name(&self) -> &'static str {
        "UPC-A"
    }

    fn description(&self) -> &'static str {
        "12-digit GS1 retail symbology, 95 modules wide"
    }

    fn value_help(&self) -> &'static str {
        "11 data digits (check digit appended) or 12 digits including the check digit"
    }

    fn encode(
        &self,
        value: &str,
        options: &EncodeOptions,
    ) -> Result<ModuleSequence, EncodeError> {
        let digits = Self::resolve_symbol_digits(value, options.verify_check_digit)?;
        let parity = PARITY_PATTERNS[usize::from(digits[0])];

        let quiet_zone = options.quiet_zone_modules;
        let mut modules = Vec::with_capacity(SYMBOL_MODULES + 2 * quiet_zone);
        push_spaces(&mut modules, quiet_zone);

        push_pattern(&mut modules, LEFT_RIGHT_GUARD);
        for (digit, parity_char) in digits[..HALF_DIGITS].iter().zip(parity.chars()) {
            let table = if parity_char == 'G' { &G_CODES } else { &L_CODES };
            push_pattern(&mut modules, table[usize::from(*digit)]);
        }
        push_pattern(&mut modules, CENTER_GUARD);
        for digit in &digits[HALF_DIGITS..] {
            push_pattern(&mut modules, R_CODES[usize::from(*digit)]);
        }
        push_pattern(&mut modules, LEFT_RIGHT_GUARD);

        push_spaces(&mut modules, quiet_zone);

        let resolved: String = digits
            .iter()
            .map(|digit| char::from(b'0' + digit))
            .collect();
        Ok(ModuleSequence::new(self.name(), resolved, quiet_zone, modules))
    }
}

fn push_pattern(modules: &mut Vec<BarModule>, pattern: &str) {
    for bit in pattern.bytes() {
        modules.push(if bit == b'1' {
            BarModule::bar()
        } else {
            BarModule::space()
        });
    }
}

fn push_spaces(modules: &mut Vec<BarModule>, count: usize) {
    for _ in 0..count {
        modules.push(BarModule::space());
    }
}
