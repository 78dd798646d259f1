//! Canonical UPC-A pattern tables from the GS1 General Specifications.
//!
//! Everything in this module is constant data copied from the published
//! standard. The L/G/R tables are related structurally (R is the bitwise
//! complement of L, G is that complement in reverse bit order); the tests
//! below assert those relationships instead of trusting the transcription.

/// Modules occupied by one encoded digit.
pub const DIGIT_MODULES: usize = 7;

/// Modules in the finished symbol between the quiet zones:
/// guard(3) + 6 digits(42) + center(5) + 6 digits(42) + guard(3).
pub const SYMBOL_MODULES: usize = 95;

/// GS1 minimum quiet zone width on each side of the symbol, in modules.
pub const QUIET_ZONE_MODULES: usize = 9;

/// Guard pattern at both outer edges of the symbol.
pub const LEFT_RIGHT_GUARD: &str = "101";

/// Guard pattern separating the left and right digit halves.
pub const CENTER_GUARD: &str = "01010";

/// Odd-parity (L) patterns for digits 0-9, used in the left half.
pub const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];

/// Even-parity (G) patterns for digits 0-9, used in the left half.
pub const G_CODES: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101",
    "0111001", "0000101", "0010001", "0001001", "0010111",
];

/// Right-half (R) patterns for digits 0-9.
pub const R_CODES: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];

/// L/G parity layout of the left half, keyed by the number system digit.
pub const PARITY_PATTERNS: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG",
    "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL", "LGGLGL",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn complement(pattern: &str) -> String {
        pattern
            .chars()
            .map(|bit| if bit == '1' { '0' } else { '1' })
            .collect()
    }

    #[test]
    fn every_digit_pattern_spans_seven_modules() {
        for digit in 0..10 {
            assert_eq!(L_CODES[digit].len(), DIGIT_MODULES);
            assert_eq!(G_CODES[digit].len(), DIGIT_MODULES);
            assert_eq!(R_CODES[digit].len(), DIGIT_MODULES);
        }
    }

    #[test]
    fn r_codes_are_the_complement_of_l_codes() {
        for digit in 0..10 {
            assert_eq!(R_CODES[digit], complement(L_CODES[digit]), "digit {digit}");
        }
    }

    #[test]
    fn g_codes_are_the_reversed_complement_of_l_codes() {
        for digit in 0..10 {
            let reversed: String = complement(L_CODES[digit]).chars().rev().collect();
            assert_eq!(G_CODES[digit], reversed, "digit {digit}");
        }
    }

    #[test]
    fn l_patterns_have_odd_parity_and_g_r_even() {
        for digit in 0..10 {
            let ones = |p: &str| p.chars().filter(|&c| c == '1').count();
            assert_eq!(ones(L_CODES[digit]) % 2, 1, "L digit {digit}");
            assert_eq!(ones(G_CODES[digit]) % 2, 0, "G digit {digit}");
            assert_eq!(ones(R_CODES[digit]) % 2, 0, "R digit {digit}");
        }
    }

    #[test]
    fn parity_patterns_match_the_published_table() {
        for pattern in PARITY_PATTERNS {
            assert_eq!(pattern.len(), 6);
            assert!(pattern.chars().all(|c| c == 'L' || c == 'G'));
        }
        assert_eq!(PARITY_PATTERNS[0], "LLLLLL");
        assert_eq!(PARITY_PATTERNS[1], "LLGLGG");
    }

    #[test]
    fn guard_patterns_sum_to_the_fixed_symbol_width() {
        let total = 2 * LEFT_RIGHT_GUARD.len() + CENTER_GUARD.len() + 12 * DIGIT_MODULES;
        assert_eq!(total, SYMBOL_MODULES);
    }
}
