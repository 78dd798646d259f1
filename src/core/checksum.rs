//! UPC-A check digit computation (weighted mod-10).

use crate::core::symbology::EncodeError;

const DATA_DIGITS: usize = 11;

/// Compute the check digit for an 11-digit UPC-A data string.
///
/// Digits at odd 1-based positions are summed and tripled, digits at even
/// positions are summed unweighted; the check digit brings the total to a
/// multiple of ten.
pub fn compute_check_digit(digits: &str) -> Result<u8, EncodeError> {
    let values = parse_digits(digits, DATA_DIGITS)?;
    Ok(check_digit_of(&values))
}

/// Checksum over already-validated digit values. Callers guarantee eleven
/// entries, each 0-9.
pub(crate) fn check_digit_of(values: &[u8]) -> u8 {
    let mut odd = 0u32;
    let mut even = 0u32;
    for (idx, &value) in values.iter().enumerate() {
        if idx % 2 == 0 {
            odd += u32::from(value);
        } else {
            even += u32::from(value);
        }
    }
    let total = odd * 3 + even;
    ((10 - total % 10) % 10) as u8
}

/// Validate an ASCII digit string of the expected length and return its
/// digit values.
pub(crate) fn parse_digits(digits: &str, expected: usize) -> Result<Vec<u8>, EncodeError> {
    let count = digits.chars().count();
    if count != expected {
        return Err(EncodeError::BadLength(count));
    }
    let mut values = Vec::with_capacity(expected);
    for (idx, ch) in digits.chars().enumerate() {
        match ch.to_digit(10) {
            Some(value) if ch.is_ascii_digit() => values.push(value as u8),
            _ => return Err(EncodeError::BadCharacter(ch, ch as u32, idx + 1)),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector_from_the_gs1_worked_example() {
        // odd positions 0,6,0,2,1,5 -> 14*3 = 42; even 3,0,0,9,4 -> 16; 58 -> 2
        assert_eq!(compute_check_digit("03600029145").unwrap(), 2);
    }

    #[test]
    fn canonical_sample_upc() {
        assert_eq!(compute_check_digit("01234567890").unwrap(), 5);
    }

    #[test]
    fn deterministic_across_calls() {
        let first = compute_check_digit("03600029145").unwrap();
        let second = compute_check_digit("03600029145").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            compute_check_digit("12345"),
            Err(EncodeError::BadLength(5))
        );
        assert_eq!(
            compute_check_digit("036000291452"),
            Err(EncodeError::BadLength(12))
        );
    }

    #[test]
    fn rejects_non_digit_characters() {
        match compute_check_digit("0360002914a") {
            Err(EncodeError::BadCharacter('a', 0x61, 11)) => {}
            other => panic!("expected bad character, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic four parses with to_digit but is not a valid symbol char.
        match compute_check_digit("0360002914٤") {
            Err(EncodeError::BadCharacter('٤', _, 11)) => {}
            other => panic!("expected bad character, got {other:?}"),
        }
    }

    #[test]
    fn total_already_a_multiple_of_ten_yields_zero() {
        // odd sum 5*3 + even sum 5 = 20
        assert_eq!(compute_check_digit("00000000055").unwrap(), 0);
    }
}
