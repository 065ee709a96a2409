//! Single digit deletion
//!
//! Finds the largest number obtainable by deleting exactly one decimal digit
//! of a non-negative integer.

use crate::constants::RADIX;
use thiserror::Error;

/// Digit deletion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    /// Negative numbers have no digit sequence to delete from
    #[error("Negative input is not supported: {0}")]
    Negative(i64),
    /// Deleting the only digit leaves no number
    #[error("Cannot delete a digit from single-digit number {0}")]
    SingleDigit(u64),
    /// Text input is not a decimal integer
    #[error("Not a decimal integer: '{0}'")]
    NotANumber(String),
    /// Text input is all digits but does not fit in an `i64`
    #[error("Number is too large: '{0}'")]
    TooLarge(String),
}

/// Delete one digit of `n` so that the remaining number is maximal
///
/// Every position is tried; candidates with leading zeros take their shorter
/// numeric value (deleting the `1` of `105` yields `5`).
///
/// # Errors
/// * `DigitError::Negative` - `n < 0`
/// * `DigitError::SingleDigit` - `n` has only one digit
pub fn delete_digit(n: i64) -> Result<u64, DigitError> {
    let value = u64::try_from(n).map_err(|_| DigitError::Negative(n))?;
    let digits = to_digits(value);
    max_after_deletion(&digits).ok_or(DigitError::SingleDigit(value))
}

/// Parse `input` as a decimal integer and delete one digit from it
///
/// Surrounding whitespace is ignored. Leading zeros are part of the numeric
/// value only, so `"0105"` behaves like `105`. The only sign accepted is a
/// leading `-`, which is then reported as `DigitError::Negative`.
///
/// # Errors
/// * `DigitError::NotANumber` - empty, signed with `+`, or not all ASCII digits
/// * `DigitError::TooLarge` - all digits, but outside the `i64` range
pub fn delete_digit_str(input: &str) -> Result<u64, DigitError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DigitError::NotANumber(trimmed.to_string()));
    }

    let n: i64 = trimmed
        .parse()
        .map_err(|_| DigitError::TooLarge(trimmed.to_string()))?;
    delete_digit(n)
}

/// Split a value into its decimal digits, most significant first
fn to_digits(mut value: u64) -> Vec<u8> {
    let radix = RADIX as u64;
    let mut digits = Vec::new();
    loop {
        digits.push((value % radix) as u8);
        value /= radix;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Maximum over all candidates with one position skipped
fn max_after_deletion(digits: &[u8]) -> Option<u64> {
    if digits.len() < 2 {
        return None;
    }

    (0..digits.len())
        .map(|skip| {
            digits
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .fold(0u64, |acc, (_, &d)| acc * RADIX as u64 + d as u64)
        })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_digit_reference() {
        assert_eq!(delete_digit(152), Ok(52));
        assert_eq!(delete_digit(1001), Ok(101));
    }

    #[test]
    fn test_delete_digit_leading_zero_candidate() {
        // candidates: 05, 15, 10
        assert_eq!(delete_digit(105), Ok(15));
        assert_eq!(delete_digit(10), Ok(1));
        assert_eq!(delete_digit(100), Ok(10));
    }

    #[test]
    fn test_delete_digit_two_digits() {
        assert_eq!(delete_digit(12), Ok(2));
        assert_eq!(delete_digit(21), Ok(2));
        assert_eq!(delete_digit(99), Ok(9));
    }

    #[test]
    fn test_delete_digit_large_value() {
        // 19 digits, the largest i64
        assert_eq!(delete_digit(i64::MAX), Ok(923_372_036_854_775_807));
    }

    #[test]
    fn test_delete_digit_negative() {
        assert_eq!(delete_digit(-152), Err(DigitError::Negative(-152)));
    }

    #[test]
    fn test_delete_digit_single_digit() {
        assert_eq!(delete_digit(0), Err(DigitError::SingleDigit(0)));
        assert_eq!(delete_digit(7), Err(DigitError::SingleDigit(7)));
    }

    #[test]
    fn test_delete_digit_result_has_fewer_digits() {
        for n in [10i64, 152, 999, 1001, 40_321, 7_000_001] {
            let digit_count = n.to_string().len() as u32;
            let result = delete_digit(n).unwrap();
            assert!(result < 10u64.pow(digit_count - 1), "n={}", n);
        }
    }

    #[test]
    fn test_delete_digit_str() {
        assert_eq!(delete_digit_str(" 152\n"), Ok(52));
        assert_eq!(delete_digit_str("0105"), Ok(15));
        assert_eq!(delete_digit_str("-3"), Err(DigitError::Negative(-3)));
        assert_eq!(
            delete_digit_str("12a"),
            Err(DigitError::NotANumber("12a".to_string()))
        );
        assert!(matches!(
            delete_digit_str(""),
            Err(DigitError::NotANumber(_))
        ));
    }

    #[test]
    fn test_delete_digit_str_rejects_plus_sign() {
        assert_eq!(
            delete_digit_str("+152"),
            Err(DigitError::NotANumber("+152".to_string()))
        );
        assert!(matches!(
            delete_digit_str("-"),
            Err(DigitError::NotANumber(_))
        ));
        assert!(matches!(
            delete_digit_str("--5"),
            Err(DigitError::NotANumber(_))
        ));
    }

    #[test]
    fn test_delete_digit_str_too_large() {
        let input = "99999999999999999999"; // 20 digits
        assert_eq!(
            delete_digit_str(input),
            Err(DigitError::TooLarge(input.to_string()))
        );
        assert_eq!(
            DigitError::TooLarge(input.to_string()).to_string(),
            "Number is too large: '99999999999999999999'"
        );
        // 19 digits still fits
        assert_eq!(
            delete_digit_str("9223372036854775807"),
            Ok(923_372_036_854_775_807)
        );
    }

    #[test]
    fn test_to_digits() {
        assert_eq!(to_digits(0), vec![0]);
        assert_eq!(to_digits(1001), vec![1, 0, 0, 1]);
    }
}
