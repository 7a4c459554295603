//! Roman numeral parsing.
//!
//! Plays number their acts and scenes with Roman numerals, so any
//! token can potentially be one. Well-formedness is strict: repeats
//! are capped (and banned outright for D, L and V), a digit that was
//! already used additively cannot later subtract, and a subtractive
//! digit must sit exactly one step below its neighbour.

use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid Roman numeral")]
pub struct NotANumeral;

// descending digit order, and the subset whose members may repeat
const ORDER: [char; 7] = ['M', 'D', 'C', 'L', 'X', 'V', 'I'];
const REPEATABLE: [char; 4] = ['M', 'C', 'X', 'I'];
const NO_REPEAT: [char; 3] = ['D', 'L', 'V'];

fn digit_value(c: char) -> Option<i64> {
    match c {
        'M' => Some(1000),
        'D' => Some(500),
        'C' => Some(100),
        'L' => Some(50),
        'X' => Some(10),
        'V' => Some(5),
        'I' => Some(1),
        _ => None,
    }
}

fn position(order: &[char], c: char) -> Option<usize> {
    order.iter().position(|&d| d == c)
}

/// Parse a token as a Roman numeral.
///
/// Digits are processed right to left. A digit larger than the one
/// before it adds; an equal digit repeats (within limits); a smaller
/// one subtracts, but only as one of the recognised subtractive pairs
/// (IV, IX, XL, XC, CD, CM) or their one-order skips within M/C/X/I.
pub fn parse_numeral(token: &str) -> Result<u32, NotANumeral> {
    if token.is_empty() {
        return Err(NotANumeral);
    }

    let digits: Vec<char> = token.chars().collect();
    let mut total: i64 = 0;
    let mut last_value: i64 = -1;
    let mut repeat_run = 0;
    let mut added_before: HashSet<char> = HashSet::new();
    let mut subtracted_last = false;

    for i in (0..digits.len()).rev() {
        let c = digits[i];
        let value = digit_value(c).ok_or(NotANumeral)?;

        if value > last_value {
            // in order: addition
            total += value;
            repeat_run = 0;
            added_before.insert(c);
            subtracted_last = false;
        } else if value == last_value {
            // a repeat: up to 4 in a row for C, X and I, any number for
            // M, never for D, L, V, and never straight after subtracting
            if NO_REPEAT.contains(&c) || (repeat_run >= 3 && c != 'M') || subtracted_last {
                return Err(NotANumeral);
            }
            total += value;
            repeat_run += 1;
            subtracted_last = false;
        } else {
            // out of order: subtraction, if it's exactly one step below
            // the digit to its right
            let right = digits[i + 1];
            let one_below = |order: &[char]| -> bool {
                match (position(order, c), position(order, right)) {
                    (Some(pc), Some(pr)) => pc == pr + 1,
                    _ => false,
                }
            };
            if NO_REPEAT.contains(&c)
                || added_before.contains(&c)
                || !(one_below(&ORDER) || one_below(&REPEATABLE))
            {
                return Err(NotANumeral);
            }
            total -= value;
            subtracted_last = true;
            repeat_run = 0;
        }

        last_value = value;
    }

    Ok(total as u32)
}

#[cfg(test)]
mod tests {
    use super::{NotANumeral, parse_numeral};

    #[test]
    fn test_valid_numerals() {
        let test_cases = vec![
            ("I", 1),
            ("II", 2),
            ("III", 3),
            ("IV", 4),
            ("VII", 7),
            ("IX", 9),
            ("XIV", 14),
            ("XC", 90),
            ("CD", 400),
            ("MCMXIX", 1919),
            ("MMDCCCLXXVIII", 2878),
            // M may repeat without limit
            ("MMMMMMMMMMMM", 12000),
        ];

        for (token, expected) in test_cases {
            assert_eq!(parse_numeral(token), Ok(expected), "parsing {token}");
        }
    }

    #[test]
    fn test_invalid_numerals() {
        let test_cases = vec![
            "",      // empty
            "i",     // lowercase is not a digit
            "foobar",
            "IIV",   // repeat before a subtraction
            "VX",    // V never subtracts
            "DM",    // D never subtracts
            "IVI",   // I added, then reused subtractively
            "CMC",   // C added, then reused subtractively
            "XXXXX", // 5th repeat
            "CCCCC",
            "VV",    // V never repeats
            "DD",
            "LL",
        ];

        for token in test_cases {
            assert_eq!(parse_numeral(token), Err(NotANumeral), "parsing {token:?}");
        }
    }
}
