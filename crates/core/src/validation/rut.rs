//! Chilean RUT (national tax ID) normalization and checksum validation.
//!
//! A RUT has the canonical form `NNNNNNNN-D` where the body is decimal
//! digits and `D` is a single check character in `0-9` or `K`, derived
//! from the body by the standard modulo-11 weighted sum. The weights and
//! mapping here must match the official algorithm exactly.

/// Cyclic weights applied from the least-significant digit outward.
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Normalize a free-form RUT string: strip spaces and dot separators,
/// trim, uppercase.
///
/// Pure and total — malformed input comes back malformed (but clean),
/// empty input comes back empty.
///
/// # Examples
///
/// ```
/// use caja_core::validation::normalize_rut;
///
/// assert_eq!(normalize_rut(" 12.345.678-k "), "12345678-K");
/// assert_eq!(normalize_rut("12345678-9"), "12345678-9");
/// assert_eq!(normalize_rut(""), "");
/// ```
pub fn normalize_rut(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Compute the modulo-11 check character for a RUT body.
///
/// Returns `None` when `body` is empty or contains anything other than
/// ASCII digits. Otherwise the result is always one of `0`-`9` or `K`:
/// digits are weighted `2,3,4,5,6,7` cycling from the rightmost digit,
/// and `11 - (sum % 11)` maps `11 -> '0'`, `10 -> 'K'`.
pub fn check_digit(body: &str) -> Option<char> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sum: u32 = body
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * WEIGHTS[i % WEIGHTS.len()])
        .sum();

    Some(match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        d => char::from_digit(d, 10).expect("remainder is a single digit"),
    })
}

/// Validate a free-form RUT string against its check character.
///
/// Fail-closed: missing separator, short input, non-numeric body, or a
/// mismatched check character all yield `false`. Never panics.
///
/// # Examples
///
/// ```
/// use caja_core::validation::is_valid_rut;
///
/// assert!(is_valid_rut("12.345.678-5"));
/// assert!(!is_valid_rut("12.345.678-K")); // wrong check digit
/// assert!(!is_valid_rut("bad-format"));
/// assert!(!is_valid_rut(""));
/// ```
pub fn is_valid_rut(raw: &str) -> bool {
    let normalized = normalize_rut(raw);
    if normalized.len() < 3 {
        return false;
    }
    let Some((body, dv)) = normalized.split_once('-') else {
        return false;
    };
    match check_digit(body) {
        Some(expected) => dv.len() == 1 && dv.starts_with(expected),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
