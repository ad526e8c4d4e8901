//! CLP money arithmetic helpers.
//!
//! All quantization rounds half-up (away from zero on ties), matching how
//! the accounting side expects totals to land. Amounts are `rust_decimal`
//! values; floats never enter document math.

use rust_decimal::{Decimal, RoundingStrategy};

/// Quantize to 2 decimal places, half-up, with a fixed scale of 2.
pub fn q2(value: Decimal) -> Decimal {
    let mut v = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(2);
    v
}

/// Quantize to 0 decimal places, half-up (integer pesos display).
pub fn q0(value: Decimal) -> Decimal {
    let mut v = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(0);
    v
}

/// Multiply two amounts exactly, then quantize to 2 decimals.
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    q2(a * b)
}

/// Sum an iterator of amounts without intermediate rounding.
pub fn sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, |acc, v| acc + v)
}

/// Parse a textual amount, trimming surrounding whitespace. Fail-closed.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    text.trim().parse().ok()
}

/// Format with exactly two decimals, e.g. `1234.50`.
pub fn fmt_2(value: Decimal) -> String {
    q2(value).to_string()
}

/// Format as CLP currency with dot thousands separators, e.g. `$1.234.567`.
///
/// Rounds to whole pesos first. Negative amounts keep the sign between the
/// `$` and the digits: `$-1.234`.
pub fn format_clp(value: Decimal) -> String {
    let pesos = q0(value);
    let digits = pesos.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if pesos.is_sign_negative() {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().expect("test decimal")
    }

    #[test]
    fn q2_rounds_half_up() {
        assert_eq!(q2(d("1.005")).to_string(), "1.01");
        assert_eq!(q2(d("1.004")).to_string(), "1.00");
        assert_eq!(q2(d("3")).to_string(), "3.00");
        assert_eq!(q2(d("-1.005")).to_string(), "-1.01");
    }

    #[test]
    fn q0_rounds_to_whole_pesos() {
        assert_eq!(q0(d("1234.5")).to_string(), "1235");
        assert_eq!(q0(d("1234.4")).to_string(), "1234");
    }

    #[test]
    fn mul_quantizes_product() {
        assert_eq!(mul(d("3"), d("0.335")).to_string(), "1.01");
        assert_eq!(mul(d("2"), d("1500")).to_string(), "3000.00");
    }

    #[test]
    fn sum_has_no_intermediate_rounding() {
        let total = sum([d("0.005"), d("0.005"), d("0.01")]);
        assert_eq!(q2(total).to_string(), "0.02");
    }

    #[test]
    fn parse_amount_trims_and_fails_closed() {
        assert_eq!(parse_amount(" 2.50 "), Some(d("2.50")));
        assert_eq!(parse_amount("bad"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn fmt_2_pads_decimals() {
        assert_eq!(fmt_2(d("3")), "3.00");
        assert_eq!(fmt_2(d("1234.567")), "1234.57");
    }

    #[test]
    fn format_clp_groups_thousands() {
        assert_eq!(format_clp(d("0")), "$0");
        assert_eq!(format_clp(d("999")), "$999");
        assert_eq!(format_clp(d("1000")), "$1.000");
        assert_eq!(format_clp(d("1234567")), "$1.234.567");
        assert_eq!(format_clp(d("1234567.6")), "$1.234.568");
        assert_eq!(format_clp(d("-1234")), "$-1.234");
    }
}
