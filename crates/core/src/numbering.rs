//! Sequential document number formatting.
//!
//! Purchase orders use a zero-padded running sequence: `OC-000000`,
//! `OC-000001`, ... The counter itself is persisted by `caja-store`.

/// Prefix for purchase order numbers.
pub const PO_PREFIX: &str = "OC-";

/// Zero-padding width for purchase order numbers.
pub const PO_NUMBER_WIDTH: usize = 6;

/// Format a sequence value as a document number.
///
/// Values wider than `width` are never truncated.
///
/// # Examples
///
/// ```
/// use caja_core::numbering::{format_number, PO_NUMBER_WIDTH, PO_PREFIX};
///
/// assert_eq!(format_number(PO_PREFIX, 0, PO_NUMBER_WIDTH), "OC-000000");
/// assert_eq!(format_number(PO_PREFIX, 42, PO_NUMBER_WIDTH), "OC-000042");
/// ```
pub fn format_number(prefix: &str, seq: u64, width: usize) -> String {
    format!("{prefix}{seq:0width$}")
}

/// Purchase order number with the standard prefix and width.
pub fn po_number(seq: u64) -> String {
    format_number(PO_PREFIX, seq, PO_NUMBER_WIDTH)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(po_number(0), "OC-000000");
        assert_eq!(po_number(1), "OC-000001");
        assert_eq!(po_number(999_999), "OC-999999");
    }

    #[test]
    fn overflow_is_not_truncated() {
        assert_eq!(po_number(1_000_000), "OC-1000000");
    }

    #[test]
    fn custom_prefix_and_width() {
        assert_eq!(format_number("COT-", 7, 4), "COT-0007");
    }
}
