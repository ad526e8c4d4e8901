//! Document total computation: net, IVA, and grand total.
//!
//! Lines carry a quantity, unit price, and an optional per-line discount
//! percentage. Totals are computed with half-up quantization at each step
//! so they match what gets printed on the document.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::{q2, sum};

/// Chilean IVA rate applied when the caller has no configured override.
pub fn default_iva_rate() -> Decimal {
    Decimal::new(19, 2) // 0.19
}

/// One document line as entered by the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentLine {
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Discount percentage in `0..=100`.
    pub discount_pct: Decimal,
}

/// Computed net / tax / total amounts for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub net: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl DocumentTotals {
    /// All-zero totals, applied when a document is annulled.
    pub fn zeroed() -> Self {
        Self {
            net: q2(Decimal::ZERO),
            tax: q2(Decimal::ZERO),
            total: q2(Decimal::ZERO),
        }
    }
}

/// Final amount for one line: `q2(qty * price)` minus the quantized
/// discount.
///
/// Negative quantities/prices and discounts outside `0..=100` are
/// validation errors.
pub fn line_total(line: &DocumentLine) -> Result<Decimal, CoreError> {
    if line.quantity < Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Line quantity must not be negative, got {}",
            line.quantity
        )));
    }
    if line.unit_price < Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Unit price must not be negative, got {}",
            line.unit_price
        )));
    }
    if line.discount_pct < Decimal::ZERO || line.discount_pct > Decimal::from(100) {
        return Err(CoreError::Validation(format!(
            "Discount percentage must be within 0..=100, got {}",
            line.discount_pct
        )));
    }

    let subtotal = q2(line.quantity * line.unit_price);
    Ok(q2(subtotal - subtotal * line.discount_pct / Decimal::from(100)))
}

/// Compute document totals over all lines.
///
/// `net` is the sum of final line amounts, `tax` is zero for exempt
/// documents and `q2(net * iva_rate)` otherwise, `total = net + tax`.
pub fn document_totals(
    lines: &[DocumentLine],
    exempt: bool,
    iva_rate: Decimal,
) -> Result<DocumentTotals, CoreError> {
    let net = q2(sum(
        lines
            .iter()
            .map(line_total)
            .collect::<Result<Vec<_>, _>>()?,
    ));
    let tax = if exempt {
        q2(Decimal::ZERO)
    } else {
        q2(net * iva_rate)
    };
    let total = q2(net + tax);
    Ok(DocumentTotals { net, tax, total })
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

    fn line(qty: &str, price: &str, dcto: &str) -> DocumentLine {
        DocumentLine {
            quantity: d(qty),
            unit_price: d(price),
            discount_pct: d(dcto),
        }
    }

    #[test]
    fn line_total_without_discount() {
        assert_eq!(line_total(&line("3", "1500", "0")).unwrap(), d("4500.00"));
    }

    #[test]
    fn line_total_applies_discount_after_quantizing_subtotal() {
        // subtotal = q2(2 * 10.333) = 20.67; 10% off -> q2(20.67 - 2.067) = 18.60
        assert_eq!(line_total(&line("2", "10.333", "10")).unwrap(), d("18.60"));
    }

    #[test]
    fn line_total_rejects_bad_input() {
        assert!(line_total(&line("-1", "10", "0")).is_err());
        assert!(line_total(&line("1", "-10", "0")).is_err());
        assert!(line_total(&line("1", "10", "101")).is_err());
        assert!(line_total(&line("1", "10", "-5")).is_err());
    }

    #[test]
    fn full_discount_zeroes_line() {
        assert_eq!(line_total(&line("4", "250", "100")).unwrap(), d("0.00"));
    }

    #[test]
    fn document_totals_with_iva() {
        let lines = vec![line("2", "1000", "0"), line("1", "500", "0")];
        let totals = document_totals(&lines, false, default_iva_rate()).unwrap();
        assert_eq!(totals.net, d("2500.00"));
        assert_eq!(totals.tax, d("475.00"));
        assert_eq!(totals.total, d("2975.00"));
    }

    #[test]
    fn exempt_document_has_zero_tax() {
        let lines = vec![line("2", "1000", "0")];
        let totals = document_totals(&lines, true, default_iva_rate()).unwrap();
        assert_eq!(totals.tax, d("0.00"));
        assert_eq!(totals.total, totals.net);
    }

    #[test]
    fn empty_document_is_all_zero() {
        let totals = document_totals(&[], false, default_iva_rate()).unwrap();
        assert_eq!(totals, DocumentTotals::zeroed());
    }

    #[test]
    fn line_error_propagates() {
        let lines = vec![line("1", "10", "0"), line("1", "10", "200")];
        assert!(document_totals(&lines, false, default_iva_rate()).is_err());
    }
}
