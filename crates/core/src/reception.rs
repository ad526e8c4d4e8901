//! Purchase-order reception quantity logic.
//!
//! When an operator receives goods against an open purchase order, each
//! line may be received partially. Requested quantities are clamped into
//! `[0, pending]` per line; the dialog layer only ever hands back what
//! this module accepts.

use std::collections::BTreeMap;

use crate::types::ProductId;

/// One purchase-order line with its reception bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct ReceptionLine {
    pub product_id: ProductId,
    pub ordered: i64,
    pub received: i64,
}

impl ReceptionLine {
    /// Quantity still pending reception, never negative (over-received
    /// lines count as fully received).
    pub fn pending(&self) -> i64 {
        (self.ordered - self.received).max(0)
    }
}

/// Outcome of applying requested quantities to an order's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceptionOutcome {
    /// Accepted quantity per product, clamped into `[0, pending]`.
    pub accepted: BTreeMap<ProductId, i64>,
    /// True when the reception leaves no pending quantity on any line.
    pub complete: bool,
}

/// Clamp a requested reception quantity into `[0, pending]`.
pub fn clamp_quantity(requested: i64, pending: i64) -> i64 {
    requested.clamp(0, pending.max(0))
}

/// Apply the operator's requested quantities to an order.
///
/// Lines absent from `requested` receive zero. The order is complete when
/// every line's pending quantity is exhausted by its accepted amount.
pub fn apply_quantities(
    lines: &[ReceptionLine],
    requested: &BTreeMap<ProductId, i64>,
) -> ReceptionOutcome {
    let mut accepted = BTreeMap::new();
    let mut complete = true;

    for line in lines {
        let pending = line.pending();
        let qty = clamp_quantity(requested.get(&line.product_id).copied().unwrap_or(0), pending);
        if qty < pending {
            complete = false;
        }
        accepted.insert(line.product_id, qty);
    }

    ReceptionOutcome { accepted, complete }
}

/// True when at least one line has a positive quantity. The reception
/// dialog asks for confirmation before accepting an all-zero reception.
pub fn has_any_quantity(quantities: &BTreeMap<ProductId, i64>) -> bool {
    quantities.values().any(|q| *q > 0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: ProductId, ordered: i64, received: i64) -> ReceptionLine {
        ReceptionLine {
            product_id,
            ordered,
            received,
        }
    }

    #[test]
    fn pending_never_negative() {
        assert_eq!(line(1, 10, 3).pending(), 7);
        assert_eq!(line(1, 10, 10).pending(), 0);
        assert_eq!(line(1, 10, 12).pending(), 0);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_quantity(5, 7), 5);
        assert_eq!(clamp_quantity(9, 7), 7);
        assert_eq!(clamp_quantity(-2, 7), 0);
        assert_eq!(clamp_quantity(3, -1), 0);
    }

    #[test]
    fn full_reception_is_complete() {
        let lines = [line(1, 10, 0), line(2, 5, 2)];
        let requested = BTreeMap::from([(1, 10), (2, 3)]);
        let outcome = apply_quantities(&lines, &requested);
        assert_eq!(outcome.accepted, BTreeMap::from([(1, 10), (2, 3)]));
        assert!(outcome.complete);
    }

    #[test]
    fn partial_reception_is_not_complete() {
        let lines = [line(1, 10, 0), line(2, 5, 0)];
        let requested = BTreeMap::from([(1, 10)]);
        let outcome = apply_quantities(&lines, &requested);
        assert_eq!(outcome.accepted, BTreeMap::from([(1, 10), (2, 0)]));
        assert!(!outcome.complete);
    }

    #[test]
    fn over_request_is_clamped_to_pending() {
        let lines = [line(1, 10, 4)];
        let requested = BTreeMap::from([(1, 50)]);
        let outcome = apply_quantities(&lines, &requested);
        assert_eq!(outcome.accepted, BTreeMap::from([(1, 6)]));
        assert!(outcome.complete);
    }

    #[test]
    fn already_received_lines_stay_complete() {
        let lines = [line(1, 10, 10)];
        let outcome = apply_quantities(&lines, &BTreeMap::new());
        assert_eq!(outcome.accepted, BTreeMap::from([(1, 0)]));
        assert!(outcome.complete);
    }

    #[test]
    fn empty_order_is_trivially_complete() {
        let outcome = apply_quantities(&[], &BTreeMap::new());
        assert!(outcome.accepted.is_empty());
        assert!(outcome.complete);
    }

    #[test]
    fn any_quantity_check() {
        assert!(!has_any_quantity(&BTreeMap::new()));
        assert!(!has_any_quantity(&BTreeMap::from([(1, 0), (2, 0)])));
        assert!(has_any_quantity(&BTreeMap::from([(1, 0), (2, 1)])));
    }
}
