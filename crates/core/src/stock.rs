//! Stock movement rules and critical-level banding.
//!
//! Movements keep the denormalized stock counter coherent: entries and
//! exits must be strictly positive, and an exit may never drive stock
//! negative. Banding drives the inventory view's critical highlighting.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ProductId;

/// Apply a stock entry. The quantity must be strictly positive.
pub fn apply_entry(stock: i64, quantity: i64) -> Result<i64, CoreError> {
    if quantity <= 0 {
        return Err(CoreError::Validation(format!(
            "Entry quantity must be > 0, got {quantity}"
        )));
    }
    Ok(stock + quantity)
}

/// Apply a stock exit. The quantity must be strictly positive and must
/// not exceed the available stock.
pub fn apply_exit(product_id: ProductId, stock: i64, quantity: i64) -> Result<i64, CoreError> {
    if quantity <= 0 {
        return Err(CoreError::Validation(format!(
            "Exit quantity must be > 0, got {quantity}"
        )));
    }
    if stock < quantity {
        return Err(CoreError::InsufficientStock {
            product_id,
            available: stock,
            requested: quantity,
        });
    }
    Ok(stock - quantity)
}

/// Stock band relative to a product's critical min/max limits.
///
/// The very-low band starts at half the minimum (floored, never below
/// zero) and the very-high band at 125% of the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    VeryLow,
    Low,
    Normal,
    High,
    VeryHigh,
}

impl StockLevel {
    /// Classify a stock count against `[min, max]` critical limits.
    pub fn classify(stock: i64, min: i64, max: i64) -> Self {
        let very_low = (min / 2).max(0);
        let very_high = max + max / 4;
        if stock <= very_low {
            Self::VeryLow
        } else if stock < min {
            Self::Low
        } else if stock > very_high {
            Self::VeryHigh
        } else if stock > max {
            Self::High
        } else {
            Self::Normal
        }
    }

    /// True for the two bands that warrant operator attention on the low
    /// side.
    pub fn is_critical_low(self) -> bool {
        matches!(self, Self::VeryLow | Self::Low)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
