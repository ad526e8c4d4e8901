//! Caja application state stores.
//!
//! Small file-backed stores under a caller-supplied data directory —
//! this is operator-workstation state, not a database:
//!
//! - [`AppSettings`] — `settings.toml`: company identity, document
//!   defaults, and inventory limits.
//! - [`ThresholdStore`] — `inventory_thresholds.json`: per-product
//!   critical min/max overrides.
//! - [`SequenceStore`] — `sequences.toml`: the purchase-order number
//!   counter.

pub mod error;
pub mod sequence;
pub mod settings;
pub mod thresholds;

pub use error::StoreError;
pub use sequence::SequenceStore;
pub use settings::{AppSettings, CompanyInfo, InventorySettings, PoSettings};
pub use thresholds::ThresholdStore;
