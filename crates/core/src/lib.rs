//! Caja domain logic: pure building blocks for a Chilean POS/inventory
//! backend.
//!
//! Everything in this crate is synchronous, side-effect-free computation —
//! no database access, no file I/O:
//!
//! - [`validation`] — RUT (Chilean tax ID) checksum validation and generic
//!   form-field validators, all fail-closed.
//! - [`money`] — CLP-oriented decimal helpers (half-up quantization,
//!   thousands-separator formatting).
//! - [`totals`] — net / IVA / total computation for document lines with
//!   per-line discounts.
//! - [`document`] — document lifecycle status rules and folio generation.
//! - [`numbering`] — sequential document number formatting.
//! - [`reception`] — purchase-order reception quantity clamping.
//! - [`stock`] — stock movement rules and critical-level banding.

pub mod document;
pub mod error;
pub mod money;
pub mod numbering;
pub mod reception;
pub mod stock;
pub mod totals;
pub mod types;
pub mod validation;

pub use error::CoreError;
