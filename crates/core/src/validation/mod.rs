//! Form-field validation.
//!
//! Fail-closed validators used before accepting operator input: Chilean
//! RUT checksum validation plus generic field-level checks. Every function
//! here is pure and never panics — malformed input collapses to `false`.

pub mod fields;
pub mod rut;

pub use fields::{email_is_valid, is_non_empty, is_non_negative_number, is_positive_int, FieldValue};
pub use rut::{check_digit, is_valid_rut, normalize_rut};
