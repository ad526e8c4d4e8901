//! Generic field-level validators for dialog/form input.
//!
//! All of these are fail-closed: unparseable or type-mismatched input
//! yields `false`, never an error. Callers only need a pass/fail signal.

use std::sync::LazyLock;

use regex::Regex;

/// Coarse email shape: one `@`, at least one `.` after it, no whitespace.
/// Deliberately permissive — this polices obvious typos, not RFC 5322.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// A form-field value that may arrive as a number or as text.
///
/// Explicit tagged union replacing duck-typed "text or number" acceptance:
/// numeric variants are checked directly, the text variant goes through a
/// fallible parse, and both collapse to a boolean.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl From<i64> for FieldValue<'static> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for FieldValue<'static> {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for FieldValue<'static> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(v: &'a str) -> Self {
        Self::Text(v)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(v: &'a String) -> Self {
        Self::Text(v)
    }
}

/// Validate an optional email field.
///
/// Absent (`None`) and empty values are considered valid: the field is
/// optional, and required-ness is a separate [`is_non_empty`] check.
/// Anything else — including whitespace-only input — must match the
/// shape after trimming.
///
/// # Examples
///
/// ```
/// use caja_core::validation::email_is_valid;
///
/// assert!(email_is_valid(None));
/// assert!(email_is_valid(Some("")));
/// assert!(email_is_valid(Some("ventas@example.com")));
/// assert!(!email_is_valid(Some("sin-arroba")));
/// assert!(!email_is_valid(Some("   ")));
/// ```
pub fn email_is_valid(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some("") => true,
        Some(s) => EMAIL_RE.is_match(s.trim()),
    }
}

/// True when the value represents an integer strictly greater than zero.
///
/// Text is trimmed and parsed as an integer (`"2.5"` is not an integer);
/// floats are truncated toward zero the way an integer cast would.
pub fn is_positive_int<'a>(value: impl Into<FieldValue<'a>>) -> bool {
    match value.into() {
        FieldValue::Int(i) => i > 0,
        FieldValue::Float(f) => f.is_finite() && f.trunc() > 0.0,
        FieldValue::Text(s) => s.trim().parse::<i64>().is_ok_and(|i| i > 0),
    }
}

/// True when the value represents a number greater than or equal to zero.
pub fn is_non_negative_number<'a>(value: impl Into<FieldValue<'a>>) -> bool {
    match value.into() {
        FieldValue::Int(i) => i >= 0,
        FieldValue::Float(f) => f >= 0.0,
        FieldValue::Text(s) => s.trim().parse::<f64>().is_ok_and(|f| f >= 0.0),
    }
}

/// True when the text, after trimming, has nonzero length. `None` counts
/// as empty.
pub fn is_non_empty(text: Option<&str>) -> bool {
    text.is_some_and(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_absent_or_empty_is_valid() {
        assert!(email_is_valid(None));
        assert!(email_is_valid(Some("")));
    }

    #[test]
    fn whitespace_only_email_is_not_valid() {
        // Whitespace-only input is a present-but-malformed value, not an
        // absent field.
        assert!(!email_is_valid(Some("   ")));
        assert!(!email_is_valid(Some("\t")));
    }

    #[test]
    fn email_shape_check() {
        assert!(email_is_valid(Some("ventas@example.com")));
        assert!(email_is_valid(Some(" ventas@example.com ")));
        assert!(!email_is_valid(Some("sin-arroba")));
        assert!(!email_is_valid(Some("dos@arro@bas.cl")));
        assert!(!email_is_valid(Some("sin@punto")));
        assert!(!email_is_valid(Some("con espacios@example.com")));
    }

    #[test]
    fn positive_int_numeric_inputs() {
        assert!(is_positive_int(5));
        assert!(!is_positive_int(0));
        assert!(!is_positive_int(-3));
        // Floats truncate toward zero before the sign check.
        assert!(is_positive_int(2.7));
        assert!(!is_positive_int(0.9));
        assert!(!is_positive_int(f64::NAN));
    }

    #[test]
    fn positive_int_text_inputs() {
        assert!(is_positive_int("3"));
        assert!(is_positive_int(" 3 "));
        assert!(!is_positive_int("0"));
        assert!(!is_positive_int("2.5"));
        assert!(!is_positive_int("bad"));
        assert!(!is_positive_int(""));
    }

    #[test]
    fn non_negative_number_numeric_inputs() {
        assert!(is_non_negative_number(0));
        assert!(is_non_negative_number(0.0));
        assert!(!is_non_negative_number(-1));
        assert!(!is_non_negative_number(-0.5));
        assert!(!is_non_negative_number(f64::NAN));
    }

    #[test]
    fn non_negative_number_text_inputs() {
        assert!(is_non_negative_number("2.5"));
        assert!(is_non_negative_number(" 0 "));
        assert!(!is_non_negative_number("-1"));
        assert!(!is_non_negative_number("bad"));
    }

    #[test]
    fn non_empty_trims() {
        assert!(is_non_empty(Some("hello")));
        assert!(!is_non_empty(Some("   ")));
        assert!(!is_non_empty(Some("")));
        assert!(!is_non_empty(None));
    }

    #[test]
    fn string_reference_converts() {
        let owned = String::from("7");
        assert!(is_positive_int(&owned));
    }
}
