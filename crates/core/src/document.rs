//! Document lifecycle rules: status parsing, editability, annulment, and
//! folio generation.
//!
//! Quotes, sales orders, and purchase orders share one lifecycle. Statuses
//! are stored lowercase; anything unrecognized (including blank) loads as
//! pending, which is how historical rows behave.

use serde::{Deserialize, Serialize};

use crate::totals::DocumentTotals;
use crate::types::Timestamp;

/// Lifecycle status of a commercial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pendiente,
    Aprobado,
    Cerrado,
    Anulado,
}

impl DocumentStatus {
    /// Parse a stored status string. Case- and whitespace-tolerant;
    /// unknown or blank values default to pending.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "aprobado" => Self::Aprobado,
            "cerrado" => Self::Cerrado,
            "anulado" => Self::Anulado,
            _ => Self::Pendiente,
        }
    }

    /// Stored (lowercase) representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Aprobado => "aprobado",
            Self::Cerrado => "cerrado",
            Self::Anulado => "anulado",
        }
    }

    /// Display label for list views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Aprobado => "Aprobado",
            Self::Cerrado => "Cerrado",
            Self::Anulado => "Anulado",
        }
    }

    /// Only pending documents accept header/line edits.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Pendiente)
    }

    /// Locked statuses reject any further mutation except annulment
    /// bookkeeping.
    pub fn is_locked(self) -> bool {
        !self.is_editable()
    }
}

/// Totals after a status change: moving to annulled wipes the amounts,
/// every other transition keeps them.
pub fn totals_after_transition(status: DocumentStatus, totals: DocumentTotals) -> DocumentTotals {
    if status == DocumentStatus::Anulado {
        DocumentTotals::zeroed()
    } else {
        totals
    }
}

/// Generate a folio for a new document: `{tipo}-{YYYYMMDD-HHMMSS}`.
///
/// The caller supplies the clock so folio generation stays deterministic
/// in tests.
pub fn generate_folio(doc_type: &str, at: Timestamp) -> String {
    format!("{doc_type}-{}", at.format("%Y%m%d-%H%M%S"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
