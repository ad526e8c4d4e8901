//! Persisted document number sequences (`sequences.toml`).
//!
//! The purchase-order counter survives restarts; each allocation returns
//! the value being used and persists the increment before handing the
//! number out, so two consecutive allocations can never print the same
//! folio even if the process dies in between.

use std::fs;
use std::path::{Path, PathBuf};

use caja_core::numbering::po_number;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StoreError;

/// Sequences file name inside the data directory.
pub const SEQUENCES_FILE: &str = "sequences.toml";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
struct Sequences {
    po_next: u64,
}

/// File-backed allocator for sequential document numbers.
#[derive(Debug)]
pub struct SequenceStore {
    path: PathBuf,
    sequences: Sequences,
}

impl SequenceStore {
    /// Load the store from `data_dir`. Missing or malformed files start
    /// the sequence at zero.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SEQUENCES_FILE);
        let sequences = match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(sequences) => sequences,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Malformed sequences file, restarting at 0");
                    Sequences::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Sequences::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable sequences file, restarting at 0");
                Sequences::default()
            }
        };
        Self { path, sequences }
    }

    /// The sequence value the next purchase order will use.
    pub fn peek_po(&self) -> u64 {
        self.sequences.po_next
    }

    /// Allocate the next purchase order number (`OC-000000`, `OC-000001`,
    /// ...). The increment is persisted before the number is returned;
    /// when persisting fails the counter is left untouched, so a later
    /// allocation reuses the value instead of skipping it.
    pub fn next_po_number(&mut self) -> Result<String, StoreError> {
        let used = self.sequences.po_next;
        self.sequences.po_next = used + 1;
        if let Err(e) = self.save() {
            self.sequences.po_next = used;
            return Err(e);
        }
        Ok(po_number(used))
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text =
            toml::to_string(&self.sequences).map_err(|e| StoreError::format(SEQUENCES_FILE, e))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
