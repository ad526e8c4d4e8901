//! Per-product critical stock thresholds (`inventory_thresholds.json`).
//!
//! Products without an entry fall back to the caller-supplied defaults
//! (normally the global limits from [`crate::AppSettings`]). An unreadable
//! or malformed file degrades to an empty map with a warning — threshold
//! overrides are a convenience, never worth blocking startup over.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use caja_core::types::ProductId;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StoreError;

/// Thresholds file name inside the data directory.
pub const THRESHOLDS_FILE: &str = "inventory_thresholds.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ThresholdEntry {
    min: i64,
    max: i64,
}

/// File-backed map of per-product min/max overrides.
#[derive(Debug)]
pub struct ThresholdStore {
    path: PathBuf,
    entries: BTreeMap<ProductId, ThresholdEntry>,
}

impl ThresholdStore {
    /// Load the store from `data_dir`. Missing or malformed files yield
    /// an empty store.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(THRESHOLDS_FILE);
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Malformed thresholds file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable thresholds file, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// Thresholds for a product, falling back to the supplied defaults.
    pub fn get(&self, product_id: ProductId, default_min: i64, default_max: i64) -> (i64, i64) {
        match self.entries.get(&product_id) {
            Some(entry) => (entry.min, entry.max),
            None => (default_min, default_max),
        }
    }

    /// Set a product's thresholds and persist.
    pub fn set(&mut self, product_id: ProductId, min: i64, max: i64) -> Result<(), StoreError> {
        self.entries.insert(product_id, ThresholdEntry { min, max });
        self.save()
    }

    /// Remove a product's override and persist. No-op when absent.
    pub fn clear(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        if self.entries.remove(&product_id).is_some() {
            self.save()?;
        }
        Ok(())
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::format(THRESHOLDS_FILE, e))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
