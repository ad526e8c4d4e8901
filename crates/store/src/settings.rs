//! Application settings file (`settings.toml`).
//!
//! Three sections: company identity (printed on documents), document
//! defaults, and inventory limits. Missing file means first run — defaults
//! are written out so the operator has something to edit.

use std::fs;
use std::path::{Path, PathBuf};

use caja_core::validation::{email_is_valid, is_non_empty, is_valid_rut};
use caja_core::CoreError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::StoreError;

/// Settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Refresh interval clamp bounds (milliseconds).
pub const MIN_REFRESH_MS: u64 = 500;
pub const MAX_REFRESH_MS: u64 = 60_000;

/// Company identity block printed on documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub rut: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Mi Empresa".to_string(),
            rut: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            logo: String::new(),
        }
    }
}

impl CompanyInfo {
    /// Validate operator-edited company data before saving.
    ///
    /// Name is required; RUT and email are optional but must pass their
    /// respective shape/checksum validators when present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !is_non_empty(Some(self.name.as_str())) {
            return Err(CoreError::Validation(
                "Company name must not be empty".to_string(),
            ));
        }
        if is_non_empty(Some(self.rut.as_str())) && !is_valid_rut(&self.rut) {
            return Err(CoreError::Validation(format!(
                "Invalid company RUT: {}",
                self.rut
            )));
        }
        if !email_is_valid(Some(self.email.as_str())) {
            return Err(CoreError::Validation(format!(
                "Invalid company email: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Defaults stamped onto generated purchase orders and quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoSettings {
    pub footer_terms: String,
    pub payment_method: String,
}

impl Default for PoSettings {
    fn default() -> Self {
        Self {
            footer_terms: "Gracias por su preferencia.".to_string(),
            payment_method: "Crédito 30 días".to_string(),
        }
    }
}

/// Global inventory limits and view refresh cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySettings {
    pub critical_min: i64,
    pub critical_max: i64,
    pub refresh_ms: u64,
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            critical_min: 5,
            critical_max: 999_999,
            refresh_ms: 3000,
        }
    }
}

impl InventorySettings {
    /// Set critical limits, normalizing so `0 <= min <= max`.
    pub fn set_limits(&mut self, min: i64, max: i64) {
        let min = min.max(0);
        self.critical_min = min;
        self.critical_max = max.max(min);
    }

    /// Effective limits, re-normalized in case the file was hand-edited.
    pub fn limits(&self) -> (i64, i64) {
        let min = self.critical_min.max(0);
        (min, self.critical_max.max(min))
    }

    /// Set the inventory view refresh interval, clamped to
    /// `500..=60_000` ms.
    pub fn set_refresh_ms(&mut self, ms: u64) {
        self.refresh_ms = ms.clamp(MIN_REFRESH_MS, MAX_REFRESH_MS);
    }
}

/// The whole settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub company: CompanyInfo,
    pub po: PoSettings,
    pub inventory: InventorySettings,
}

impl AppSettings {
    /// Load settings from `data_dir`, writing defaults on first run.
    ///
    /// A malformed file is an error — settings are operator-edited and
    /// silently discarding them would lose data.
    pub fn load_or_create(data_dir: &Path) -> Result<Self, StoreError> {
        let path = Self::path(data_dir);
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            toml::from_str(&text).map_err(|e| StoreError::format(SETTINGS_FILE, e))
        } else {
            warn!(path = %path.display(), "No settings file, creating defaults");
            let settings = Self::default();
            settings.save(data_dir)?;
            Ok(settings)
        }
    }

    /// Save settings to `data_dir`, creating the directory if needed.
    pub fn save(&self, data_dir: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(data_dir)?;
        let path = Self::path(data_dir);
        let text = toml::to_string_pretty(self).map_err(|e| StoreError::format(SETTINGS_FILE, e))?;
        fs::write(&path, text)?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
