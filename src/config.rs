//! Report configuration.
//!
//! The expiry slider bounds and default window mirror the dashboard UI
//! defaults; they are configuration, not part of the data contract.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data_handling::{ExpiryRange, InventoryFilter, Selection};
use crate::error::ReportError;

/// Parameters for building a SmartExpiry report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Path to the inventory CSV.
    pub source: String,
    /// Store selection; `"All"` disables the predicate.
    pub store: String,
    /// Category selection; `"All"` disables the predicate.
    pub category: String,
    /// Inclusive days-to-expiry window applied by default.
    pub expiry_min_days: i64,
    pub expiry_max_days: i64,
    /// Upper bound offered by the days-to-expiry slider.
    pub slider_max_days: i64,
    /// Number of rows shown in the high-risk table.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source: "smartexpiry_enriched_inventory.csv".to_string(),
            store: "All".to_string(),
            category: "All".to_string(),
            expiry_min_days: 0,
            expiry_max_days: 7,
            slider_max_days: 30,
            top_n: 5,
        }
    }
}

impl ReportConfig {
    /// Build the filter this configuration describes. Fails with an
    /// `InvalidArgument` when the expiry window is inverted or negative.
    pub fn filter(&self) -> Result<InventoryFilter, ReportError> {
        let expiry = ExpiryRange::new(self.expiry_min_days, self.expiry_max_days)?;
        Ok(InventoryFilter::new(
            Selection::from_label(&self.store),
            Selection::from_label(&self.category),
            expiry,
        ))
    }
}

/// Load a report configuration from a JSON file.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ReportConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
