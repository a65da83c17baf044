//! Inventory records, tables, and filter/projection operations.
//!
//! This module defines `InventoryRecord` and `InventoryTable` and contains
//! the filter predicates and row projections consumed by the report layer.
//! Derived columns are computed once when a record is built against the
//! load date and are never recomputed by later filtering.
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::ReportError;

/// Binary waste-risk classification of an inventory row.
///
/// A row is `High` risk iff its predicted unsold units are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum WasteRisk {
    High,
    Low,
}

impl WasteRisk {
    pub fn label(&self) -> &'static str {
        match self {
            WasteRisk::High => "High",
            WasteRisk::Low => "Low",
        }
    }
}

impl std::fmt::Display for WasteRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the inventory dataset.
///
/// Base attributes come straight from the CSV; the trailing four fields are
/// derived against the load date and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub item: String,
    pub category: String,
    pub store_location: String,
    pub stock: u32,
    pub expiry_date: NaiveDate,
    pub predicted_unsold_units: f64,
    pub discount_pct: f64,
    /// Whole days until expiry; negative for already-expired rows.
    pub days_to_expiry: i64,
    pub waste_risk: WasteRisk,
    /// Discount percent rendered for display, e.g. `"10%"`.
    pub suggested_discount: String,
    /// True when the row is near expiry (days_to_expiry <= 1) and should be
    /// routed to donation rather than sale.
    pub donation_recommended: bool,
}

impl InventoryRecord {
    /// Build a record from its base attributes, deriving the computed
    /// columns against `as_of` (the load date).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item: String,
        category: String,
        store_location: String,
        stock: u32,
        expiry_date: NaiveDate,
        predicted_unsold_units: f64,
        discount_pct: f64,
        as_of: NaiveDate,
    ) -> Self {
        let days_to_expiry = expiry_date.signed_duration_since(as_of).num_days();
        let waste_risk = if predicted_unsold_units > 0.0 {
            WasteRisk::High
        } else {
            WasteRisk::Low
        };
        InventoryRecord {
            item,
            category,
            store_location,
            stock,
            expiry_date,
            predicted_unsold_units,
            suggested_discount: format_discount(discount_pct),
            discount_pct,
            days_to_expiry,
            waste_risk,
            donation_recommended: days_to_expiry <= 1,
        }
    }
}

/// Render a discount percent the way the report displays it: whole numbers
/// without a decimal point, anything else as-is.
fn format_discount(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{:.0}%", pct)
    } else {
        format!("{}%", pct)
    }
}

/// Sidebar-style selection: match everything, or one exact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Only(String),
}

impl Selection {
    /// Build from the UI sentinel: `"All"` (case-insensitive) disables the
    /// predicate, any other label is an exact match.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(label.trim().to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

/// Inclusive bounds on `days_to_expiry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryRange {
    min_days: i64,
    max_days: i64,
}

impl ExpiryRange {
    /// Validate and build a range. The contract is `0 <= min <= max`;
    /// anything else is an `InvalidArgument`, never a silently empty filter.
    pub fn new(min_days: i64, max_days: i64) -> Result<Self, ReportError> {
        if min_days < 0 {
            return Err(ReportError::InvalidArgument(format!(
                "expiry range min_days {} is negative",
                min_days
            )));
        }
        if min_days > max_days {
            return Err(ReportError::InvalidArgument(format!(
                "expiry range min_days {} exceeds max_days {}",
                min_days, max_days
            )));
        }
        Ok(ExpiryRange { min_days, max_days })
    }

    pub fn min_days(&self) -> i64 {
        self.min_days
    }

    pub fn max_days(&self) -> i64 {
        self.max_days
    }

    pub fn contains(&self, days: i64) -> bool {
        days >= self.min_days && days <= self.max_days
    }
}

/// The three user-selected predicates, combined with AND semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryFilter {
    pub store: Selection,
    pub category: Selection,
    pub expiry: ExpiryRange,
}

impl InventoryFilter {
    pub fn new(store: Selection, category: Selection, expiry: ExpiryRange) -> Self {
        InventoryFilter {
            store,
            category,
            expiry,
        }
    }

    fn accepts(&self, record: &InventoryRecord) -> bool {
        self.store.matches(&record.store_location)
            && self.category.matches(&record.category)
            && self.expiry.contains(record.days_to_expiry)
    }
}

/// The in-memory inventory dataset.
///
/// Immutable after load: filtering produces a new table holding copies of
/// the matching rows and never touches the source. The `as_of` date the
/// derived columns were computed against travels with the table.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
    as_of: NaiveDate,
}

impl InventoryTable {
    pub fn new(records: Vec<InventoryRecord>, as_of: NaiveDate) -> Self {
        InventoryTable { records, as_of }
    }

    /// The load date the derived columns were computed against.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply all three predicates, preserving source row order.
    ///
    /// Returns a new table; an empty result is a valid table, not an error.
    pub fn filter(&self, filter: &InventoryFilter) -> InventoryTable {
        let records = self
            .records
            .iter()
            .filter(|record| filter.accepts(record))
            .cloned()
            .collect();
        InventoryTable {
            records,
            as_of: self.as_of,
        }
    }

    /// High-risk rows ordered by descending predicted unsold units, at most
    /// `n` of them. The sort is stable, so ties keep their input order.
    pub fn top_risk_items(&self, n: usize) -> Vec<&InventoryRecord> {
        let mut rows: Vec<&InventoryRecord> = self
            .records
            .iter()
            .filter(|record| record.waste_risk == WasteRisk::High)
            .collect();
        rows.sort_by(|a, b| {
            b.predicted_unsold_units
                .partial_cmp(&a.predicted_unsold_units)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(n);
        rows
    }

    /// Rows flagged for donation, in source order. An empty result means no
    /// action is needed today.
    pub fn donation_candidates(&self) -> Vec<&InventoryRecord> {
        self.records
            .iter()
            .filter(|record| record.donation_recommended)
            .collect()
    }

    /// Sorted unique store locations (select-box options).
    pub fn stores(&self) -> Vec<String> {
        self.unique_values(|record| &record.store_location)
    }

    /// Sorted unique categories (select-box options).
    pub fn categories(&self) -> Vec<String> {
        self.unique_values(|record| &record.category)
    }

    fn unique_values<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&InventoryRecord) -> &String,
    {
        let set: BTreeSet<&String> = self.records.iter().map(field).collect();
        set.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::format_discount;

    #[test]
    fn discount_formatting() {
        assert_eq!(format_discount(10.0), "10%");
        assert_eq!(format_discount(0.0), "0%");
        assert_eq!(format_discount(12.5), "12.5%");
    }
}
