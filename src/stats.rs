//! Aggregate projections over an inventory table.
//!
//! These feed the report charts: a waste-risk split and an expiry histogram.
use std::collections::BTreeMap;

use crate::data_handling::{InventoryTable, WasteRisk};

/// Row counts per waste-risk bucket.
///
/// Both buckets are always present; a bucket with no rows counts 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskDistribution {
    pub high: usize,
    pub low: usize,
}

impl RiskDistribution {
    pub fn total(&self) -> usize {
        self.high + self.low
    }

    /// Label/count pairs in a fixed order, for charting.
    pub fn as_pairs(&self) -> [(&'static str, usize); 2] {
        [("High", self.high), ("Low", self.low)]
    }
}

/// Count rows per waste-risk value.
pub fn risk_distribution(table: &InventoryTable) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for record in table.records() {
        match record.waste_risk {
            WasteRisk::High => distribution.high += 1,
            WasteRisk::Low => distribution.low += 1,
        }
    }
    distribution
}

/// Group rows by days-to-expiry and count each bucket, ascending by days.
/// Negative buckets (already expired) are included, not filtered.
pub fn expiry_distribution(table: &InventoryTable) -> Vec<(i64, usize)> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for record in table.records() {
        *counts.entry(record.days_to_expiry).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
