//! Load-once caching of inventory tables keyed by source content.
//!
//! The dashboard reloads its projections on every interaction, so repeated
//! loads of the same unchanged CSV must be free. The cache keys each source
//! path to the SHA-256 digest of its bytes: a hit returns the already-parsed
//! table, a digest mismatch reparses and replaces the entry. Invalidation is
//! manual; nothing expires on its own.
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use sha2::{Digest, Sha256};

use crate::data_handling::InventoryTable;
use crate::error::ReportError;
use crate::io::read_inventory_csv;

struct CacheEntry {
    digest: [u8; 32],
    table: Arc<InventoryTable>,
}

/// Content-addressed cache of loaded inventory tables.
///
/// Hands out `Arc<InventoryTable>` so concurrent readers can share a table;
/// sharing is safe because tables are never mutated after construction.
#[derive(Default)]
pub struct TableCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table, reusing the cached parse when the source bytes are
    /// unchanged. The derivation date is fixed when the entry is first
    /// parsed and sticks until the source changes or the entry is
    /// invalidated.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<InventoryTable>, ReportError> {
        self.load_as_of(path, Local::now().date_naive())
    }

    /// Like `load`, with an explicit derivation date for new parses.
    pub fn load_as_of<P: AsRef<Path>>(
        &mut self,
        path: P,
        as_of: NaiveDate,
    ) -> Result<Arc<InventoryTable>, ReportError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let digest: [u8; 32] = Sha256::digest(&bytes).into();

        if let Some(entry) = self.entries.get(path) {
            if entry.digest == digest {
                log::debug!("Cache hit for {}", path.display());
                return Ok(Arc::clone(&entry.table));
            }
            log::debug!("Source changed, reloading {}", path.display());
        }

        let table = Arc::new(read_inventory_csv(bytes.as_slice(), as_of)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                digest,
                table: Arc::clone(&table),
            },
        );
        Ok(table)
    }

    /// Drop the cached entry for one source.
    pub fn invalidate<P: AsRef<Path>>(&mut self, path: P) {
        self.entries.remove(path.as_ref());
    }

    /// Drop all cached entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
