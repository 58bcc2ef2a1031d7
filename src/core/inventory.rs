//! SKU-keyed inventory store
//!
//! Entries keep insertion order. No two live entries may hold the same catalog
//! item: adding a part whose kind and characteristics match an existing entry
//! tops up that entry instead of creating a second SKU.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, Level};

use crate::core::error::InventoryError;
use crate::core::part::Part;
use crate::core::tracker::{Ranking, UsageTracker};
use crate::entities::PartRecord;

/// A stocked part and how many of it are on hand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryEntry {
    part: PartRecord,
    quantity: u64,
}

impl InventoryEntry {
    pub fn part(&self) -> &PartRecord {
        &self.part
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    fn restock(&mut self, quantity: u64) -> Result<u64, InventoryError> {
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or(InventoryError::InvalidQuantity {
                quantity: i64::try_from(quantity).unwrap_or(i64::MAX),
            })?;
        self.part.touch();
        Ok(self.quantity)
    }
}

/// What `add_part` did with the part it was given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was created under the requested SKU
    Created { sku: String, quantity: u64 },
    /// The part matched an existing entry, which was topped up instead
    Merged {
        sku: String,
        added: u64,
        quantity: u64,
    },
}

impl AddOutcome {
    /// The SKU that now holds the part
    pub fn sku(&self) -> &str {
        match self {
            AddOutcome::Created { sku, .. } | AddOutcome::Merged { sku, .. } => sku,
        }
    }
}

/// What happens to a SKU's counters when its entry is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterRetention {
    /// Counters are removed together with the entry
    #[default]
    Drop,
    /// Counters stay behind as history and still show up in rankings
    Keep,
}

impl fmt::Display for CounterRetention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterRetention::Drop => write!(f, "drop"),
            CounterRetention::Keep => write!(f, "keep"),
        }
    }
}

/// The parts inventory
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub(crate) entries: IndexMap<String, InventoryEntry>,
    tracker: UsageTracker,
    retention: CounterRetention,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: CounterRetention) -> Self {
        Self {
            retention,
            ..Self::default()
        }
    }

    /// Add a part under `sku` with `quantity` on hand
    ///
    /// When an entry already holds the same catalog item, `quantity` is added
    /// to that entry and no new SKU is created.
    #[tracing::instrument(level = Level::DEBUG, skip(self, part), fields(kind = %part.kind()))]
    pub fn add_part(
        &mut self,
        sku: &str,
        part: PartRecord,
        quantity: i64,
    ) -> Result<AddOutcome, InventoryError> {
        let quantity = non_negative(quantity)?;

        if self.entries.contains_key(sku) {
            return Err(InventoryError::DuplicateSku {
                sku: sku.to_string(),
            });
        }

        if let Some((existing, entry)) = self
            .entries
            .iter_mut()
            .find(|(_, entry)| entry.part.same_item(&part))
        {
            let total = entry.restock(quantity)?;
            debug!(existing = %existing, added = quantity, total, "merged duplicate part");
            return Ok(AddOutcome::Merged {
                sku: existing.clone(),
                added: quantity,
                quantity: total,
            });
        }

        self.entries
            .insert(sku.to_string(), InventoryEntry { part, quantity });
        self.tracker.register(sku);
        debug!(quantity, "created entry");

        Ok(AddOutcome::Created {
            sku: sku.to_string(),
            quantity,
        })
    }

    /// Add stock to an existing entry, returning the new quantity
    pub fn add_inventory(&mut self, sku: &str, quantity: i64) -> Result<u64, InventoryError> {
        let entry = self
            .entries
            .get_mut(sku)
            .ok_or_else(|| InventoryError::unknown_sku(sku))?;
        let quantity = non_negative(quantity)?;

        let total = entry.restock(quantity)?;
        debug!(sku, added = quantity, total, "restocked");
        Ok(total)
    }

    pub fn get_quantity(&self, sku: &str) -> Result<u64, InventoryError> {
        self.entry(sku).map(InventoryEntry::quantity)
    }

    pub fn get_part(&self, sku: &str) -> Result<&PartRecord, InventoryError> {
        self.entry(sku).map(InventoryEntry::part)
    }

    pub fn entry(&self, sku: &str) -> Result<&InventoryEntry, InventoryError> {
        self.entries
            .get(sku)
            .ok_or_else(|| InventoryError::unknown_sku(sku))
    }

    /// An owned snapshot of every entry, in insertion order
    pub fn get_inventory(&self) -> IndexMap<String, InventoryEntry> {
        self.entries.clone()
    }

    /// Borrow every entry in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InventoryEntry)> {
        self.entries.iter().map(|(sku, entry)| (sku.as_str(), entry))
    }

    /// Remove an entry, returning it
    pub fn delete_part(&mut self, sku: &str) -> Result<InventoryEntry, InventoryError> {
        let entry = self
            .entries
            .shift_remove(sku)
            .ok_or_else(|| InventoryError::unknown_sku(sku))?;

        if self.retention == CounterRetention::Drop {
            self.tracker.forget(sku);
        }
        debug!(sku, retention = %self.retention, "deleted entry");
        Ok(entry)
    }

    /// Record one use of a live SKU
    ///
    /// Retained counters of deleted SKUs are history only and cannot grow.
    pub fn track_usage(&mut self, sku: &str) -> Result<u64, InventoryError> {
        self.entry(sku)?;
        self.tracker.track_usage(sku)
    }

    pub fn track_out_of_stock(&mut self, sku: &str) -> Result<u64, InventoryError> {
        self.entry(sku)?;
        self.tracker.track_out_of_stock(sku)
    }

    pub fn most_used(&self, n: usize) -> Ranking {
        self.tracker.most_used(n)
    }

    pub fn most_out_of_stock(&self, n: usize) -> Ranking {
        self.tracker.most_out_of_stock(n)
    }

    pub fn tracker(&self) -> &UsageTracker {
        &self.tracker
    }

    pub fn retention(&self) -> CounterRetention {
        self.retention
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn non_negative(quantity: i64) -> Result<u64, InventoryError> {
    u64::try_from(quantity).map_err(|_| InventoryError::InvalidQuantity { quantity })
}
