//! Usage and out-of-stock event counters with top-N rankings

use indexmap::IndexMap;
use tracing::trace;

use crate::core::error::InventoryError;

/// Default number of rows in a ranking
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// A ranked `(sku, count)` pair
pub type Ranking = Vec<(String, u64)>;

/// Per-SKU event counters
///
/// Both maps keep registration order, which is also the tie-break order of
/// the rankings.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    usage: IndexMap<String, u64>,
    out_of_stock: IndexMap<String, u64>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting for `sku` at zero, resetting any retained history
    pub(crate) fn register(&mut self, sku: &str) {
        self.usage.shift_remove(sku);
        self.out_of_stock.shift_remove(sku);
        self.usage.insert(sku.to_string(), 0);
        self.out_of_stock.insert(sku.to_string(), 0);
    }

    pub(crate) fn forget(&mut self, sku: &str) {
        self.usage.shift_remove(sku);
        self.out_of_stock.shift_remove(sku);
    }

    /// Record one use of `sku`, returning the new count
    pub fn track_usage(&mut self, sku: &str) -> Result<u64, InventoryError> {
        let count = bump(&mut self.usage, sku)?;
        trace!(sku, count, "usage tracked");
        Ok(count)
    }

    /// Record one out-of-stock event for `sku`, returning the new count
    pub fn track_out_of_stock(&mut self, sku: &str) -> Result<u64, InventoryError> {
        let count = bump(&mut self.out_of_stock, sku)?;
        trace!(sku, count, "out of stock tracked");
        Ok(count)
    }

    pub fn usage_count(&self, sku: &str) -> Option<u64> {
        self.usage.get(sku).copied()
    }

    pub fn out_of_stock_count(&self, sku: &str) -> Option<u64> {
        self.out_of_stock.get(sku).copied()
    }

    /// The `n` most used SKUs, highest count first
    pub fn most_used(&self, n: usize) -> Ranking {
        top_n(&self.usage, n)
    }

    /// The `n` SKUs that ran out of stock most often, highest count first
    pub fn most_out_of_stock(&self, n: usize) -> Ranking {
        top_n(&self.out_of_stock, n)
    }

    pub fn len(&self) -> usize {
        self.usage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }
}

fn bump(counter: &mut IndexMap<String, u64>, sku: &str) -> Result<u64, InventoryError> {
    let count = counter
        .get_mut(sku)
        .ok_or_else(|| InventoryError::unknown_sku(sku))?;
    *count = count.saturating_add(1);
    Ok(*count)
}

fn top_n(counter: &IndexMap<String, u64>, n: usize) -> Ranking {
    let mut ranked: Ranking = counter
        .iter()
        .map(|(sku, count)| (sku.clone(), *count))
        .collect();
    // sort_by is stable: equal counts stay in registration order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
