//! Core module - part model, inventory store, search and usage tracking

pub mod config;
pub mod error;
pub mod inventory;
pub mod part;
pub mod query;
pub mod tracker;

pub use config::Config;
pub use error::InventoryError;
pub use inventory::{AddOutcome, CounterRetention, Inventory, InventoryEntry};
pub use part::{CharValue, Characteristics, FieldSpec, FieldType, Part, PartKind};
pub use query::SearchFilter;
pub use tracker::{Ranking, UsageTracker, DEFAULT_RANK_LIMIT};
