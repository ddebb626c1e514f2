use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::{InventoryItem, InventoryUpdate, LogEntry, NewLogEntry};

pub mod memory;
pub mod relational;

/// Storage for a table keyed by a single natural key.
#[async_trait]
pub trait Persistence<Model, Update>: Debug + Send + Sync {
    async fn upsert(&self, update: &Update) -> anyhow::Result<Model>;
    async fn list(&self) -> anyhow::Result<Vec<Model>>;
    async fn delete_all(&self) -> anyhow::Result<u64>;
}

pub trait PersistableModel<Update>: Clone + Debug + Send + Sync + Sized {
    fn new(update: &Update) -> anyhow::Result<Self>;
    fn get_id(&self) -> String;
}

#[async_trait]
pub trait InventoryPersistence: Debug + Send + Sync {
    async fn upsert(&self, update: &InventoryUpdate) -> anyhow::Result<InventoryItem>;
    async fn list(&self) -> anyhow::Result<Vec<InventoryItem>>;

    /// Sets `fixed` and `available` to zero on every row, keeping the rows.
    async fn zero_counts(&self) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait LogPersistence: Debug + Send + Sync {
    async fn create(&self, new_entry: &NewLogEntry) -> anyhow::Result<LogEntry>;

    /// Newest entries first.
    async fn list(&self) -> anyhow::Result<Vec<LogEntry>>;
    async fn delete(&self, id: i64) -> anyhow::Result<Option<LogEntry>>;
    async fn delete_all(&self) -> anyhow::Result<u64>;
}
