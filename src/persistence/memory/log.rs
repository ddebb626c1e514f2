use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    models::{LogEntry, NewLogEntry},
    persistence::LogPersistence,
};

#[derive(Debug, Default)]
struct LogTable {
    entries: Vec<LogEntry>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct LogMemoryPersistence {
    table: Arc<Mutex<LogTable>>,
}

#[async_trait]
impl LogPersistence for LogMemoryPersistence {
    async fn create(&self, new_entry: &NewLogEntry) -> anyhow::Result<LogEntry> {
        let mut locked_table = self.get_table_locked()?;

        locked_table.last_id += 1;
        let entry = LogEntry::new(locked_table.last_id, new_entry, Utc::now());

        locked_table.entries.push(entry.clone());

        Ok(entry)
    }

    async fn list(&self) -> anyhow::Result<Vec<LogEntry>> {
        let locked_table = self.get_table_locked()?;

        let mut entries = locked_table.entries.clone();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(entries)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<Option<LogEntry>> {
        let mut locked_table = self.get_table_locked()?;

        let position = locked_table.entries.iter().position(|entry| entry.id == id);

        Ok(position.map(|position| locked_table.entries.remove(position)))
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        let mut locked_table = self.get_table_locked()?;

        let deleted_count = locked_table.entries.len() as u64;
        locked_table.entries.clear();

        Ok(deleted_count)
    }
}

impl LogMemoryPersistence {
    fn get_table_locked(&self) -> anyhow::Result<MutexGuard<'_, LogTable>> {
        match self.table.lock() {
            Ok(locked_table) => Ok(locked_table),
            Err(_) => Err(anyhow::anyhow!("failed to acquire lock")),
        }
    }
}
