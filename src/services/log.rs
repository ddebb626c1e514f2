use crate::{
    models::{LogEntry, NewLogEntry},
    persistence::LogPersistence,
};

#[derive(Debug)]
pub struct LogService {
    pub persistence: Box<dyn LogPersistence>,
}

impl LogService {
    #[tracing::instrument(name = "service::log::create", skip(self))]
    pub async fn create(&self, new_entry: &NewLogEntry) -> anyhow::Result<LogEntry> {
        let entry = self.persistence.create(new_entry).await?;

        tracing::info!("log entry created: {}", entry.id);

        Ok(entry)
    }

    #[tracing::instrument(name = "service::log::list", skip(self))]
    pub async fn list(&self) -> anyhow::Result<Vec<LogEntry>> {
        self.persistence.list().await
    }

    /// Returns `None` when no entry had the given id.
    #[tracing::instrument(name = "service::log::delete", skip(self))]
    pub async fn delete(&self, id: i64) -> anyhow::Result<Option<LogEntry>> {
        let entry = self.persistence.delete(id).await?;

        match &entry {
            Some(entry) => tracing::info!("log entry deleted: {}", entry.id),
            None => tracing::info!("log entry {id} not found"),
        }

        Ok(entry)
    }

    #[tracing::instrument(name = "service::log::delete_all", skip(self))]
    pub async fn delete_all(&self) -> anyhow::Result<u64> {
        self.persistence.delete_all().await
    }
}
