use crate::{
    models::{InventoryItem, InventoryUpdate},
    persistence::InventoryPersistence,
};

#[derive(Debug)]
pub struct InventoryService {
    pub persistence: Box<dyn InventoryPersistence>,
}

impl InventoryService {
    #[tracing::instrument(name = "service::inventory::upsert", skip(self))]
    pub async fn upsert(&self, update: &InventoryUpdate) -> anyhow::Result<InventoryItem> {
        let item = self.persistence.upsert(update).await?;

        tracing::info!("inventory updated: {:?}", item);

        Ok(item)
    }

    #[tracing::instrument(name = "service::inventory::list", skip(self))]
    pub async fn list(&self) -> anyhow::Result<Vec<InventoryItem>> {
        self.persistence.list().await
    }

    #[tracing::instrument(name = "service::inventory::zero_counts", skip(self))]
    pub async fn zero_counts(&self) -> anyhow::Result<u64> {
        self.persistence.zero_counts().await
    }
}
