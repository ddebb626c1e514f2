use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    models::{InventoryItem, InventoryUpdate},
    persistence::InventoryPersistence,
};

type InventoryKey = (String, String);

#[derive(Debug, Default)]
pub struct InventoryMemoryPersistence {
    items: Arc<Mutex<BTreeMap<InventoryKey, InventoryItem>>>,
}

#[async_trait]
impl InventoryPersistence for InventoryMemoryPersistence {
    async fn upsert(&self, update: &InventoryUpdate) -> anyhow::Result<InventoryItem> {
        let item = InventoryItem::try_from_update(update)?;

        let mut locked_items = self.get_items_locked()?;

        locked_items.insert(item.key(), item.clone());

        Ok(item)
    }

    async fn list(&self) -> anyhow::Result<Vec<InventoryItem>> {
        let locked_items = self.get_items_locked()?;

        Ok(locked_items.values().cloned().collect())
    }

    async fn zero_counts(&self) -> anyhow::Result<u64> {
        let mut locked_items = self.get_items_locked()?;

        for item in locked_items.values_mut() {
            item.fixed = Some(0);
            item.available = Some(0);
        }

        Ok(locked_items.len() as u64)
    }
}

impl InventoryMemoryPersistence {
    fn get_items_locked(
        &self,
    ) -> anyhow::Result<MutexGuard<'_, BTreeMap<InventoryKey, InventoryItem>>> {
        match self.items.lock() {
            Ok(locked_items) => Ok(locked_items),
            Err(_) => Err(anyhow::anyhow!("failed to acquire lock")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(group_name: &str, blade_type: &str, fixed: i32, available: i32) -> InventoryUpdate {
        InventoryUpdate {
            group_name: Some(group_name.to_owned()),
            blade_type: Some(blade_type.to_owned()),
            fixed: Some(fixed),
            available: Some(available),
        }
    }

    #[tokio::test]
    async fn test_upsert_overwrites_counts() {
        let inventory_persistence = InventoryMemoryPersistence::default();

        inventory_persistence
            .upsert(&update("A", "X", 10, 4))
            .await
            .unwrap();
        let item = inventory_persistence
            .upsert(&update("A", "X", 8, 2))
            .await
            .unwrap();

        assert_eq!(item.fixed, Some(8));

        let items = inventory_persistence.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].available, Some(2));
    }

    #[tokio::test]
    async fn test_zero_counts_keeps_rows() {
        let inventory_persistence = InventoryMemoryPersistence::default();

        inventory_persistence
            .upsert(&update("A", "X", 10, 4))
            .await
            .unwrap();
        inventory_persistence
            .upsert(&update("B", "Y", 3, 3))
            .await
            .unwrap();

        let zeroed_count = inventory_persistence.zero_counts().await.unwrap();
        assert_eq!(zeroed_count, 2);

        let items = inventory_persistence.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items
            .iter()
            .all(|item| item.fixed == Some(0) && item.available == Some(0)));
    }
}
