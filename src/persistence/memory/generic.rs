use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    fmt::Debug,
    marker::PhantomData,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::persistence::{PersistableModel, Persistence};

#[derive(Debug)]
pub struct MemoryPersistence<Model, Update>
where
    Model: PersistableModel<Update>,
{
    models: Arc<Mutex<BTreeMap<String, Model>>>,

    _phantom: PhantomData<fn(&Update)>,
}

#[async_trait]
impl<Model, Update> Persistence<Model, Update> for MemoryPersistence<Model, Update>
where
    Model: PersistableModel<Update> + 'static,
    Update: Debug + Send + Sync + 'static,
{
    async fn upsert(&self, update: &Update) -> anyhow::Result<Model> {
        let model = Model::new(update)?;

        let mut locked_models = self.get_models_locked()?;

        locked_models.insert(model.get_id(), model.clone());

        Ok(model)
    }

    async fn list(&self) -> anyhow::Result<Vec<Model>> {
        let locked_models = self.get_models_locked()?;

        let models = locked_models.values().cloned().collect();

        Ok(models)
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        let mut locked_models = self.get_models_locked()?;

        let deleted_count = locked_models.len() as u64;
        locked_models.clear();

        Ok(deleted_count)
    }
}

impl<Model, Update> Default for MemoryPersistence<Model, Update>
where
    Model: PersistableModel<Update>,
{
    fn default() -> Self {
        Self {
            models: Arc::new(Mutex::new(BTreeMap::new())),

            _phantom: PhantomData,
        }
    }
}

impl<Model, Update> MemoryPersistence<Model, Update>
where
    Model: PersistableModel<Update>,
{
    fn get_models_locked(&self) -> anyhow::Result<MutexGuard<'_, BTreeMap<String, Model>>> {
        match self.models.lock() {
            Ok(locked_models) => Ok(locked_models),
            Err(_) => Err(anyhow::anyhow!("failed to acquire lock")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{MachineStatus, MachineStatusUpdate};

    fn status_update(machine_id: Option<&str>, status: &str) -> MachineStatusUpdate {
        MachineStatusUpdate {
            machine_id: machine_id.map(str::to_owned),
            status: Some(status.to_owned()),
        }
    }

    #[tokio::test]
    async fn test_upsert_list_delete_all() {
        let status_persistence = MemoryPersistence::<MachineStatus, MachineStatusUpdate>::default();

        let created = status_persistence
            .upsert(&status_update(Some("M1"), "running"))
            .await
            .unwrap();
        assert_eq!(created.machine_id, "M1");

        status_persistence
            .upsert(&status_update(Some("M2"), "idle"))
            .await
            .unwrap();

        let statuses = status_persistence.list().await.unwrap();
        assert_eq!(statuses.len(), 2);

        let deleted_count = status_persistence.delete_all().await.unwrap();
        assert_eq!(deleted_count, 2);

        assert!(status_persistence.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let status_persistence = MemoryPersistence::<MachineStatus, MachineStatusUpdate>::default();
        let update = status_update(Some("M1"), "running");

        status_persistence.upsert(&update).await.unwrap();
        let first = status_persistence.list().await.unwrap();

        status_persistence.upsert(&update).await.unwrap();
        let second = status_persistence.list().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_without_key_is_rejected() {
        let status_persistence = MemoryPersistence::<MachineStatus, MachineStatusUpdate>::default();

        let result = status_persistence
            .upsert(&status_update(None, "running"))
            .await;

        assert!(result.is_err());
        assert!(status_persistence.list().await.unwrap().is_empty());
    }
}
