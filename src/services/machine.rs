use crate::{
    models::{
        BladeAssignment, BladeAssignmentUpdate, MachineBlade, MachineBladeUpdate, MachineStatus,
        MachineStatusUpdate,
    },
    persistence::{memory::MemoryPersistence, Persistence},
};

/// Per-machine state: fitted blade, planned assignment and status.
#[derive(Debug)]
pub struct MachineService {
    pub blade_persistence: Box<dyn Persistence<MachineBlade, MachineBladeUpdate>>,
    pub assignment_persistence: Box<dyn Persistence<BladeAssignment, BladeAssignmentUpdate>>,
    pub status_persistence: Box<dyn Persistence<MachineStatus, MachineStatusUpdate>>,
}

impl MachineService {
    pub fn in_memory() -> Self {
        Self {
            blade_persistence: Box::new(
                MemoryPersistence::<MachineBlade, MachineBladeUpdate>::default(),
            ),
            assignment_persistence: Box::new(
                MemoryPersistence::<BladeAssignment, BladeAssignmentUpdate>::default(),
            ),
            status_persistence: Box::new(
                MemoryPersistence::<MachineStatus, MachineStatusUpdate>::default(),
            ),
        }
    }

    #[tracing::instrument(name = "service::machine::set_blade", skip(self))]
    pub async fn set_blade(&self, update: &MachineBladeUpdate) -> anyhow::Result<MachineBlade> {
        let machine_blade = self.blade_persistence.upsert(update).await?;

        tracing::info!("machine blade set: {:?}", machine_blade);

        Ok(machine_blade)
    }

    #[tracing::instrument(name = "service::machine::assign_blades", skip(self))]
    pub async fn assign_blades(
        &self,
        update: &BladeAssignmentUpdate,
    ) -> anyhow::Result<BladeAssignment> {
        let assignment = self.assignment_persistence.upsert(update).await?;

        tracing::info!("blade assignment set: {:?}", assignment);

        Ok(assignment)
    }

    #[tracing::instrument(name = "service::machine::set_status", skip(self))]
    pub async fn set_status(&self, update: &MachineStatusUpdate) -> anyhow::Result<MachineStatus> {
        let machine_status = self.status_persistence.upsert(update).await?;

        tracing::info!("machine status set: {:?}", machine_status);

        Ok(machine_status)
    }

    #[tracing::instrument(name = "service::machine::list_blades", skip(self))]
    pub async fn list_blades(&self) -> anyhow::Result<Vec<MachineBlade>> {
        self.blade_persistence.list().await
    }

    #[tracing::instrument(name = "service::machine::list_assignments", skip(self))]
    pub async fn list_assignments(&self) -> anyhow::Result<Vec<BladeAssignment>> {
        self.assignment_persistence.list().await
    }

    #[tracing::instrument(name = "service::machine::list_statuses", skip(self))]
    pub async fn list_statuses(&self) -> anyhow::Result<Vec<MachineStatus>> {
        self.status_persistence.list().await
    }

    /// Empties the assignment, blade and status tables, stopping at the first failure.
    #[tracing::instrument(name = "service::machine::clear", skip(self))]
    pub async fn clear(&self) -> anyhow::Result<()> {
        let assignments = self.assignment_persistence.delete_all().await?;
        let blades = self.blade_persistence.delete_all().await?;
        let statuses = self.status_persistence.delete_all().await?;

        tracing::info!(
            "machine state cleared: {assignments} assignments, {blades} blades, {statuses} statuses"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_clear() {
        let machine_service = MachineService::in_memory();

        machine_service
            .set_blade(&MachineBladeUpdate {
                machine_id: Some("M1".to_owned()),
                blade_type: Some("X".to_owned()),
            })
            .await
            .unwrap();
        machine_service
            .assign_blades(&BladeAssignmentUpdate {
                machine_id: Some("M1".to_owned()),
                blade_type: Some("X".to_owned()),
                count: Some(3),
            })
            .await
            .unwrap();
        machine_service
            .set_status(&MachineStatusUpdate {
                machine_id: Some("M1".to_owned()),
                status: Some("running".to_owned()),
            })
            .await
            .unwrap();

        assert_eq!(machine_service.list_blades().await.unwrap().len(), 1);
        assert_eq!(machine_service.list_assignments().await.unwrap().len(), 1);
        assert_eq!(machine_service.list_statuses().await.unwrap().len(), 1);

        machine_service.clear().await.unwrap();

        assert!(machine_service.list_blades().await.unwrap().is_empty());
        assert!(machine_service.list_assignments().await.unwrap().is_empty());
        assert!(machine_service.list_statuses().await.unwrap().is_empty());
    }
}
