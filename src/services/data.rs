use sqlx::PgPool;
use std::sync::Arc;

use crate::{
    models::DataSnapshot,
    persistence::{
        memory::{InventoryMemoryPersistence, LogMemoryPersistence},
        relational::{
            BladeAssignmentRelationalPersistence, InventoryRelationalPersistence,
            LogRelationalPersistence, MachineBladeRelationalPersistence,
            MachineStatusRelationalPersistence,
        },
    },
};

use super::{InventoryService, LogService, MachineService};

/// Operations spanning every table: the aggregate read and the bulk reset.
#[derive(Debug)]
pub struct DataService {
    pub inventory_service: Arc<InventoryService>,
    pub log_service: Arc<LogService>,
    pub machine_service: Arc<MachineService>,
}

impl DataService {
    pub fn relational(db: Arc<PgPool>) -> Self {
        let inventory_service = Arc::new(InventoryService {
            persistence: Box::new(InventoryRelationalPersistence { db: Arc::clone(&db) }),
        });

        let log_service = Arc::new(LogService {
            persistence: Box::new(LogRelationalPersistence { db: Arc::clone(&db) }),
        });

        let machine_service = Arc::new(MachineService {
            blade_persistence: Box::new(MachineBladeRelationalPersistence { db: Arc::clone(&db) }),
            assignment_persistence: Box::new(BladeAssignmentRelationalPersistence {
                db: Arc::clone(&db),
            }),
            status_persistence: Box::new(MachineStatusRelationalPersistence { db }),
        });

        Self {
            inventory_service,
            log_service,
            machine_service,
        }
    }

    /// Storage that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            inventory_service: Arc::new(InventoryService {
                persistence: Box::new(InventoryMemoryPersistence::default()),
            }),
            log_service: Arc::new(LogService {
                persistence: Box::new(LogMemoryPersistence::default()),
            }),
            machine_service: Arc::new(MachineService::in_memory()),
        }
    }

    /// Reads all five tables concurrently. Any failed read fails the snapshot.
    #[tracing::instrument(name = "service::data::snapshot", skip(self))]
    pub async fn snapshot(&self) -> anyhow::Result<DataSnapshot> {
        let (inventory, logs, machine_blades, blade_assignments, machine_statuses) =
            tokio::try_join!(
                self.inventory_service.list(),
                self.log_service.list(),
                self.machine_service.list_blades(),
                self.machine_service.list_assignments(),
                self.machine_service.list_statuses(),
            )?;

        Ok(DataSnapshot::from_rows(
            inventory,
            logs,
            machine_blades,
            blade_assignments,
            machine_statuses,
        ))
    }

    /// Clears machine state and logs, then zeroes inventory counts.
    ///
    /// Each table is cleared by its own statement. A failure part way through is
    /// returned as is; tables already cleared stay cleared.
    #[tracing::instrument(name = "service::data::reset", skip(self))]
    pub async fn reset(&self) -> anyhow::Result<()> {
        self.machine_service.clear().await?;

        let deleted_logs = self.log_service.delete_all().await?;
        let zeroed_items = self.inventory_service.zero_counts().await?;

        tracing::info!(
            "reset complete: {deleted_logs} logs deleted, {zeroed_items} inventory rows zeroed"
        );

        Ok(())
    }
}
