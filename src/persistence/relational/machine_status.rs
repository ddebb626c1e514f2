use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{MachineStatus, MachineStatusUpdate};
use crate::persistence::Persistence;

#[derive(Debug)]
pub struct MachineStatusRelationalPersistence {
    pub db: Arc<PgPool>,
}

#[async_trait]
impl Persistence<MachineStatus, MachineStatusUpdate> for MachineStatusRelationalPersistence {
    #[tracing::instrument(name = "relational::machine_status::upsert", skip_all)]
    async fn upsert(&self, update: &MachineStatusUpdate) -> anyhow::Result<MachineStatus> {
        let machine_status = sqlx::query_as::<_, MachineStatus>(
            r#"
            INSERT INTO machine_status
               (machine_id, status)
            VALUES
               ($1, $2)
            ON CONFLICT (machine_id) DO UPDATE SET
               status = EXCLUDED.status
            RETURNING machine_id, status
            "#,
        )
        .bind(update.machine_id.as_deref())
        .bind(update.status.as_deref())
        .fetch_one(&*self.db)
        .await?;

        Ok(machine_status)
    }

    #[tracing::instrument(name = "relational::machine_status::list", skip_all)]
    async fn list(&self) -> anyhow::Result<Vec<MachineStatus>> {
        let machine_statuses = sqlx::query_as::<_, MachineStatus>(
            "SELECT machine_id, status FROM machine_status ORDER BY machine_id",
        )
        .fetch_all(&*self.db)
        .await?;

        Ok(machine_statuses)
    }

    #[tracing::instrument(name = "relational::machine_status::delete_all", skip_all)]
    async fn delete_all(&self) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM machine_status")
            .execute(&*self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
