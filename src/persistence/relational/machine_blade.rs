use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{MachineBlade, MachineBladeUpdate};
use crate::persistence::Persistence;

#[derive(Debug)]
pub struct MachineBladeRelationalPersistence {
    pub db: Arc<PgPool>,
}

#[async_trait]
impl Persistence<MachineBlade, MachineBladeUpdate> for MachineBladeRelationalPersistence {
    #[tracing::instrument(name = "relational::machine_blade::upsert", skip_all)]
    async fn upsert(&self, update: &MachineBladeUpdate) -> anyhow::Result<MachineBlade> {
        let machine_blade = sqlx::query_as::<_, MachineBlade>(
            r#"
            INSERT INTO machine_blades
               (machine_id, blade_type)
            VALUES
               ($1, $2)
            ON CONFLICT (machine_id) DO UPDATE SET
               blade_type = EXCLUDED.blade_type
            RETURNING machine_id, blade_type
            "#,
        )
        .bind(update.machine_id.as_deref())
        .bind(update.blade_type.as_deref())
        .fetch_one(&*self.db)
        .await?;

        Ok(machine_blade)
    }

    #[tracing::instrument(name = "relational::machine_blade::list", skip_all)]
    async fn list(&self) -> anyhow::Result<Vec<MachineBlade>> {
        let machine_blades = sqlx::query_as::<_, MachineBlade>(
            "SELECT machine_id, blade_type FROM machine_blades ORDER BY machine_id",
        )
        .fetch_all(&*self.db)
        .await?;

        Ok(machine_blades)
    }

    #[tracing::instrument(name = "relational::machine_blade::delete_all", skip_all)]
    async fn delete_all(&self) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM machine_blades")
            .execute(&*self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
