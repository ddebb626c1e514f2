use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{BladeAssignment, BladeAssignmentUpdate};
use crate::persistence::Persistence;

#[derive(Debug)]
pub struct BladeAssignmentRelationalPersistence {
    pub db: Arc<PgPool>,
}

#[async_trait]
impl Persistence<BladeAssignment, BladeAssignmentUpdate> for BladeAssignmentRelationalPersistence {
    #[tracing::instrument(name = "relational::blade_assignment::upsert", skip_all)]
    async fn upsert(&self, update: &BladeAssignmentUpdate) -> anyhow::Result<BladeAssignment> {
        let assignment = sqlx::query_as::<_, BladeAssignment>(
            r#"
            INSERT INTO blade_assignments
               (machine_id, blade_type, count)
            VALUES
               ($1, $2, $3)
            ON CONFLICT (machine_id) DO UPDATE SET
               blade_type = EXCLUDED.blade_type,
               count = EXCLUDED.count
            RETURNING machine_id, blade_type, count
            "#,
        )
        .bind(update.machine_id.as_deref())
        .bind(update.blade_type.as_deref())
        .bind(update.count)
        .fetch_one(&*self.db)
        .await?;

        Ok(assignment)
    }

    #[tracing::instrument(name = "relational::blade_assignment::list", skip_all)]
    async fn list(&self) -> anyhow::Result<Vec<BladeAssignment>> {
        let assignments = sqlx::query_as::<_, BladeAssignment>(
            "SELECT machine_id, blade_type, count FROM blade_assignments ORDER BY machine_id",
        )
        .fetch_all(&*self.db)
        .await?;

        Ok(assignments)
    }

    #[tracing::instrument(name = "relational::blade_assignment::delete_all", skip_all)]
    async fn delete_all(&self) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM blade_assignments")
            .execute(&*self.db)
            .await?;

        Ok(result.rows_affected())
    }
}
