use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{InventoryItem, InventoryUpdate};
use crate::persistence::InventoryPersistence;

#[derive(Debug)]
pub struct InventoryRelationalPersistence {
    pub db: Arc<PgPool>,
}

#[async_trait]
impl InventoryPersistence for InventoryRelationalPersistence {
    #[tracing::instrument(name = "relational::inventory::upsert", skip_all)]
    async fn upsert(&self, update: &InventoryUpdate) -> anyhow::Result<InventoryItem> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory
               (group_name, blade_type, fixed, available)
            VALUES
               ($1, $2, $3, $4)
            ON CONFLICT (group_name, blade_type) DO UPDATE SET
               fixed = EXCLUDED.fixed,
               available = EXCLUDED.available
            RETURNING group_name, blade_type, fixed, available
            "#,
        )
        .bind(update.group_name.as_deref())
        .bind(update.blade_type.as_deref())
        .bind(update.fixed)
        .bind(update.available)
        .fetch_one(&*self.db)
        .await?;

        Ok(item)
    }

    #[tracing::instrument(name = "relational::inventory::list", skip_all)]
    async fn list(&self) -> anyhow::Result<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
                SELECT group_name, blade_type, fixed, available
                FROM inventory
                ORDER BY group_name, blade_type
            "#,
        )
        .fetch_all(&*self.db)
        .await?;

        Ok(items)
    }

    #[tracing::instrument(name = "relational::inventory::zero_counts", skip_all)]
    async fn zero_counts(&self) -> anyhow::Result<u64> {
        let result = sqlx::query(
            // language=PostgreSQL
            r#"
                UPDATE inventory SET fixed = 0, available = 0
            "#,
        )
        .execute(&*self.db)
        .await?;

        Ok(result.rows_affected())
    }
}
