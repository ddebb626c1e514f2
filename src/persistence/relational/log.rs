use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::models::{LogEntry, NewLogEntry};
use crate::persistence::LogPersistence;

#[derive(Debug)]
pub struct LogRelationalPersistence {
    pub db: Arc<PgPool>,
}

#[async_trait]
impl LogPersistence for LogRelationalPersistence {
    #[tracing::instrument(name = "relational::log::create", skip_all)]
    async fn create(&self, new_entry: &NewLogEntry) -> anyhow::Result<LogEntry> {
        let entry = sqlx::query_as::<_, LogEntry>(
            r#"
            INSERT INTO logs
               (machine_name, blade_type, action, amount, person_name, group_name)
            VALUES
               ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new_entry.machine_name.as_deref())
        .bind(new_entry.blade_type.as_deref())
        .bind(new_entry.action.as_deref())
        .bind(new_entry.amount)
        .bind(new_entry.person_name.as_deref())
        .bind(new_entry.group_name.as_deref())
        .fetch_one(&*self.db)
        .await?;

        Ok(entry)
    }

    #[tracing::instrument(name = "relational::log::list", skip_all)]
    async fn list(&self) -> anyhow::Result<Vec<LogEntry>> {
        let entries = sqlx::query_as::<_, LogEntry>(
            r#"
                SELECT * FROM logs ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&*self.db)
        .await?;

        Ok(entries)
    }

    #[tracing::instrument(name = "relational::log::delete", skip(self))]
    async fn delete(&self, id: i64) -> anyhow::Result<Option<LogEntry>> {
        let entry = sqlx::query_as::<_, LogEntry>(
            // language=PostgreSQL
            r#"
                DELETE FROM logs WHERE id = $1 RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.db)
        .await?;

        Ok(entry)
    }

    #[tracing::instrument(name = "relational::log::delete_all", skip_all)]
    async fn delete_all(&self) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM logs").execute(&*self.db).await?;

        Ok(result.rows_affected())
    }
}
