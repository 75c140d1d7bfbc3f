//! PostgreSQL implementation of InteractionStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::{InteractionKind, InteractionStore, StoreResult};

use super::error::map_db_error;

/// PostgreSQL implementation of InteractionStore
#[derive(Clone)]
pub struct PgInteractionStore {
    pool: PgPool,
}

impl PgInteractionStore {
    /// Create a new PgInteractionStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionStore for PgInteractionStore {
    #[instrument(skip(self))]
    async fn list_actors(&self, message_id: i64, kind: InteractionKind) -> StoreResult<Vec<i64>> {
        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT account_id
            FROM interaction
            WHERE message_id = $1 AND type = $2
            ORDER BY created_at
            "#,
        )
        .bind(message_id)
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }
}
