//! PostgreSQL implementation of MessageStore

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use social_core::{ChannelMessage, MessageStore, StoreResult};

use crate::models::ChannelMessageModel;

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of MessageStore
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    /// Create a new PgMessageStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    #[instrument(skip(self, message))]
    async fn create(&self, message: &mut ChannelMessage) -> StoreResult<()> {
        // id and timestamps come from the database, not the application
        let (id, created_at, updated_at) =
            sqlx::query_as::<_, (i64, DateTime<Utc>, DateTime<Utc>)>(
                r#"
                INSERT INTO channel_message (body, type, account_id, initial_channel_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, created_at, updated_at
                "#,
            )
            .bind(&message.body)
            .bind(message.message_type.as_str())
            .bind(message.account_id)
            .bind(message.initial_channel_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        message.id = id;
        message.created_at = created_at;
        message.updated_at = updated_at;

        Ok(())
    }

    #[instrument(skip(self, message))]
    async fn fetch(&self, message: &mut ChannelMessage) -> StoreResult<()> {
        let result = sqlx::query_as::<_, ChannelMessageModel>(
            r#"
            SELECT id, body, type, account_id, initial_channel_id, created_at, updated_at
            FROM channel_message
            WHERE id = $1
            "#,
        )
        .bind(message.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                *message = ChannelMessage::from(model);
                Ok(())
            }
            None => Err(message_not_found(message.id)),
        }
    }

    #[instrument(skip(self, message))]
    async fn update_body(&self, message: &mut ChannelMessage) -> StoreResult<()> {
        // partial update: body is the only mutable field
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            UPDATE channel_message
            SET body = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING updated_at
            "#,
        )
        .bind(message.id)
        .bind(&message.body)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match updated_at {
            Some(ts) => {
                message.updated_at = ts;
                Ok(())
            }
            None => Err(message_not_found(message.id)),
        }
    }

    #[instrument(skip(self, message))]
    async fn delete(&self, message: &ChannelMessage) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM channel_message WHERE id = $1
            "#,
        )
        .bind(message.id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(message.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<ChannelMessage>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ChannelMessageModel>(
            r#"
            SELECT id, body, type, account_id, initial_channel_id, created_at, updated_at
            FROM channel_message
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ChannelMessage::from).collect())
    }
}
