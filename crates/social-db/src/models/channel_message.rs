//! ChannelMessage database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the channel_message table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelMessageModel {
    pub id: i64,
    pub body: String,
    /// Message type: 'post', 'reply', 'join', 'leave', 'chat' (stored as text)
    #[sqlx(rename = "type")]
    pub message_type: String,
    pub account_id: i64,
    pub initial_channel_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
