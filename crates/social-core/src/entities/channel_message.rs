//! ChannelMessage entity - a message posted into a channel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::container::{ChannelMessageContainer, InteractionContainer, InteractionKind};
use crate::error::DomainError;
use crate::traits::{InteractionStore, MessageStore, StoreResult};

/// Message type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Regular post in a channel
    #[default]
    Post,
    /// Reply to another message
    Reply,
    /// Membership notice: an account joined the channel
    Join,
    /// Membership notice: an account left the channel
    Leave,
    /// Private chat message
    Chat,
}

impl MessageType {
    /// Get the storage name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Reply => "reply",
            Self::Join => "join",
            Self::Leave => "leave",
            Self::Chat => "chat",
        }
    }

}

impl From<&str> for MessageType {
    fn from(value: &str) -> Self {
        match value {
            "reply" => Self::Reply,
            "join" => Self::Join,
            "leave" => Self::Leave,
            "chat" => Self::Chat,
            _ => Self::Post, // Default for "post" and unknown values
        }
    }
}

/// Channel message entity
///
/// Lifecycle operations delegate to an explicitly injected [`MessageStore`]
/// handle; the entity itself holds no connection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelMessage {
    /// Assigned by the store on creation; zero means "not persisted"
    pub id: i64,
    /// Message content; the only field mutable after creation
    pub body: String,
    pub message_type: MessageType,
    /// Authoring account
    pub account_id: i64,
    /// Channel in which the message originated
    pub initial_channel_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChannelMessage {
    /// Create a new, not-yet-persisted ChannelMessage
    pub fn new(
        message_type: MessageType,
        account_id: i64,
        initial_channel_id: i64,
        body: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            body,
            message_type,
            account_id,
            initial_channel_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the message has a store-assigned identity
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Persist a new message. The store assigns `id`, `created_at` and
    /// `updated_at`, then the `after_create` hook runs.
    pub async fn create(&mut self, store: &dyn MessageStore) -> StoreResult<()> {
        store.create(self).await?;
        store.after_create(self).await;
        Ok(())
    }

    /// Load full state by `id`
    pub async fn fetch(&mut self, store: &dyn MessageStore) -> StoreResult<()> {
        store.fetch(self).await
    }

    /// Persist the message body. Only `body` is sent to the store; every
    /// other field is immutable after creation.
    pub async fn update(&mut self, store: &dyn MessageStore) -> StoreResult<()> {
        store.update_body(self).await?;
        store.after_update(self).await;
        Ok(())
    }

    /// Remove the record by `id`
    pub async fn delete(&self, store: &dyn MessageStore) -> StoreResult<()> {
        store.delete(self).await?;
        store.after_delete(self).await;
        Ok(())
    }

    /// Bulk lookup by ids. An empty input returns an empty result without a
    /// store round-trip.
    pub async fn fetch_by_ids(
        store: &dyn MessageStore,
        ids: &[i64],
    ) -> StoreResult<Vec<ChannelMessage>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        store.fetch_by_ids(ids).await
    }

    /// Fetch "like" interactions for this message and assemble them next to
    /// it, keyed by interaction-kind name.
    ///
    /// Requires a store-assigned `id`. Any lookup failure aborts the whole
    /// aggregation and is returned untouched.
    pub async fn fetch_relatives(
        &self,
        store: &dyn InteractionStore,
    ) -> StoreResult<ChannelMessageContainer> {
        if self.id == 0 {
            return Err(DomainError::MessageIdNotSet);
        }

        let actors = store.list_actors(self.id, InteractionKind::Like).await?;

        let mut interaction = InteractionContainer::new();
        interaction.actors = actors;
        // always true after a successful lookup; the query carries no viewer
        // identity to compute a per-viewer value from
        interaction.is_interacted = true;

        let mut container = ChannelMessageContainer::new(self.clone());
        container
            .interactions
            .insert(InteractionKind::Like.as_str().to_string(), interaction);

        Ok(container)
    }
}
