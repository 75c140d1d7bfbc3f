//! Store traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the persistence layer, and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{ChannelMessage, InteractionKind};
use crate::error::DomainError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

/// Persistence collaborator for [`ChannelMessage`]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a new message, assigning `id`, `created_at` and `updated_at`
    async fn create(&self, message: &mut ChannelMessage) -> StoreResult<()>;

    /// Populate the message from its `id`
    async fn fetch(&self, message: &mut ChannelMessage) -> StoreResult<()>;

    /// Persist the message body only, refreshing `updated_at`
    async fn update_body(&self, message: &mut ChannelMessage) -> StoreResult<()>;

    /// Remove the record by `id`
    async fn delete(&self, message: &ChannelMessage) -> StoreResult<()>;

    /// Bulk lookup by ids
    async fn fetch_by_ids(&self, ids: &[i64]) -> StoreResult<Vec<ChannelMessage>>;

    /// Hook invoked after a successful create; no-op extension point
    async fn after_create(&self, _message: &ChannelMessage) {}

    /// Hook invoked after a successful update; no-op extension point
    async fn after_update(&self, _message: &ChannelMessage) {}

    /// Hook invoked after a successful delete; no-op extension point
    async fn after_delete(&self, _message: &ChannelMessage) {}
}

/// Interaction collaborator used by the relatives aggregation
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// List account ids that performed the given interaction kind on a
    /// message, in interaction order
    async fn list_actors(&self, message_id: i64, kind: InteractionKind) -> StoreResult<Vec<i64>>;
}
