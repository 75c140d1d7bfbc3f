//! ChannelMessage entity <-> model mapper

use social_core::{ChannelMessage, MessageType};

use crate::models::ChannelMessageModel;

/// Convert ChannelMessageModel to ChannelMessage entity
impl From<ChannelMessageModel> for ChannelMessage {
    fn from(model: ChannelMessageModel) -> Self {
        ChannelMessage {
            id: model.id,
            body: model.body,
            message_type: MessageType::from(model.message_type.as_str()),
            account_id: model.account_id,
            initial_channel_id: model.initial_channel_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
