//! Domain entities - core business objects

mod channel_message;
mod container;

pub use channel_message::{ChannelMessage, MessageType};
pub use container::{ChannelMessageContainer, InteractionContainer, InteractionKind};
