//! Aggregation containers - ephemeral views pairing a message with its interactions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::channel_message::ChannelMessage;

/// Interaction kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
}

impl InteractionKind {
    /// Get the storage name, also used as the container map key
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
        }
    }
}

/// Accounts that performed one kind of interaction on a message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionContainer {
    /// Account ids, in the order the store returned them
    pub actors: Vec<i64>,
    pub is_interacted: bool,
}

impl InteractionContainer {
    /// Create an empty InteractionContainer
    pub fn new() -> Self {
        Self::default()
    }
}

/// A message together with its interactions, keyed by interaction-kind name
///
/// Built fresh per aggregation call and owned solely by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessageContainer {
    pub message: ChannelMessage,
    pub interactions: HashMap<String, InteractionContainer>,
}

impl ChannelMessageContainer {
    /// Create a container for the given message with no interactions yet
    pub fn new(message: ChannelMessage) -> Self {
        Self {
            message,
            interactions: HashMap::new(),
        }
    }
}
