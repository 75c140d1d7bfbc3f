//! # social-core
//!
//! Domain layer containing the channel-message entity, its relatives
//! aggregation containers, domain errors, and store traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    ChannelMessage, ChannelMessageContainer, InteractionContainer, InteractionKind, MessageType,
};
pub use error::DomainError;
pub use traits::{InteractionStore, MessageStore, StoreResult};
