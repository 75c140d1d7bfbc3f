//! Store implementations
//!
//! PostgreSQL implementations of the store traits defined in social-core.

mod channel_message;
mod error;
mod interaction;

pub use channel_message::PgMessageStore;
pub use interaction::PgInteractionStore;
