//! Database models - SQLx-compatible structs for PostgreSQL tables

mod channel_message;

pub use channel_message::ChannelMessageModel;
