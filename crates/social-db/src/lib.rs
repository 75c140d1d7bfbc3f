//! # social-db
//!
//! Database layer implementing the store traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the store traits
//! defined in `social-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Store implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use social_core::{ChannelMessage, MessageType};
//! use social_db::pool::{create_pool, DatabaseConfig};
//! use social_db::PgMessageStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let store = PgMessageStore::new(pool);
//!
//!     let mut message = ChannelMessage::new(MessageType::Post, 1, 10, "hello".into());
//!     message.create(&store).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgInteractionStore, PgMessageStore};
