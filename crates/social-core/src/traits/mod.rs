//! Store traits (ports) for the domain layer

mod stores;

pub use stores::{InteractionStore, MessageStore, StoreResult};
