//! Per-workspace profile persistence
//!
//! At most one profile per workspace id; the store interface is the only
//! path to the durable collection.

mod file;
mod record;
mod store;

pub use file::JsonFileStore;
pub use record::{DEFAULT_WORKSPACE_ID, UserProfile};
pub use store::{MemoryStore, ProfileStore, StoreError, StoreResult};
