//! Persistent user configuration (API key, proxy, model).

mod memory;
mod record;
mod sqlite;
mod store;

pub use memory::MemoryStore;
pub use record::{
    CONFIG_ID, ConfigRecord, DEFAULT_MODEL, KNOWN_MODELS, ResolveOptions, default_config,
    resolve_config,
};
pub use sqlite::SqliteStore;
pub use store::{ConfigStore, Persistence, StoreError, next_revision};
