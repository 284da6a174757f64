use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, error, warn};

use super::record::{CONFIG_ID, ConfigRecord, default_config};

/// Errors reported by persistence backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write carried a revision that does not match the stored document.
    #[error("Document update conflict for '{id}'")]
    Conflict { id: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A key-value document store holding configuration records.
///
/// `put` has insert-or-update semantics keyed by `record.id`. A record
/// carrying a revision must match the stored one, and a record without a
/// revision may only create a new document.
pub trait Persistence: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<ConfigRecord>, StoreError>;

    /// Returns the stored revision of `id` without decoding the document.
    fn revision(&self, id: &str) -> Result<Option<String>, StoreError>;

    /// Writes the record and returns its new revision.
    fn put(&self, record: &ConfigRecord) -> Result<String, StoreError>;
}

/// Computes the revision that follows `previous` for a document body.
///
/// Revisions look like `3-<32 hex chars>`: a generation counter followed by
/// a digest of the body.
pub fn next_revision(previous: Option<&str>, body: &str) -> String {
    let generation = previous
        .and_then(|rev| rev.split_once('-'))
        .and_then(|(n, _)| n.parse::<u64>().ok())
        .unwrap_or(0)
        + 1;

    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("{generation}-{}", &digest[..32])
}

/// Owns the singleton configuration record on top of a persistence backend.
pub struct ConfigStore<P> {
    persistence: P,
}

impl<P: Persistence> ConfigStore<P> {
    pub const fn new(persistence: P) -> Self {
        Self { persistence }
    }

    pub const fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Returns the stored record, or the default record if none exists.
    ///
    /// The default is not persisted. Backend read failures are logged and
    /// the default is returned carrying the stored revision, if any, so the
    /// next save replaces the unreadable document.
    pub fn get_config(&self) -> ConfigRecord {
        match self.persistence.get(CONFIG_ID) {
            Ok(Some(record)) => record,
            Ok(None) => default_config(),
            Err(e) => {
                warn!("Failed to read configuration, using defaults: {e}");
                let mut config = default_config();
                config.rev = self.persistence.revision(CONFIG_ID).unwrap_or_else(|err| {
                    warn!("Failed to read configuration revision: {err}");
                    None
                });
                config
            }
        }
    }

    /// Persists the record.
    ///
    /// On success the record's revision is updated in place. On failure the
    /// reason is logged, the record is left untouched and `false` is returned.
    pub fn save_config(&self, record: &mut ConfigRecord) -> bool {
        match self.persistence.put(record) {
            Ok(rev) => {
                debug!(id = %record.id, rev = %rev, "Configuration saved");
                record.rev = Some(rev);
                true
            }
            Err(e) => {
                error!("Failed to save configuration: {e}");
                false
            }
        }
    }

    /// Overwrites all three user-facing fields and saves the record.
    pub fn update_config(&self, api_key: &str, proxy: &str, model: &str) -> bool {
        let mut config = self.get_config();
        config.api_key = api_key.to_string();
        config.proxy = proxy.to_string();
        config.model = model.to_string();
        self.save_config(&mut config)
    }

    pub fn get_current_config(&self) -> ConfigRecord {
        self.get_config()
    }
}
