//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Translation command handler.
pub mod translate;

use anyhow::Result;

use crate::config::{ConfigStore, SqliteStore};
use crate::translation::Translator;

/// Opens the translator over the user's configuration database.
pub fn open_translator() -> Result<Translator<SqliteStore>> {
    let store = SqliteStore::open_default()?;
    Ok(Translator::new(ConfigStore::new(store)))
}
