//! # gtl - Gemini Translation CLI
//!
//! `gtl` sends a piece of text to Google's Gemini API and gets back a
//! translation together with a vocabulary breakdown: pronunciations,
//! part-of-speech tags and the distinct senses of key words.
//!
//! Text that is not Chinese is translated into Chinese; Chinese text is
//! translated into English. A single word yields only its senses.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store your API key (interactive)
//! gtl configure
//!
//! # Translate a sentence
//! gtl He parked behind his house.
//!
//! # Translate from stdin and keep the raw JSON
//! pbpaste | gtl --json -o result.json
//!
//! # Interactive mode
//! gtl chat
//! ```
//!
//! ## Library use
//!
//! Hosts embed [`translation::Translator`] over any
//! [`config::Persistence`] backend:
//!
//! ```no_run
//! use gtl_cli::config::{ConfigStore, MemoryStore};
//! use gtl_cli::translation::Translator;
//!
//! # async fn demo() -> Result<(), gtl_cli::translation::TranslateError> {
//! let translator = Translator::new(ConfigStore::new(MemoryStore::new()));
//! translator.update_config("AIza...", "", "gemini-2.0-flash");
//! let json = translator.translate("He parked behind his house.").await?;
//! # Ok(())
//! # }
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration record, persistence backends and the configuration store.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Prompt, response contract and Gemini client.
pub mod translation;

/// Terminal UI components (spinner, colors, result rendering).
pub mod ui;
