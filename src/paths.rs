//! XDG-style path utilities for the configuration directory.
//!
//! Prefers the XDG Base Directory conventions over OS-specific locations,
//! so the configuration lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for gtl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gtl` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/gtl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("gtl")),
        _ => Ok(home_dir()?.join(".config").join("gtl")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
