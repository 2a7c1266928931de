//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory Specification conventions over OS-specific
//! locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for artl.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/artl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/artl` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("artl"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("artl"))
}
