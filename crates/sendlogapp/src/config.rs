//! # Configuration
//!
//! Sendlog configuration is managed by [`confique`], which handles layered loading
//! from a TOML file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Values are resolved in priority order:
//! 1. **Environment variables**: `SENDLOG_USER`, `SENDLOG_DATA_DIR`
//! 2. **Config file**: `sendlog.toml` in the data directory
//! 3. **Compiled defaults**: both keys are unset by default
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `user` | unset | Email of the account sendlog acts as |
//! | `data_dir` | unset | Directory holding the climb, user and friend documents |
//!
//! `sendlog register` writes `user` to the config file so later commands are signed
//! in automatically.

use crate::error::{Result, SendlogError};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "sendlog.toml";

/// Configuration for sendlog, stored in `sendlog.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SendlogConfig {
    /// Email of the signed-in user.
    #[config(env = "SENDLOG_USER")]
    pub user: Option<String>,

    /// Where the data documents live. Overrides the platform data directory.
    #[config(env = "SENDLOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl SendlogConfig {
    /// Loads environment overrides on top of `<dir>/sendlog.toml`.
    pub fn load(dir: &Path) -> Result<Self> {
        SendlogConfig::builder()
            .env()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| SendlogError::Config(e.to_string()))
    }

    /// Loads a single config file, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        SendlogConfig::builder()
            .file(path)
            .load()
            .map_err(|e| SendlogError::Config(e.to_string()))
    }

    /// The configured user email, trimmed, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.user
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// Persists `user = <email>` in `<dir>/sendlog.toml`, keeping any other keys.
pub fn save_user(dir: &Path, email: &str) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    let mut table = if path.exists() {
        fs::read_to_string(&path)?
            .parse::<toml::Table>()
            .map_err(|e| SendlogError::Config(e.to_string()))?
    } else {
        toml::Table::new()
    };
    table.insert("user".to_string(), toml::Value::String(email.to_string()));

    let content = toml::to_string(&table).map_err(|e| SendlogError::Config(e.to_string()))?;
    fs::create_dir_all(dir)?;
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), "config user saved");
    Ok(path)
}
