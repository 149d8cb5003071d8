//! # Startup
//!
//! [`initialize`] wires a ready-to-use [`SendlogApi`] for a front end:
//!
//! 1. Pick the base data directory: an explicit override (the CLI's `--data` or
//!    `SENDLOG_DATA`), else the platform data directory from
//!    [`directories::ProjectDirs`].
//! 2. Load [`SendlogConfig`] from the environment and `<base>/sendlog.toml`.
//! 3. Open the [`FileStore`] at `config.data_dir` when set, else at the base dir.
//! 4. Resolve the configured `user` email to a registered profile. An unset or
//!    unknown email yields a signed-out identity; commands then fail with
//!    `Unauthenticated` while `register` keeps working.

use crate::api::SendlogApi;
use crate::config::SendlogConfig;
use crate::error::{Result, SendlogError};
use crate::identity::FixedIdentity;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_ENV: &str = "SENDLOG_DATA";

pub struct SendlogContext {
    pub api: SendlogApi<FileStore, FixedIdentity>,
    pub config: SendlogConfig,
    /// Directory holding `sendlog.toml`.
    pub config_dir: PathBuf,
    /// Directory holding the data documents.
    pub data_dir: PathBuf,
}

/// The directory sendlog reads its config from when nothing overrides it.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "sendlog", "sendlog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SendlogError::Config("could not determine a home directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<SendlogContext> {
    let config_dir = match data_override {
        Some(path) => path,
        None => match std::env::var_os(DATA_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_data_dir()?,
        },
    };

    let config = SendlogConfig::load(&config_dir)?;
    let data_dir = config
        .data_dir
        .clone()
        .unwrap_or_else(|| config_dir.clone());
    tracing::debug!(data_dir = %data_dir.display(), "opening store");
    let store = FileStore::new_fs(data_dir.clone());

    let identity = match config.user_email() {
        Some(email) => match store.lookup_user_by_email(email) {
            Ok(profile) => FixedIdentity::signed_in(profile.id),
            Err(SendlogError::UserNotFound(_)) => {
                tracing::warn!(email, "configured user is not registered");
                FixedIdentity::signed_out()
            }
            Err(e) => return Err(e),
        },
        None => FixedIdentity::signed_out(),
    };

    Ok(SendlogContext {
        api: SendlogApi::new(store, identity),
        config,
        config_dir,
        data_dir,
    })
}
