//! Persistence for the project configuration and the user token store.
//!
//! Two files come out of a completed wizard run:
//! - `.git-issues.yml` in the project root, holding the chosen service, its
//!   URL and the selected project;
//! - `~/.git-issues-tokens.yml`, holding the access token keyed by service,
//!   kept in the home directory so one token serves every project on the
//!   same service.

use crate::core::dirs::home_directory;
use crate::core::error::{GitIssuesError, Result};
use crate::core::provider::ProviderKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-relative config file name
pub const PROJECT_CONFIG_FILE: &str = ".git-issues.yml";

/// Token store file name, relative to the home directory
pub const TOKEN_STORE_FILE: &str = ".git-issues-tokens.yml";

/// The per-project configuration built by the wizard.
///
/// Only plain data is persisted; the provider capability is rebuilt on
/// demand from `git_service`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub git_service: ProviderKind,
    pub url: String,
    pub project_id: u64,
    pub project_slug: String,
}

impl ProjectConfig {
    /// Path of the config file inside `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(PROJECT_CONFIG_FILE)
    }

    /// Whether `dir` already carries a config file
    pub fn exists_in(dir: &Path) -> bool {
        Self::path_in(dir).exists()
    }

    /// Write the config as YAML into `dir`, returning the written path
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        let path = Self::path_in(dir);
        let content = serde_yaml::to_string(self)?;
        fs::write(&path, content).map_err(|e| GitIssuesError::config_write_failed(&path, e))?;
        Ok(path)
    }

    /// Read the config back from `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        let content = fs::read_to_string(&path)
            .map_err(|e| GitIssuesError::config_read_failed(&path, e))?;
        serde_yaml::from_str(&content).map_err(|e| GitIssuesError::config_parse_failed(&path, e))
    }
}

/// User-scoped store for access tokens, one file per user.
pub struct CredentialStore;

impl CredentialStore {
    /// Location of the token store
    pub fn path() -> Result<PathBuf> {
        Ok(home_directory()?.join(TOKEN_STORE_FILE))
    }

    /// Persist `token` for `service` to the user's token store.
    ///
    /// The file is replaced wholesale with a single-entry mapping, so a save
    /// for one service drops tokens previously stored for any other.
    pub fn save(service: ProviderKind, token: &str) -> Result<PathBuf> {
        let path = Self::path()?;
        Self::save_to(&path, service, token)?;
        Ok(path)
    }

    /// Write the single-entry mapping to an explicit path
    pub fn save_to(path: &Path, service: ProviderKind, token: &str) -> Result<()> {
        let entry: BTreeMap<ProviderKind, &str> = BTreeMap::from([(service, token)]);
        let content = serde_yaml::to_string(&entry)?;
        fs::write(path, content).map_err(|e| GitIssuesError::config_write_failed(path, e))
    }

    /// Read the stored token for `service`, if any
    pub fn load_from(path: &Path, service: ProviderKind) -> Result<Option<String>> {
        let content = fs::read_to_string(path)
            .map_err(|e| GitIssuesError::config_read_failed(path, e))?;
        let entries: BTreeMap<ProviderKind, String> = serde_yaml::from_str(&content)
            .map_err(|e| GitIssuesError::config_parse_failed(path, e))?;
        Ok(entries.get(&service).cloned())
    }
}
