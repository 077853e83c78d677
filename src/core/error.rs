//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitIssuesError`] which covers every failure mode of
//! git-issues. It uses `thiserror` for ergonomic error definitions and
//! includes specialized constructors for common failure scenarios.
//!
//! # Public API
//! - [`GitIssuesError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitIssuesError>`
//!
//! # Error Categories
//! - **Preconditions**: Not in a git repository, project already configured
//! - **Remote checks**: Transport-level failures while validating input
//! - **Persistence**: Config/token file read, write and serialization errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-issues
#[derive(Error, Debug)]
pub enum GitIssuesError {
    // Precondition errors
    #[error("You are not in a git project repository")]
    NotInGitRepo,

    #[error("There is already a git-issues config on this project")]
    AlreadyConfigured,

    // Remote check errors
    #[error("Request to '{url}' failed: {source}")]
    RequestFailed {
        url: String,
        source: Box<ureq::Error>,
    },

    // Persistence errors
    #[error("Could not determine the home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results using GitIssuesError
pub type Result<T> = std::result::Result<T, GitIssuesError>;

impl GitIssuesError {
    /// Create a request failed error for a remote check
    pub fn request_failed(url: impl Into<String>, source: ureq::Error) -> Self {
        Self::RequestFailed {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitIssuesError::NotInGitRepo;
        assert_eq!(err.to_string(), "You are not in a git project repository");
    }

    #[test]
    fn test_already_configured_display() {
        let err = GitIssuesError::AlreadyConfigured;
        assert_eq!(
            err.to_string(),
            "There is already a git-issues config on this project"
        );
    }

    #[test]
    fn test_config_write_failed() {
        let path = std::path::PathBuf::from("/test/.git-issues.yml");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = GitIssuesError::config_write_failed(&path, io_err);
        assert!(err.to_string().contains("/test/.git-issues.yml"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_config_parse_failed() {
        let path = std::path::PathBuf::from("/test/.git-issues.yml");
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{ invalid").unwrap_err();
        let err = GitIssuesError::config_parse_failed(&path, yaml_err);
        assert!(err.to_string().contains("Failed to parse"));
        assert!(err.to_string().contains("/test/.git-issues.yml"));
    }
}
