use crate::core::error::{GitIssuesError, Result};
use std::path::PathBuf;

/// Resolve the current user's home directory, where the user-scoped token
/// store lives.
pub fn home_directory() -> Result<PathBuf> {
    dirs::home_dir().ok_or(GitIssuesError::HomeDirectoryNotFound)
}
