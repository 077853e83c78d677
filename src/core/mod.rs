//! Core functionality for the git-issues tool.
//!
//! This module provides the fundamental building blocks for the
//! configuration wizard: the Git service provider abstraction, remote
//! validation, interactive prompts, persistence and error handling.

pub mod config;
pub mod dirs;
pub mod error;
pub mod output;
pub mod prompt;
pub mod provider;
pub mod remote;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitIssuesError, Result};

// === Git service providers ===
// Capability describing one hosting service's API shape, plus the registry
pub use provider::{GitProvider, GitlabProvider, ProjectMatch, ProviderKind, Routes};

// === Remote validation ===
// Single blocking GET used to validate wizard answers against the service
pub use remote::{HttpChecker, RemoteCheck, RemoteResponse};

// === Interactive prompts ===
// Line-at-a-time input with built-in quit/EOF cancellation
pub use prompt::{PromptInput, PromptSource, StdinPrompt, CANCEL_WORD};

// === Persistence ===
// Project config file and user-scoped token store
pub use config::{CredentialStore, ProjectConfig, PROJECT_CONFIG_FILE, TOKEN_STORE_FILE};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_success};
