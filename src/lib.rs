//! Git Issues - A lightweight Rust CLI companion for issue tracking on Git
//! hosting services.
//!
//! This library provides the core functionality for git-issues: the
//! interactive first-run configuration wizard, the pluggable Git service
//! provider abstraction it is built on, and the persistence for the
//! resulting project config and user token store.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides:
//! - Git service providers (auth header naming, API route construction)
//! - Remote validation of wizard answers
//! - Interactive prompt handling with cancellation
//! - Config and token persistence
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Persistence
    CredentialStore,
    // Providers
    GitProvider,

    // Error handling
    GitIssuesError,
    GitlabProvider,
    // Remote validation
    HttpChecker,
    ProjectConfig,
    ProjectMatch,
    // Prompts
    PromptInput,
    PromptSource,
    ProviderKind,
    RemoteCheck,
    RemoteResponse,
    Result,
    Routes,
    StdinPrompt,
};
