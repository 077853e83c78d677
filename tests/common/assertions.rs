//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-issues command output and
//! expected guard behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the git repository guard message
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("You are not in a git project repository")
}

/// Creates a predicate that checks for the already-configured guard message
pub fn already_configured() -> impl Predicate<str> {
    predicates::str::contains("There is already a git-issues config on this project")
}

/// Creates a predicate that checks for the out-of-range reprompt message
pub fn out_of_range() -> impl Predicate<str> {
    predicates::str::contains("the option is out of range")
}

/// Creates a predicate that checks for the service selection prompt
pub fn service_prompt() -> impl Predicate<str> {
    predicates::str::contains("Please insert the number of the used Git service")
}
