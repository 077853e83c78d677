//! Git service provider abstraction.
//!
//! This module defines the pluggable capability describing one Git hosting
//! service's API shape: the authentication header it expects and the routes
//! the tool needs (project listing, project search, issue listing).
//!
//! # Public API
//! - [`ProviderKind`]: Enumeration of supported services, also the registry
//! - [`GitProvider`]: Capability trait implemented once per service
//! - [`Routes`]: Fully-qualified API routes built from a base URL
//! - [`ProjectMatch`]: One project returned by a search query
//!
//! Adding a new Git service means adding a `ProviderKind` variant, a struct
//! implementing [`GitProvider`], and one arm in [`ProviderKind::provider`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier for a supported Git hosting service.
///
/// Serializes as a lowercase string so it can double as a key in the
/// persisted config and token files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gitlab,
}

impl ProviderKind {
    /// All supported services, in display order. The order is stable and is
    /// what the selection menu numbers against.
    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::Gitlab]
    }

    /// Resolve a 1-based menu selection to a provider kind.
    ///
    /// Returns `None` when `index` falls outside `[1, count]`.
    pub fn resolve(index: usize) -> Option<ProviderKind> {
        let services = Self::all();
        if (1..=services.len()).contains(&index) {
            Some(services[index - 1])
        } else {
            None
        }
    }

    /// The capability implementation for this service.
    ///
    /// Providers are stateless, so a kind maps straight to a static instance.
    pub fn provider(self) -> &'static dyn GitProvider {
        match self {
            ProviderKind::Gitlab => &GitlabProvider,
        }
    }
}

/// API routes for one service on one host.
///
/// The `issues` route needs a project id and is only present once one is
/// known. It is unused while configuring, but issue commands rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Routes {
    pub projects: String,
    pub search_projects: String,
    pub issues: Option<String>,
}

/// One project returned by a search query, reduced to the fields the tool
/// keeps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectMatch {
    pub id: u64,
    pub name_with_namespace: String,
    pub path_with_namespace: String,
}

/// Capability describing one Git hosting service's API shape.
pub trait GitProvider {
    /// Canonical identifier for this service
    fn kind(&self) -> ProviderKind;

    /// Name used in prompts and echoed messages
    fn display_name(&self) -> &'static str;

    /// HTTP header the service expects the access token in
    fn auth_header(&self) -> &'static str;

    /// Build the API routes for `base_url`, with the issue route included
    /// once `project_id` is known
    fn routes(&self, base_url: &str, project_id: Option<u64>) -> Routes;

    /// Map a search response body to project matches.
    ///
    /// Each service owns its response shape; bodies that do not match it
    /// yield an empty list.
    fn project_matches(&self, body: &Value) -> Vec<ProjectMatch>;
}

/// GitLab provider, the first supported service.
pub struct GitlabProvider;

impl GitlabProvider {
    const API_VERSION: &'static str = "v4";
}

impl GitProvider for GitlabProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gitlab
    }

    fn display_name(&self) -> &'static str {
        "Gitlab"
    }

    fn auth_header(&self) -> &'static str {
        "PRIVATE-TOKEN"
    }

    fn routes(&self, base_url: &str, project_id: Option<u64>) -> Routes {
        let api = format!("{}/api/{}", base_url, Self::API_VERSION);
        Routes {
            projects: format!("{api}/projects"),
            search_projects: format!("{api}/projects?search="),
            issues: project_id.map(|id| format!("{api}/projects/{id}/issues")),
        }
    }

    fn project_matches(&self, body: &Value) -> Vec<ProjectMatch> {
        // GitLab answers a search with a JSON array of project objects
        serde_json::from_value(body.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_first_service() {
        assert_eq!(ProviderKind::resolve(1), Some(ProviderKind::Gitlab));
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert_eq!(ProviderKind::resolve(0), None);
        assert_eq!(ProviderKind::resolve(ProviderKind::all().len() + 1), None);
    }

    #[test]
    fn test_gitlab_auth_header() {
        assert_eq!(GitlabProvider.auth_header(), "PRIVATE-TOKEN");
    }

    #[test]
    fn test_gitlab_routes_without_project() {
        let routes = GitlabProvider.routes("http://gitlab.example.com", None);
        assert_eq!(routes.projects, "http://gitlab.example.com/api/v4/projects");
        assert_eq!(
            routes.search_projects,
            "http://gitlab.example.com/api/v4/projects?search="
        );
        assert_eq!(routes.issues, None);
    }

    #[test]
    fn test_gitlab_routes_with_project() {
        let routes = GitlabProvider.routes("http://gitlab.example.com", Some(42));
        assert_eq!(
            routes.issues.as_deref(),
            Some("http://gitlab.example.com/api/v4/projects/42/issues")
        );
    }

    #[test]
    fn test_gitlab_project_matches() {
        let body = json!([
            {
                "id": 42,
                "name_with_namespace": "Group / My App",
                "path_with_namespace": "group/myapp",
                "default_branch": "main"
            }
        ]);

        let matches = GitlabProvider.project_matches(&body);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 42);
        assert_eq!(matches[0].name_with_namespace, "Group / My App");
        assert_eq!(matches[0].path_with_namespace, "group/myapp");
    }

    #[test]
    fn test_project_matches_ignores_unexpected_body() {
        assert!(GitlabProvider.project_matches(&json!({"error": "nope"})).is_empty());
        assert!(GitlabProvider.project_matches(&Value::Null).is_empty());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&ProviderKind::Gitlab).unwrap();
        assert_eq!(yaml.trim(), "gitlab");
    }
}
