//! Repository record returned by the repository service.

use serde::{Deserialize, Serialize};

/// One repository as listed by a GitHub-compatible REST API.
///
/// Only the fields the list screen needs are kept; anything else in the
/// response is ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoModel {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
}
