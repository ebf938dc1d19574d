//! Repository service: the single I/O boundary of the list screen.

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpRepositoryService;

use async_trait::async_trait;

use crate::model::RepoModel;

/// Source of the repository list.
///
/// Any implementation can back the list reactor; the HTTP client is the
/// production one, tests plug in stubs.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Fetch the full repository list. All-or-nothing: no partial results.
    async fn fetch_repositories(&self) -> Result<Vec<RepoModel>, FetchError>;
}
