//! Composition root: builds the service layer and hands it to reactors.
//!
//! Each screen gets a fresh reactor per request, while services are built
//! once and shared.

use std::sync::Arc;

use crate::config::Config;
use crate::service::{FetchError, HttpRepositoryService, RepositoryService};
use crate::ui::repo_list::RepoListReactor;

/// Long-lived services shared by every screen.
pub struct Services {
    pub repositories: Arc<dyn RepositoryService>,
}

impl Services {
    /// Build the production services from config.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let repositories = HttpRepositoryService::new(config.service.clone())?;
        tracing::debug!(base_url = %repositories.base_url(), "Repository service ready");

        Ok(Self {
            repositories: Arc::new(repositories),
        })
    }

    /// Services backed by an arbitrary repository source.
    pub fn with_repositories(repositories: Arc<dyn RepositoryService>) -> Self {
        Self { repositories }
    }
}

/// Constructs reactors with their dependencies.
pub struct AppContainer {
    services: Services,
}

impl AppContainer {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(Services::from_config(config)?))
    }

    /// A new list reactor, scoped to one screen instance.
    pub fn repo_list_reactor(&self) -> RepoListReactor {
        RepoListReactor::new(Arc::clone(&self.services.repositories))
    }
}
