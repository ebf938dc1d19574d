//! Reactor driving the repository list screen.

use async_trait::async_trait;
use std::sync::Arc;

use crate::service::RepositoryService;
use crate::ui::mvi::{ActionSource, MutationSink, Reactor};

use super::action::RepoListAction;
use super::mutation::RepoListMutation;
use super::state::{RepoError, RepoListState};

/// Loads the repository list and folds the result into [`RepoListState`].
///
/// The list loads on its own as soon as the reactor starts; every further
/// [`RepoListAction::GetRepos`] triggers one more fetch.
pub struct RepoListReactor {
    repo_service: Arc<dyn RepositoryService>,
}

impl RepoListReactor {
    pub fn new(repo_service: Arc<dyn RepositoryService>) -> Self {
        Self { repo_service }
    }
}

#[async_trait]
impl Reactor for RepoListReactor {
    type Action = RepoListAction;

    fn initial_state(&self) -> RepoListState {
        RepoListState::default()
    }

    fn transform(&self, actions: ActionSource<RepoListAction>) -> ActionSource<RepoListAction> {
        actions.start_with(RepoListAction::GetRepos)
    }

    async fn mutate(&self, action: RepoListAction, sink: MutationSink<RepoListMutation>) {
        match action {
            RepoListAction::GetRepos => {
                sink.emit(RepoListMutation::SetLoading(true));

                match self.repo_service.fetch_repositories().await {
                    Ok(repositories) => {
                        tracing::info!(count = repositories.len(), "Repositories loaded");
                        sink.emit(RepoListMutation::SetRepos(repositories));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Failed to load repositories");
                        sink.emit(RepoListMutation::SetError(RepoError::from_failure(&err)));
                    }
                }
            }
        }
    }
}
