//! Mutations for the repository list screen.

use crate::model::RepoModel;
use crate::ui::mvi::Mutation;

use super::state::RepoError;

/// State changes produced while handling a [`RepoListAction`](super::RepoListAction).
#[derive(Debug, Clone, PartialEq)]
pub enum RepoListMutation {
    /// Replace the list and clear the loading flag.
    SetRepos(Vec<RepoModel>),

    /// Set the loading flag.
    SetLoading(bool),

    /// Record a fetch failure.
    SetError(RepoError),
}

impl Mutation for RepoListMutation {}
