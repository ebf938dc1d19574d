//! Actions for the repository list screen.

use crate::ui::mvi::Intent;

/// Actions that can be dispatched to the repository list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoListAction {
    /// (Re)load the repository list.
    GetRepos,
}

impl Intent for RepoListAction {}
