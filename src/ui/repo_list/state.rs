//! State for the repository list screen.

use serde::Serialize;
use std::fmt::Display;

use crate::model::RepoModel;
use crate::ui::mvi::UiState;

/// Snapshot of the repository list screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RepoListState {
    pub repositories: Vec<RepoModel>,
    pub is_loading: bool,
    pub error: RepoError,
}

impl UiState for RepoListState {}

/// Error shown on the list screen. The default value means "no error".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RepoError {
    pub message: String,
    pub is_error: bool,
}

impl RepoError {
    /// Build the error shown for a failed fetch.
    pub fn from_failure(err: &dyn Display) -> Self {
        Self {
            message: err.to_string(),
            is_error: true,
        }
    }
}
