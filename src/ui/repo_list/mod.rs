//! Repository list feature module.
//!
//! Loads a list of repositories from a [`RepositoryService`](crate::service::RepositoryService)
//! and exposes it as observable state.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `action.rs` - User/system actions
//! - `mutation.rs` - Discrete state changes
//! - `state.rs` - Screen state
//! - `reactor.rs` - Action handling (the network call lives here)
//! - `reducer.rs` - State transitions
//! - `view.rs` - Text rendering

mod action;
mod mutation;
mod reactor;
mod reducer;
mod state;
mod view;

pub use action::RepoListAction;
pub use mutation::RepoListMutation;
pub use reactor::RepoListReactor;
pub use state::{RepoError, RepoListState};
pub use view::render_lines;
