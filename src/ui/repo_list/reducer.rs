//! State transitions for the repository list.

use crate::ui::mvi::Reducer;

use super::mutation::RepoListMutation;
use super::reactor::RepoListReactor;
use super::state::RepoListState;

impl Reducer for RepoListReactor {
    type State = RepoListState;
    type Mutation = RepoListMutation;

    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State {
        let mut new_state = state;

        match mutation {
            RepoListMutation::SetRepos(data) => {
                // A previous error stays visible until something clears it
                new_state.repositories = data;
                new_state.is_loading = false;
            }
            RepoListMutation::SetLoading(condition) => {
                new_state.is_loading = condition;
            }
            RepoListMutation::SetError(error) => {
                new_state.error = error;
            }
        }

        new_state
    }
}
