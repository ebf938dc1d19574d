pub mod mvi;
pub mod repo_list;
