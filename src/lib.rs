//! Repository list screen core.
//!
//! A reactor fetches repositories from a [`service::RepositoryService`] and
//! publishes list state through a unidirectional action → mutation → state
//! pipeline (see [`ui::mvi`]).

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod ui;
