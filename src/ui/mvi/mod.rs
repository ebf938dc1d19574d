//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits and the runtime for implementing
//! unidirectional data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reactor::mutate ──→ Mutation ──→ Reducer ──→ State ──→ View
//!    ↑                                                                │
//!    └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Action**: User requests or system triggers
//! - **Mutation**: A single state change produced while handling an action
//! - **Reducer**: Pure function that folds mutations into state
//! - **Store**: Runs a reactor on one task and publishes every state

mod intent;
mod mutation;
mod reactor;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use mutation::Mutation;
pub use reactor::{ActionSource, MutationSink, Reactor};
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{ReactorHandle, StateUpdates, Store, StoreError};
