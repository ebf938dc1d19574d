//! Base trait for mutations in MVI architecture.

use std::fmt::Debug;

/// Marker trait for mutation objects.
///
/// A mutation describes one discrete state change. Reactors emit them
/// while handling an action, reducers fold them into the state.
pub trait Mutation: Debug + Send + 'static {}
