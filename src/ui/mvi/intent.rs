//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User requests (pull to refresh, retry button)
/// - System triggers (the synthetic action issued on first subscription)
///
/// Actions are turned into mutations by a [`Reactor`](super::Reactor).
pub trait Intent: Debug + Send + 'static {}
