//! Reactor trait and the typed channels it reads from and writes to.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::intent::Intent;
use super::reducer::Reducer;

/// A reactor turns actions into mutations and folds them into state.
///
/// The pipeline for every action is:
///
/// ```text
/// transform ──→ mutate ──→ reduce ──→ State
/// ```
///
/// `reduce` comes from the [`Reducer`] supertrait and stays pure. All side
/// effects (network calls and so on) live in [`Reactor::mutate`].
#[async_trait]
pub trait Reactor: Reducer + Send + Sync + 'static {
    /// The action type this reactor accepts.
    type Action: Intent;

    /// State the reactor starts from.
    fn initial_state(&self) -> Self::State;

    /// Shape the incoming action stream before any action is handled.
    ///
    /// Default implementation passes actions through untouched.
    fn transform(&self, actions: ActionSource<Self::Action>) -> ActionSource<Self::Action> {
        actions
    }

    /// Handle one action, emitting mutations in the order they should be folded.
    ///
    /// The state is reduced as each mutation is emitted, so observers see
    /// intermediate states (such as a loading flag) before this future resolves.
    async fn mutate(&self, action: Self::Action, sink: MutationSink<Self::Mutation>);
}

/// Ordered stream of actions feeding a reactor.
///
/// Actions queued with [`ActionSource::start_with`] are yielded before
/// anything received on the channel.
#[derive(Debug)]
pub struct ActionSource<A> {
    prefix: VecDeque<A>,
    incoming: mpsc::UnboundedReceiver<A>,
}

impl<A> ActionSource<A> {
    pub fn new(incoming: mpsc::UnboundedReceiver<A>) -> Self {
        Self {
            prefix: VecDeque::new(),
            incoming,
        }
    }

    /// Prepend an action to the stream.
    ///
    /// Like `startWith` on a reactive stream, the most recent call ends up first.
    pub fn start_with(mut self, action: A) -> Self {
        self.prefix.push_front(action);
        self
    }

    /// Next action, or `None` once the prefix is drained and every sender is gone.
    pub async fn next(&mut self) -> Option<A> {
        if let Some(action) = self.prefix.pop_front() {
            return Some(action);
        }
        self.incoming.recv().await
    }
}

/// Emitter handed to [`Reactor::mutate`].
///
/// Mutations are delivered to a single consumer in emission order. Dropping
/// the sink marks the end of the mutation sequence for the current action.
#[derive(Debug)]
pub struct MutationSink<M> {
    tx: mpsc::UnboundedSender<M>,
}

impl<M: std::fmt::Debug> MutationSink<M> {
    pub fn new(tx: mpsc::UnboundedSender<M>) -> Self {
        Self { tx }
    }

    /// Emit a mutation.
    pub fn emit(&self, mutation: M) {
        if let Err(err) = self.tx.send(mutation) {
            tracing::debug!(mutation = ?err.0, "Mutation dropped, store is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_with_yields_before_incoming() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(3).unwrap();
        drop(tx);

        let mut source = ActionSource::new(rx).start_with(2).start_with(1);

        assert_eq!(source.next().await, Some(1));
        assert_eq!(source.next().await, Some(2));
        assert_eq!(source.next().await, Some(3));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn empty_source_ends_when_sender_dropped() {
        let (tx, rx) = mpsc::unbounded_channel::<u8>();
        drop(tx);

        let mut source = ActionSource::new(rx);
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn sink_preserves_emission_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = MutationSink::new(tx);
        sink.emit("first");
        sink.emit("second");
        drop(sink);

        assert_eq!(rx.recv().await, Some("first"));
        assert_eq!(rx.recv().await, Some("second"));
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn emit_after_consumer_dropped_is_ignored() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sink = MutationSink::new(tx);
        sink.emit(1u8);
    }
}
