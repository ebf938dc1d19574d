//! Runtime that drives a [`Reactor`] on a single tokio task.

use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::reactor::{ActionSource, MutationSink, Reactor};

/// Errors returned by [`ReactorHandle`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store task has stopped and no longer accepts actions.
    #[error("reactor store is closed")]
    Closed,

    /// The store task panicked or was cancelled.
    #[error("reactor task failed: {0}")]
    Task(String),
}

/// Entry point for running reactors.
pub struct Store;

impl Store {
    /// Spawn the reactor loop and return a handle to it.
    ///
    /// Observers read the latest state through [`ReactorHandle::watch`].
    /// Actions are handled one at a time; the next action is taken only after
    /// the previous action's mutation sequence is complete.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch<R: Reactor>(reactor: R) -> ReactorHandle<R> {
        Self::spawn(reactor, None)
    }

    /// Like [`Store::launch`], plus an ordered stream of every state.
    ///
    /// The stream yields the initial state first, then one state per folded
    /// mutation. States are buffered until read, so drop the stream when it is
    /// no longer consumed; the store stops feeding it once it is gone.
    pub fn launch_with_updates<R: Reactor>(
        reactor: R,
    ) -> (ReactorHandle<R>, StateUpdates<R::State>) {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let handle = Self::spawn(reactor, Some(updates_tx));
        (handle, StateUpdates { rx: updates_rx })
    }

    fn spawn<R: Reactor>(
        reactor: R,
        updates_tx: Option<mpsc::UnboundedSender<R::State>>,
    ) -> ReactorHandle<R> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(reactor.initial_state());

        let task = tokio::spawn(run(reactor, ActionSource::new(action_rx), state_tx, updates_tx));

        ReactorHandle {
            actions: action_tx,
            state: state_rx,
            task,
        }
    }
}

async fn run<R: Reactor>(
    reactor: R,
    actions: ActionSource<R::Action>,
    state_tx: watch::Sender<R::State>,
    mut updates_tx: Option<mpsc::UnboundedSender<R::State>>,
) -> R::State {
    let mut actions = reactor.transform(actions);
    let mut state = reactor.initial_state();
    publish(&state, &state_tx, &mut updates_tx);

    while let Some(action) = actions.next().await {
        tracing::debug!(action = ?action, "Handling action");

        let (mutation_tx, mut mutation_rx) = mpsc::unbounded_channel();
        let mutate = reactor.mutate(action, MutationSink::new(mutation_tx));
        let fold = async {
            while let Some(mutation) = mutation_rx.recv().await {
                tracing::trace!(mutation = ?mutation, "Reducing mutation");
                state = R::reduce(std::mem::take(&mut state), mutation);
                publish(&state, &state_tx, &mut updates_tx);
            }
        };
        tokio::join!(mutate, fold);
    }

    tracing::debug!("Action stream ended, store stopping");
    state
}

fn publish<S: Clone>(
    state: &S,
    state_tx: &watch::Sender<S>,
    updates_tx: &mut Option<mpsc::UnboundedSender<S>>,
) {
    state_tx.send_replace(state.clone());

    if let Some(tx) = updates_tx {
        if tx.send(state.clone()).is_err() {
            tracing::debug!("State stream dropped by its reader");
            *updates_tx = None;
        }
    }
}

/// Handle used to feed actions into a running store.
pub struct ReactorHandle<R: Reactor> {
    actions: mpsc::UnboundedSender<R::Action>,
    state: watch::Receiver<R::State>,
    task: JoinHandle<R::State>,
}

impl<R: Reactor> ReactorHandle<R> {
    /// Queue an action.
    pub fn send(&self, action: R::Action) -> Result<(), StoreError> {
        self.actions.send(action).map_err(|_| StoreError::Closed)
    }

    /// Latest folded state.
    pub fn current_state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Receiver that always holds the latest state.
    ///
    /// Intermediate states may be skipped; launch with
    /// [`Store::launch_with_updates`] to see all of them.
    pub fn watch(&self) -> watch::Receiver<R::State> {
        self.state.clone()
    }

    /// Stop accepting actions, finish the queued ones and return the final state.
    pub async fn shutdown(self) -> Result<R::State, StoreError> {
        drop(self.actions);
        self.task
            .await
            .map_err(|err| StoreError::Task(err.to_string()))
    }
}

/// Ordered, single-consumer stream of every state the store produces.
///
/// Unread states stay buffered; drop the stream once it is no longer read.
#[derive(Debug)]
pub struct StateUpdates<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S> StateUpdates<S> {
    /// Next state, or `None` once the store has stopped and all states were read.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }
}
