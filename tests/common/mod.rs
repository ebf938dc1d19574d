//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use async_trait::async_trait;
use repolist::model::RepoModel;
use repolist::service::{FetchError, RepositoryService};
use repolist::ui::mvi::StateUpdates;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Mutex;

/// Build a repository record with just enough fields filled in.
pub fn repo(id: u64, name: &str) -> RepoModel {
    RepoModel {
        id,
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        description: None,
        html_url: format!("https://github.com/octocat/{}", name),
        language: None,
        stargazers_count: 0,
        fork: false,
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Drain a state stream until the store stops.
pub async fn collect_states<S>(mut updates: StateUpdates<S>) -> Vec<S> {
    let mut states = Vec::new();
    while let Some(state) = updates.next().await {
        states.push(state);
    }
    states
}

/// One scripted reply from [`ScriptedService`].
pub enum Reply {
    Repos(Vec<RepoModel>),
    Fail(&'static str),
}

/// Repository service returning queued replies in order.
///
/// When the script runs out it returns an empty list.
pub struct ScriptedService {
    replies: Mutex<VecDeque<Reply>>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedService {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of fetches that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryService for ScriptedService {
    async fn fetch_repositories(&self) -> Result<Vec<RepoModel>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let reply = self.replies.lock().await.pop_front();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match reply {
            Some(Reply::Repos(repos)) => Ok(repos),
            Some(Reply::Fail(message)) => Err(FetchError::Other(message.to_string())),
            None => Ok(Vec::new()),
        }
    }
}
