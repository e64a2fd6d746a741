//! Tracking of in-flight fetches owned by a screen.

use std::future::{poll_fn, Future};

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinSet};

/// Set of background tasks tied to one screen's lifetime.
///
/// Tasks run on the runtime given at construction. Dropping the scope
/// aborts whatever is still running.
pub struct TaskScope {
    runtime: Handle,
    tasks: Mutex<JoinSet<()>>,
}

impl TaskScope {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Spawn `future` and track it until it completes.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock();
        while let Some(outcome) = tasks.try_join_next() {
            log_outcome(outcome);
        }
        tasks.spawn_on(future, &self.runtime);
    }

    /// Number of tasks not yet reaped.
    pub fn in_flight(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Wait until every tracked task, including ones spawned meanwhile,
    /// has finished.
    pub async fn settle(&self) {
        while let Some(outcome) = poll_fn(|cx| self.tasks.lock().poll_join_next(cx)).await {
            log_outcome(outcome);
        }
    }

    /// Abort every tracked task.
    pub fn cancel_all(&self) {
        let mut tasks = self.tasks.lock();
        if !tasks.is_empty() {
            tracing::debug!(tasks = tasks.len(), "cancelling in-flight fetches");
        }
        tasks.abort_all();
    }
}

fn log_outcome(outcome: Result<(), JoinError>) {
    match outcome {
        Ok(()) => {}
        Err(err) if err.is_cancelled() => tracing::debug!("fetch cancelled"),
        Err(err) => tracing::error!(error = %err, "fetch task panicked"),
    }
}
