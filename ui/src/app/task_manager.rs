use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use windowing::{TaskOutput, WindowIdentity};

/// Default number of jobs allowed to run at once
pub const DEFAULT_MAX_CONCURRENT_TASKS: usize = 4;

/// A finished job, waiting to be handed to its owning window.
pub struct TaskCompletion {
    pub owner: WindowIdentity,
    pub key: String,
    pub outcome: AppResult<TaskOutput>,
    generation: u64,
}

impl std::fmt::Debug for TaskCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskCompletion")
            .field("owner", &self.owner)
            .field("key", &self.key)
            .field("ok", &self.outcome.is_ok())
            .finish()
    }
}

struct ActiveTask {
    generation: u64,
    owner: WindowIdentity,
    token: CancellationToken,
}

/// Runs background jobs for windows.
///
/// Jobs are keyed by a logical request name. Spawning a job under a key that
/// is already running cancels the running one, so each key completes at most
/// once per spawn and only with the latest result. Completions are collected
/// on the UI thread with [`TaskManager::drain_completed`].
pub struct TaskManager {
    runtime: Handle,
    semaphore: Arc<Semaphore>,
    tx: Sender<TaskCompletion>,
    rx: Receiver<TaskCompletion>,
    active: HashMap<String, ActiveTask>,
    next_generation: u64,
    shutdown: CancellationToken,
}

impl TaskManager {
    pub fn new(runtime: Handle) -> Self {
        Self::with_concurrency(runtime, DEFAULT_MAX_CONCURRENT_TASKS)
    }

    pub fn with_concurrency(runtime: Handle, max_concurrent: usize) -> Self {
        let (tx, rx) = channel();
        Self {
            runtime,
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            tx,
            rx,
            active: HashMap::new(),
            next_generation: 0,
            shutdown: CancellationToken::new(),
        }
    }

    /// Starts `job` for `owner` under `key`, cancelling any job already
    /// running under the same key.
    pub fn spawn<F>(&mut self, owner: WindowIdentity, key: impl Into<String>, job: F)
    where
        F: Future<Output = AppResult<TaskOutput>> + Send + 'static,
    {
        let key = key.into();
        if let Some(previous) = self.active.remove(&key) {
            previous.token.cancel();
            log::debug!("Replacing running task '{key}'");
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        let token = self.shutdown.child_token();
        self.active.insert(
            key.clone(),
            ActiveTask {
                generation,
                owner,
                token: token.clone(),
            },
        );

        let semaphore = self.semaphore.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let main = async {
                let Ok(_permit) = semaphore.acquire().await else {
                    return None;
                };
                Some(job.await)
            };

            tokio::select! {
                outcome = main => {
                    let Some(outcome) = outcome else {
                        return;
                    };
                    if token.is_cancelled() {
                        return;
                    }
                    let completion = TaskCompletion { owner, key, outcome, generation };
                    if let Err(e) = tx.send(completion) {
                        log::warn!("Task completion could not be delivered: {e}");
                    }
                }
                () = token.cancelled() => {
                    log::debug!("Task '{key}' cancelled");
                }
            }
        });
    }

    /// Cancels the job running under `key`. Returns `false` if there was none.
    pub fn cancel(&mut self, key: &str) -> bool {
        match self.active.remove(key) {
            Some(task) => {
                task.token.cancel();
                log::info!("Cancelled task: {key}");
                true
            }
            None => false,
        }
    }

    /// Cancels every job owned by `owner`.
    pub fn cancel_for_window(&mut self, owner: WindowIdentity) -> usize {
        let keys: Vec<String> = self
            .active
            .iter()
            .filter(|(_, task)| task.owner == owner)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &keys {
            self.cancel(key);
        }
        keys.len()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains_key(key)
    }

    pub fn active_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.active.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Collects finished jobs. Results from superseded or cancelled jobs are
    /// discarded here.
    pub fn drain_completed(&mut self) -> Vec<TaskCompletion> {
        let mut completed = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            let current = self
                .active
                .get(&completion.key)
                .is_some_and(|task| task.generation == completion.generation);
            if current {
                self.active.remove(&completion.key);
                completed.push(completion);
            } else {
                log::debug!("Dropping stale completion for '{}'", completion.key);
            }
        }
        completed
    }

    /// Cancels all jobs.
    pub fn shutdown(&mut self) {
        self.shutdown.cancel();
        self.active.clear();
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Builds the error a job reports when it gives up.
pub fn task_error(key: &str, message: impl std::fmt::Display) -> AppError {
    AppError::Task(format!("{key}: {message}"))
}
