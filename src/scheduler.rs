//! Delayed, fire-and-forget continuations.
//!
//! Settle delays must never block the thread that services the window, so
//! they are submitted here instead of sleeping in place.

use std::time::Duration;
use tokio::runtime::Handle;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`. Returns immediately; not cancellable.
    fn schedule(&self, delay: Duration, task: Task);
}

/// Runs tasks on a tokio runtime (Tauri's async runtime in the app).
#[derive(Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Scheduler bound to Tauri's shared async runtime.
    pub fn tauri() -> Self {
        Self::new(tauri::async_runtime::handle().inner().clone())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}
