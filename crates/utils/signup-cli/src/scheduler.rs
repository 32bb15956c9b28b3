//! Deferred tasks on the current-thread tokio runtime.

use std::cell::RefCell;
use std::time::Duration;

use lib_signup::Scheduler;
use tokio::task::JoinHandle;

/// Runs each task on a `spawn_local` sleep. Must be used inside a `LocalSet`.
#[derive(Default)]
pub struct TokioScheduler {
    handles: RefCell<Vec<JoinHandle<()>>>,
}

impl TokioScheduler {
    /// Wait for every scheduled task, including ones scheduled while waiting.
    pub async fn drain(&self) {
        loop {
            let handles = std::mem::take(&mut *self.handles.borrow_mut());
            if handles.is_empty() {
                break;
            }
            for handle in handles {
                if let Err(err) = handle.await {
                    tracing::warn!(error = %err, "Deferred task did not complete");
                }
            }
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let handle = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        self.handles.borrow_mut().push(handle);
    }
}
