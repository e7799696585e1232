//! Deferred display completion for the route and map views.
//!
//! The core never waits on these. The view layer schedules one, shows a
//! loading state, and either waits for it or cancels it when the user closes
//! the panel.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutcome {
    Shown,
    Cancelled,
}

/// Handle to a pending display.
#[derive(Debug)]
pub struct DisplayHandle {
    label: &'static str,
    task: JoinHandle<()>,
}

impl DisplayHandle {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn cancel(&self) {
        debug!(label = self.label, "Display cancelled");
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn wait(self) -> DisplayOutcome {
        match self.task.await {
            Ok(()) => DisplayOutcome::Shown,
            Err(_) => DisplayOutcome::Cancelled,
        }
    }
}

/// Starts a display that completes after `delay`. Must be called inside a tokio runtime.
pub fn schedule(label: &'static str, delay: Duration) -> DisplayHandle {
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        debug!(label, "Display ready");
    });
    DisplayHandle { label, task }
}
