//! Scoped auto-dismiss timer.
//!
//! A [`DismissTimer`] runs a callback once after a delay on the tokio timer.
//! Cancelling it, or dropping it, guarantees the callback never runs.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

/// Handle to a pending delayed action.
#[derive(Debug)]
pub struct DismissTimer {
    handle: AbortHandle,
}

impl DismissTimer {
    /// Schedule `action` to run after `delay`.
    ///
    /// Returns `None` when called outside a tokio runtime; there is nothing to
    /// drive the timer then, so the caller keeps the item until it is
    /// dismissed by hand.
    pub fn schedule<F>(delay: Duration, action: F) -> Option<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = Handle::try_current().ok()?;
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });
        Some(DismissTimer {
            handle: task.abort_handle(),
        })
    }

    /// Stop the timer. No-op if it already fired.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the timer fired or was cancelled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
