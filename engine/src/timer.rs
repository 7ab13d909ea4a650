//! Delayed return to the Home screen after a win.
//!
//! The delay runs as a tokio task wrapped in [`Abortable`]. The handle is owned
//! by the Playing screen, so leaving that screen (or replacing the session)
//! drops it and aborts the task. Events that were already sent carry the
//! session id and are filtered by the controller.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;

use crate::SessionId;

/// Messages produced by background tasks and drained in `App::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    ReturnHome { session: SessionId },
}

#[derive(Debug)]
pub(crate) struct ReturnHomeTimer {
    session: SessionId,
    abort: AbortHandle,
}

impl ReturnHomeTimer {
    /// Spawn the delay on the current tokio runtime.
    ///
    /// Returns `None` outside a runtime; the player can still leave manually.
    pub(crate) fn schedule(
        session: SessionId,
        delay: Duration,
        tx: mpsc::UnboundedSender<EngineEvent>,
    ) -> Option<Self> {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(%session, "Cannot schedule return home: {e}");
                return None;
            }
        };

        let (abort, registration) = AbortHandle::new_pair();
        let task = Abortable::new(
            async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send(EngineEvent::ReturnHome { session });
            },
            registration,
        );
        handle.spawn(task);
        tracing::debug!(%session, delay_ms = delay.as_millis() as u64, "Return home scheduled");

        Some(Self { session, abort })
    }

    pub(crate) fn session(&self) -> SessionId {
        self.session
    }
}

impl Drop for ReturnHomeTimer {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
