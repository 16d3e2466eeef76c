//! Single-use handle for a fired request.
//!
//! Every fire method spawns one task and returns a [`PendingOutcome`]. The task
//! sends exactly one [`Outcome`] through a oneshot channel; awaiting the handle
//! consumes it, so the outcome can only ever be received once.
//!
//! Dropping the handle does not cancel anything. The task still runs the
//! request to completion and its send is discarded.

use crate::error::{PlugError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// The response-or-error value delivered once per fired request.
pub type Outcome = Result<reqwest::Response>;

/// Future resolving to the [`Outcome`] of one fired request.
#[derive(Debug)]
#[must_use = "the request runs regardless, but its outcome is lost unless awaited"]
pub struct PendingOutcome {
    receiver: oneshot::Receiver<Outcome>,
}

impl PendingOutcome {
    /// Wrap the receiving half of a oneshot channel.
    pub(crate) fn new(receiver: oneshot::Receiver<Outcome>) -> Self {
        PendingOutcome { receiver }
    }

    /// Spawn `work` on the current Tokio runtime and return its handle.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub(crate) fn spawn<F>(work: F) -> Self
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // Receiver may be gone; the request still ran to completion.
            let _ = tx.send(work.await);
        });
        PendingOutcome::new(rx)
    }
}

impl Future for PendingOutcome {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(PlugError::Request(
                    "request task ended without an outcome".to_string(),
                ))
            })
        })
    }
}
