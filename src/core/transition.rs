use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::channel::oneshot;

use crate::types::TransitionOutcome;

/// Lifecycle of a queued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for its turn at the head of the queue
    Queued,
    /// Head of the queue, animating since `started`
    Active { started: Duration },
    /// Target reached and removed from the queue
    Completed,
}

impl Phase {
    /// Start time, recording `now` on the first active tick
    pub fn activate(&mut self, now: Duration) -> Duration {
        match *self {
            Phase::Active { started } => started,
            _ => {
                *self = Phase::Active { started: now };
                now
            }
        }
    }
}

/// Sending half of a transition's one-shot completion signal
#[derive(Debug)]
pub struct Completer {
    sender: oneshot::Sender<TransitionOutcome>,
}

impl Completer {
    pub fn complete(self, outcome: TransitionOutcome) {
        // Caller may have dropped its handle
        let _ = self.sender.send(outcome);
    }
}

/// Completion handle returned by every animator operation
///
/// Await it, or poll it from a frame loop with `try_outcome`. If the animator is
/// dropped first the handle resolves to `TransitionOutcome::Abandoned`.
#[derive(Debug)]
#[must_use = "a transition handle does nothing unless awaited or polled"]
pub struct Transition {
    receiver: oneshot::Receiver<TransitionOutcome>,
    outcome: Option<TransitionOutcome>,
}

impl Transition {
    pub fn pending() -> (Completer, Transition) {
        let (sender, receiver) = oneshot::channel();
        (
            Completer { sender },
            Transition {
                receiver,
                outcome: None,
            },
        )
    }

    pub fn resolved(outcome: TransitionOutcome) -> Transition {
        let (completer, transition) = Transition::pending();
        completer.complete(outcome);
        transition
    }

    /// Non-blocking check; `None` while still running
    pub fn try_outcome(&mut self) -> Option<TransitionOutcome> {
        if self.outcome.is_none() {
            self.outcome = match self.receiver.try_recv() {
                Ok(outcome) => outcome,
                Err(oneshot::Canceled) => Some(TransitionOutcome::Abandoned),
            };
        }
        self.outcome
    }

    pub fn is_finished(&mut self) -> bool {
        self.try_outcome().is_some()
    }
}

impl Future for Transition {
    type Output = TransitionOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(outcome) = this.outcome {
            return Poll::Ready(outcome);
        }
        Pin::new(&mut this.receiver).poll(cx).map(|result| {
            let outcome = result.unwrap_or(TransitionOutcome::Abandoned);
            this.outcome = Some(outcome);
            outcome
        })
    }
}
