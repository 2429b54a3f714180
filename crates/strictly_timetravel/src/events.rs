//! Change notifications for whoever renders the game.

use super::action::Move;
use tracing::trace;

/// Something changed on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was accepted and became the new latest step.
    Played {
        /// The move that was applied.
        mv: Move,
        /// History step now showing the result.
        step: usize,
        /// Snapshots dropped from the abandoned branch.
        discarded: usize,
    },
    /// The current step moved without touching history.
    Jumped {
        /// Step before the jump.
        from: usize,
        /// Step after the jump.
        to: usize,
    },
}

/// Handle returned by [`GameController::subscribe`](crate::GameController::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback = Box<dyn FnMut(&GameEvent)>;

/// Registered callbacks, notified in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(Subscription, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: Subscription) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub(crate) fn notify(&mut self, event: &GameEvent) {
        let observers = self.callbacks.len();
        trace!(?event, observers, "Notifying observers");
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
