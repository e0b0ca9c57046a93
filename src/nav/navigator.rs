//! Navigation stack with focus notifications.

use tokio::sync::broadcast;

use crate::nav::intent::NavIntent;
use crate::nav::reducer::NavReducer;
use crate::nav::route::Route;
use crate::nav::state::{Frame, FrameId, NavState};
use crate::ui::mvi::Reducer;

const FOCUS_CHANNEL_CAPACITY: usize = 32;

/// Published every time a frame becomes the top of the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusEvent {
    pub frame: FrameId,
    pub route: Route,
}

/// What a dispatched intent did to the stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Pushed(Frame),
    Popped { removed: Frame, revealed: Frame },
    Ignored,
}

/// Owns the navigation stack and tells subscribers which frame gained focus.
pub struct Navigator {
    state: NavState,
    focus_tx: broadcast::Sender<FocusEvent>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        let (focus_tx, _) = broadcast::channel(FOCUS_CHANNEL_CAPACITY);
        Self {
            state: NavState::default(),
            focus_tx,
        }
    }

    /// Receive a [`FocusEvent`] for every frame that becomes active after
    /// this call.
    pub fn subscribe(&self) -> broadcast::Receiver<FocusEvent> {
        self.focus_tx.subscribe()
    }

    /// Announce the initial frame to subscribers.
    pub fn start(&self) {
        self.publish_focus();
    }

    pub fn dispatch(&mut self, intent: NavIntent) -> Transition {
        let before = self.state.top().clone();
        self.state = NavReducer::reduce(self.state.clone(), intent);
        let after = self.state.top();

        if after.id == before.id {
            return Transition::Ignored;
        }

        let transition = if self.state.contains(before.id) {
            Transition::Pushed(after.clone())
        } else {
            Transition::Popped {
                removed: before,
                revealed: after.clone(),
            }
        };

        tracing::debug!(
            frame = %after.id,
            screen = after.route.name(),
            depth = self.state.depth(),
            "Navigation"
        );
        self.publish_focus();
        transition
    }

    pub fn navigate(&mut self, route: Route) -> Transition {
        self.dispatch(NavIntent::Navigate(route))
    }

    pub fn back(&mut self) -> Transition {
        self.dispatch(NavIntent::Back)
    }

    pub fn current(&self) -> &Frame {
        self.state.top()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    fn publish_focus(&self) {
        let top = self.state.top();
        // No subscribers is fine; the event is simply dropped.
        let _ = self.focus_tx.send(FocusEvent {
            frame: top.id,
            route: top.route.clone(),
        });
    }
}
