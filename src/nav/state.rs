use std::fmt;

use crate::nav::route::Route;
use crate::ui::mvi::UiState;

/// Identity of one stack frame. Never reused within a navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

impl FrameId {
    pub const ROOT: FrameId = FrameId(0);
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry on the navigation stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub id: FrameId,
    pub route: Route,
}

/// The navigation stack. The bottom frame is always the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    stack: Vec<Frame>,
    next_id: u64,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            stack: vec![Frame {
                id: FrameId::ROOT,
                route: Route::Menu,
            }],
            next_id: 1,
        }
    }
}

impl UiState for NavState {}

impl NavState {
    /// Frame currently shown.
    pub fn top(&self) -> &Frame {
        // The root frame is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn contains(&self, id: FrameId) -> bool {
        self.stack.iter().any(|f| f.id == id)
    }

    pub(super) fn push(&mut self, route: Route) {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.stack.push(Frame { id, route });
    }

    pub(super) fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}
