use crate::nav::route::Route;
use crate::ui::mvi::Intent;

/// User-triggered navigation. There are no timed transitions.
#[derive(Debug, Clone)]
pub enum NavIntent {
    /// Push `route` on top of the stack.
    Navigate(Route),
    /// Pop the top frame. Ignored at the root.
    Back,
}

impl Intent for NavIntent {}
