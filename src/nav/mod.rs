//! Navigation state machine.
//!
//! The stack starts at [`Route::Menu`] and only changes on user intent.
//! Every change of the top frame publishes a [`FocusEvent`]; screens that
//! show server data refresh on it.

mod intent;
mod navigator;
mod reducer;
mod route;
mod state;

pub use intent::NavIntent;
pub use navigator::{FocusEvent, Navigator, Transition};
pub use reducer::NavReducer;
pub use route::Route;
pub use state::{Frame, FrameId, NavState};
