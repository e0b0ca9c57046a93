/// Marker trait for intent objects.
///
/// Intents are key presses translated to screen actions, or catalog
/// outcomes that arrived for a screen.
pub trait Intent: Send + 'static {}
