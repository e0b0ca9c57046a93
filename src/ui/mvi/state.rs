/// Marker trait for screen and navigation state.
///
/// States are cloned into the reducer and compared in tests.
pub trait UiState: Clone + PartialEq + Send + 'static {}
