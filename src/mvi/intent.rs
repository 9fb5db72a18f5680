//! Marker trait for intents.

/// Something that happened and may change state.
///
/// Intents cover:
/// - key presses translated into actions (toggle favorite, next page)
/// - completed background work (a fetch resolved or failed)
///
/// Reducers consume intents to produce the next state.
pub trait Intent: Send + 'static {}
