//! Reducer trait.

use super::intent::Intent;
use super::state::MviState;

/// The only place where state transitions happen.
///
/// Implementations must stay pure: no I/O, no clocks, no randomness.
/// Anything that needs those (HTTP, id generation from time) happens outside
/// and arrives as intent payload.
pub trait Reducer {
    type State: MviState;

    type Intent: Intent;

    /// Consume the current state and an intent, returning the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
