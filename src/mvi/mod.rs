//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable application state in prodview flows through these
//! traits: the product catalog itself as well as the screen-local state of
//! the list and the create/edit form.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned to produce the next state
//! - **Intent**: user actions or completed background work
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::MviState;

/// Run a reducer over a state field in place.
///
/// The field is swapped out with its `Default` for the duration of the call,
/// so reducers can take the state by value without cloning.
#[macro_export]
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}
