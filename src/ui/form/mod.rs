//! Create/edit product form.
//!
//! - `state.rs` - form state and field values
//! - `intent.rs` - user actions
//! - `reducer.rs` - state transitions
//! - `validate.rs` - turning input into a [`ProductDraft`](crate::catalog::ProductDraft)

mod intent;
mod reducer;
mod state;
mod validate;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{format_price, FormField, FormMode, FormState, FormValues};
pub use validate::{parse_images, validate, FormError};
