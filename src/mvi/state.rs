//! Marker trait for reducer-owned state.

/// States are plain values: cloneable, comparable for change detection,
/// and constructible empty so they can be swapped out during dispatch.
pub trait MviState: Clone + PartialEq + Default + Send + 'static {}
