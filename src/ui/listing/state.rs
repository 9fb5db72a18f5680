use crate::catalog::SortMethod;
use crate::mvi::MviState;

/// Screen-local state of the product list: everything the user controls
/// that isn't catalog data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    pub query: String,
    pub sort: SortMethod,
    /// Zero-based page index.
    pub page: usize,
    /// Row index within the current page.
    pub selected: usize,
    /// Keystrokes go to the search box while true.
    pub searching: bool,
}

impl MviState for ListingState {}

impl ListingState {
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}
