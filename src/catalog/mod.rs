//! Product catalog state and its reconciliation rules.
//!
//! The catalog keeps the fetched products together with three local
//! overlays (additions, edits, deletions) and a favorites set. Every change
//! is an intent run through [`CatalogReducer`]; [`ProductStore`] is the
//! owning container the rest of the application talks to.

mod intent;
mod merge;
mod product;
mod reducer;
mod state;
mod store;
pub mod view;

pub use intent::CatalogIntent;
pub use merge::{fetch_merge, Overlay};
pub use product::{Product, ProductDraft, ProductId};
pub use reducer::CatalogReducer;
pub use state::{CatalogState, Filter, LoadStatus, LOCAL_ID_BASE};
pub use store::{FetchOutcome, ProductStore};
pub use view::{list_page, visible_products, ListQuery, ListingPage, SortMethod};
