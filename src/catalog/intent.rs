use crate::catalog::product::{Product, ProductDraft, ProductId};
use crate::catalog::state::Filter;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    FetchStarted,
    FetchSucceeded { batch: Vec<Product> },
    /// The fetch errored or was rejected. `reason` is shown to the user.
    FetchFailed { reason: String },
    ToggleFavorite { id: ProductId },
    Remove { id: ProductId },
    SetFilter { filter: Filter },
    /// Append a new product; the reducer assigns its id.
    AddLocally { draft: ProductDraft },
    EditLocally { product: Product },
}

impl Intent for CatalogIntent {}
