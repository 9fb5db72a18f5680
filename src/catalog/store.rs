//! The product store: owner of the catalog state.
//!
//! All mutations go through [`CatalogReducer`]; this type adds the bits a
//! pure reducer cannot do on its own, namely reporting back allocated ids and
//! coordinating the one outstanding fetch.

use crate::catalog::intent::CatalogIntent;
use crate::catalog::product::{Product, ProductDraft, ProductId};
use crate::catalog::reducer::CatalogReducer;
use crate::catalog::state::{CatalogState, Filter};
use crate::gateway::{FetchError, ProductSource};

/// What happened to a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The batch was merged. `fetched` is the remote batch size, `visible`
    /// the size of the resulting product list.
    Merged { fetched: usize, visible: usize },
    /// Another fetch was already in flight; this request joined it.
    Coalesced,
}

#[derive(Debug, Default)]
pub struct ProductStore {
    state: CatalogState,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    fn dispatch(&mut self, intent: CatalogIntent) {
        crate::dispatch_mvi!(self, state, CatalogReducer, intent);
    }

    /// Mark a fetch as started.
    ///
    /// Returns `false` without touching state when one is already in flight.
    pub fn begin_fetch(&mut self) -> bool {
        if self.state.is_loading() {
            tracing::debug!("Fetch already in flight, coalescing request");
            return false;
        }
        tracing::info!("Fetching products");
        self.dispatch(CatalogIntent::FetchStarted);
        true
    }

    /// Apply the result of the fetch started by [`begin_fetch`](Self::begin_fetch).
    ///
    /// The error, if any, is recorded in state and handed back to the caller.
    pub fn complete_fetch(
        &mut self,
        result: Result<Vec<Product>, FetchError>,
    ) -> Result<FetchOutcome, FetchError> {
        match result {
            Ok(batch) => {
                let fetched = batch.len();
                self.dispatch(CatalogIntent::FetchSucceeded { batch });
                let visible = self.state.products.len();
                tracing::info!(fetched, visible, "Products merged");
                Ok(FetchOutcome::Merged { fetched, visible })
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Product fetch failed");
                self.dispatch(CatalogIntent::FetchFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Fetch from `source` and merge the result.
    ///
    /// There is no retry; a failed fetch has to be requested again.
    pub async fn request_fetch<S: ProductSource>(
        &mut self,
        source: &S,
    ) -> Result<FetchOutcome, FetchError> {
        if !self.begin_fetch() {
            return Ok(FetchOutcome::Coalesced);
        }
        let result = source.fetch_products().await;
        self.complete_fetch(result)
    }

    pub fn toggle_favorite(&mut self, id: ProductId) {
        self.dispatch(CatalogIntent::ToggleFavorite { id });
    }

    pub fn remove_product(&mut self, id: ProductId) {
        tracing::debug!(id, "Removing product");
        self.dispatch(CatalogIntent::Remove { id });
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.dispatch(CatalogIntent::SetFilter { filter });
    }

    /// Add a product that exists only in this session. Returns its new id.
    pub fn add_product_locally(&mut self, draft: ProductDraft) -> ProductId {
        let id = self.state.peek_local_id();
        self.dispatch(CatalogIntent::AddLocally { draft });
        tracing::debug!(id, "Added local product");
        id
    }

    pub fn edit_product_locally(&mut self, product: Product) {
        tracing::debug!(id = product.id, "Editing product locally");
        self.dispatch(CatalogIntent::EditLocally { product });
    }
}
