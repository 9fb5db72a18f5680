//! Catalog state: the merged product view plus the local overlays.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::product::{Product, ProductId};
use crate::mvi::MviState;

/// First id handed out to locally created products.
///
/// The demo catalog numbers its products from 1 upwards, so local ids start
/// far above anything it serves.
pub const LOCAL_ID_BASE: ProductId = 1_000_000_000;

/// Outcome of the single outstanding fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// Which subset of `products` the list screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
}

impl Filter {
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::Favorites,
            Self::Favorites => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Favorites => "Favorites",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Materialized view shown to the user, unique by id.
    pub products: Vec<Product>,
    /// Created in this session, appended after every fetch-merge.
    pub added_products: Vec<Product>,
    /// Local edits; override the fetched entry with the same id.
    pub updated_products: BTreeMap<ProductId, Product>,
    /// Removed ids. These never come back, whatever the remote returns.
    pub deleted_products: BTreeSet<ProductId>,
    pub favorites: BTreeSet<ProductId>,
    pub status: LoadStatus,
    pub filter: Filter,
    /// Reason of the latest failed fetch, cleared when a new one starts.
    pub last_error: Option<String>,
    /// Allocation cursor for local ids.
    pub next_local_id: ProductId,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            added_products: Vec::new(),
            updated_products: BTreeMap::new(),
            deleted_products: BTreeSet::new(),
            favorites: BTreeSet::new(),
            status: LoadStatus::Idle,
            filter: Filter::All,
            last_error: None,
            next_local_id: LOCAL_ID_BASE,
        }
    }
}

impl MviState for CatalogState {}

impl CatalogState {
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// The id the next local creation receives.
    ///
    /// Never below the cursor and always above every id the state has seen,
    /// including deleted ones, so a new product cannot shadow or resurrect
    /// an existing id.
    pub fn peek_local_id(&self) -> ProductId {
        let highest_seen = self
            .products
            .iter()
            .chain(self.added_products.iter())
            .map(|product| product.id)
            .chain(self.updated_products.keys().copied())
            .chain(self.deleted_products.iter().copied())
            .max();
        match highest_seen {
            Some(highest) => self.next_local_id.max(highest.saturating_add(1)),
            None => self.next_local_id,
        }
    }
}
