//! Read-side projection used by the list screen and the `list` command.

use std::cmp::Ordering;

use clap::ValueEnum;

use crate::catalog::product::Product;
use crate::catalog::state::{CatalogState, Filter};

/// Ordering applied after search and filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMethod {
    /// Keep the catalog order.
    #[default]
    None,
    /// By title, ignoring case.
    Alphabetical,
    PriceAsc,
    PriceDesc,
}

impl SortMethod {
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Alphabetical,
            Self::Alphabetical => Self::PriceAsc,
            Self::PriceAsc => Self::PriceDesc,
            Self::PriceDesc => Self::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Unsorted",
            Self::Alphabetical => "A-Z",
            Self::PriceAsc => "Price ↑",
            Self::PriceDesc => "Price ↓",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::Alphabetical => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
            Self::PriceAsc => a.price.total_cmp(&b.price),
            Self::PriceDesc => b.price.total_cmp(&a.price),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListQuery<'a> {
    pub search: &'a str,
    pub sort: SortMethod,
    /// Zero-based; clamped to the last page.
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<'a> {
    pub items: Vec<&'a Product>,
    /// Zero-based index of the page actually returned.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl ListingPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Search, then the store's filter, then sort. Sorting is stable.
pub fn visible_products<'a>(
    state: &'a CatalogState,
    search: &str,
    sort: SortMethod,
) -> Vec<&'a Product> {
    let needle = search.trim().to_lowercase();
    let mut items: Vec<&Product> = state
        .products
        .iter()
        .filter(|product| product.matches(&needle))
        .filter(|product| match state.filter {
            Filter::All => true,
            Filter::Favorites => state.is_favorite(product.id),
        })
        .collect();
    if sort != SortMethod::None {
        items.sort_by(|a, b| sort.compare(a, b));
    }
    items
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

pub fn list_page<'a>(state: &'a CatalogState, query: &ListQuery<'_>) -> ListingPage<'a> {
    let items = visible_products(state, query.search, query.sort);
    let page_size = query.page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = query.page.min(total_pages.saturating_sub(1));
    let items = items
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect();
    ListingPage {
        items,
        page,
        total_pages,
        total_items,
    }
}
