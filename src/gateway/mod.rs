//! Remote fetch gateway.
//!
//! The store never talks HTTP itself; it awaits a [`ProductSource`] and merges
//! whatever batch comes back.

mod error;
mod http;

use std::future::Future;

use crate::catalog::Product;

pub use error::FetchError;
pub use http::{listing_url, HttpGateway, ProductsResponse};

/// Supplies one batch of raw products per call.
pub trait ProductSource {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}
