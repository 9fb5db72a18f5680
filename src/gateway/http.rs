use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;

use crate::catalog::Product;
use crate::config::ApiConfig;
use crate::gateway::error::FetchError;
use crate::gateway::ProductSource;

/// Longest error body kept in a [`FetchError::Status`].
const MAX_ERROR_BODY: usize = 200;

/// Listing envelope returned by `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// reqwest-backed client for the remote product listing.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    url: String,
    request_timeout: Option<Duration>,
}

impl HttpGateway {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds.into()))
            .build()
            .map_err(FetchError::Client)?;

        let request_timeout = match api.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs.into())),
        };

        Ok(Self {
            client,
            url: listing_url(&api.base_url, api.limit, api.skip),
            request_timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn do_fetch(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;
        let listing: ProductsResponse = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            received = listing.products.len(),
            total = ?listing.total,
            "Decoded product listing"
        );
        Ok(listing.products)
    }
}

impl ProductSource for HttpGateway {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        tracing::debug!(url = %self.url, "GET product listing");
        match self.request_timeout {
            Some(limit) => timeout(limit, self.do_fetch())
                .await
                .map_err(|_| FetchError::Timeout {
                    seconds: limit.as_secs(),
                })?,
            None => self.do_fetch().await,
        }
    }
}

/// `{base}/products?limit={limit}&skip={skip}`, tolerating a trailing slash.
pub fn listing_url(base_url: &str, limit: u32, skip: u32) -> String {
    format!(
        "{}/products?limit={}&skip={}",
        base_url.trim_end_matches('/'),
        limit,
        skip
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
