//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use parking_lot::Mutex;
use prodview::catalog::{Product, ProductDraft, ProductId};
use prodview::config::Config;
use prodview::gateway::{FetchError, ProductSource};
use prodview::ui::app::App;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub fn product(id: ProductId, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        price,
        images: vec![format!("{id}.png")],
    }
}

pub fn draft(title: &str, price: f64) -> ProductDraft {
    ProductDraft {
        title: title.to_string(),
        description: format!("{title} made locally"),
        price,
        images: vec!["local.png".to_string()],
    }
}

pub fn ids(products: &[Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id).collect()
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn make_app() -> App {
    App::new(Config::default())
}

/// In-memory `ProductSource` answering from a queue of scripted results.
///
/// When the queue is empty it answers with an empty batch.
#[derive(Clone, Default)]
pub struct FakeSource {
    responses: Arc<Mutex<VecDeque<Result<Vec<Product>, FetchError>>>>,
    calls: Arc<Mutex<usize>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, batch: Vec<Product>) {
        self.responses.lock().push_back(Ok(batch));
    }

    pub fn push_err(&self, err: FetchError) {
        self.responses.lock().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl ProductSource for FakeSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        *self.calls.lock() += 1;
        self.responses.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
