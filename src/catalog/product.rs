//! Product records as delivered by the remote catalog and created locally.

use serde::{Deserialize, Serialize};

/// Identifier shared by remote and locally created products.
pub type ProductId = u64;

/// A single catalog entry.
///
/// Field names follow the dummyjson wire shape. Extra fields in the payload
/// (`category`, `rating`, `stock`, ...) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative by convention; never validated by the store.
    pub price: f64,
    /// Image references in display order. The first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            price: draft.price,
            images: draft.images,
        }
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// First `max_chars` characters of the description, with an ellipsis
    /// when something was cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

/// The user-supplied part of a new product. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
}
