//! Fetch-merge: reconcile a remote batch with the local overlays.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::catalog::product::{Product, ProductId};

/// Local mutations that a fetched batch is reconciled against.
pub struct Overlay<'a> {
    pub deleted: &'a BTreeSet<ProductId>,
    pub updated: &'a BTreeMap<ProductId, Product>,
    pub added: &'a [Product],
}

/// Build the displayed product list from a freshly fetched batch.
///
/// Remote order is kept, local additions go last. Deleted ids are dropped
/// before edits are applied, so a deletion beats an edit for the same id.
/// Duplicate ids keep their first occurrence.
pub fn fetch_merge(batch: Vec<Product>, overlay: &Overlay<'_>) -> Vec<Product> {
    let mut seen: HashSet<ProductId> = HashSet::with_capacity(batch.len() + overlay.added.len());
    let mut merged = Vec::with_capacity(batch.len() + overlay.added.len());

    let fetched = batch
        .into_iter()
        .filter(|product| !overlay.deleted.contains(&product.id))
        .map(|product| match overlay.updated.get(&product.id) {
            Some(edited) => edited.clone(),
            None => product,
        });

    for product in fetched.chain(overlay.added.iter().cloned()) {
        if overlay.deleted.contains(&product.id) {
            continue;
        }
        if seen.insert(product.id) {
            merged.push(product);
        }
    }
    merged
}
