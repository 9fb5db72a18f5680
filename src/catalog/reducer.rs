use crate::catalog::intent::CatalogIntent;
use crate::catalog::merge::{fetch_merge, Overlay};
use crate::catalog::product::Product;
use crate::catalog::state::{CatalogState, LoadStatus};
use crate::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::FetchStarted => {
                state.status = LoadStatus::Loading;
                state.last_error = None;
            }
            CatalogIntent::FetchSucceeded { batch } => {
                let overlay = Overlay {
                    deleted: &state.deleted_products,
                    updated: &state.updated_products,
                    added: &state.added_products,
                };
                state.products = fetch_merge(batch, &overlay);
                state.status = LoadStatus::Idle;
            }
            CatalogIntent::FetchFailed { reason } => {
                // products stay as they were; no partial merge
                state.status = LoadStatus::Failed;
                state.last_error = Some(reason);
            }
            CatalogIntent::ToggleFavorite { id } => {
                if !state.favorites.remove(&id) {
                    state.favorites.insert(id);
                }
            }
            CatalogIntent::Remove { id } => {
                state.products.retain(|product| product.id != id);
                state.added_products.retain(|product| product.id != id);
                state.updated_products.remove(&id);
                state.favorites.remove(&id);
                state.deleted_products.insert(id);
            }
            CatalogIntent::SetFilter { filter } => {
                state.filter = filter;
            }
            CatalogIntent::AddLocally { draft } => {
                let id = state.peek_local_id();
                let product = Product::from_draft(id, draft);
                state.added_products.push(product.clone());
                state.products.push(product);
                state.next_local_id = id.saturating_add(1);
            }
            CatalogIntent::EditLocally { product } => {
                if let Some(slot) = state.products.iter_mut().find(|p| p.id == product.id) {
                    *slot = product.clone();
                }
                // Additions are appended verbatim on merge, so edit them in place too.
                if let Some(slot) = state
                    .added_products
                    .iter_mut()
                    .find(|p| p.id == product.id)
                {
                    *slot = product.clone();
                }
                state.updated_products.insert(product.id, product);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{ProductDraft, ProductId};
    use crate::catalog::state::{Filter, LOCAL_ID_BASE};

    fn product(id: ProductId, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            price,
            images: vec![format!("https://img.example/{id}.png")],
        }
    }

    fn fetched(state: CatalogState, batch: Vec<Product>) -> CatalogState {
        let state = CatalogReducer::reduce(state, CatalogIntent::FetchStarted);
        CatalogReducer::reduce(state, CatalogIntent::FetchSucceeded { batch })
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            description: "made locally".to_string(),
            price: 5.0,
            images: vec!["local.png".to_string()],
        }
    }

    #[test]
    fn fetch_started_sets_loading_and_clears_error() {
        let state = CatalogState {
            status: LoadStatus::Failed,
            last_error: Some("boom".to_string()),
            ..CatalogState::default()
        };
        let state = CatalogReducer::reduce(state, CatalogIntent::FetchStarted);
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn fetch_failed_keeps_products() {
        let state = fetched(CatalogState::default(), vec![product(1, "A", 10.0)]);
        let state = CatalogReducer::reduce(state, CatalogIntent::FetchStarted);
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::FetchFailed {
                reason: "connection refused".to_string(),
            },
        );
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.last_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn toggle_favorite_is_an_involution() {
        let state = CatalogState::default();
        let once = CatalogReducer::reduce(state.clone(), CatalogIntent::ToggleFavorite { id: 3 });
        assert!(once.is_favorite(3));
        let twice = CatalogReducer::reduce(once, CatalogIntent::ToggleFavorite { id: 3 });
        assert_eq!(twice.favorites, state.favorites);
    }

    #[test]
    fn remove_clears_every_collection() {
        let state = fetched(CatalogState::default(), vec![product(1, "A", 10.0)]);
        let state = CatalogReducer::reduce(state, CatalogIntent::ToggleFavorite { id: 1 });
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::EditLocally {
                product: product(1, "A2", 11.0),
            },
        );
        let state = CatalogReducer::reduce(state, CatalogIntent::Remove { id: 1 });
        assert!(state.products.is_empty());
        assert!(state.favorites.is_empty());
        assert!(state.updated_products.is_empty());
        assert!(state.deleted_products.contains(&1));
    }

    #[test]
    fn remove_twice_is_visibly_a_noop() {
        let state = fetched(
            CatalogState::default(),
            vec![product(1, "A", 10.0), product(2, "B", 20.0)],
        );
        let once = CatalogReducer::reduce(state, CatalogIntent::Remove { id: 1 });
        let twice = CatalogReducer::reduce(once.clone(), CatalogIntent::Remove { id: 1 });
        assert_eq!(once, twice);
    }

    #[test]
    fn removed_product_never_returns_on_refetch() {
        let batch = vec![product(1, "A", 10.0), product(2, "B", 20.0)];
        let state = fetched(CatalogState::default(), batch.clone());
        let state = CatalogReducer::reduce(state, CatalogIntent::Remove { id: 1 });
        let state = fetched(state, batch);
        let ids: Vec<_> = state.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn added_product_is_visible_immediately_and_after_fetch() {
        let state = CatalogReducer::reduce(
            CatalogState::default(),
            CatalogIntent::AddLocally { draft: draft("New") },
        );
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].id, LOCAL_ID_BASE);

        let state = fetched(state, vec![product(1, "A", 10.0)]);
        let ids: Vec<_> = state.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, LOCAL_ID_BASE]);
        assert_eq!(state.products[1].title, "New");
    }

    #[test]
    fn consecutive_additions_get_distinct_ids() {
        let state = CatalogReducer::reduce(
            CatalogState::default(),
            CatalogIntent::AddLocally { draft: draft("One") },
        );
        let state = CatalogReducer::reduce(state, CatalogIntent::AddLocally { draft: draft("Two") });
        assert_eq!(state.added_products[0].id + 1, state.added_products[1].id);
    }

    #[test]
    fn edit_replaces_in_place_and_survives_refetch() {
        let batch = vec![product(1, "A", 10.0), product(2, "B", 20.0), product(3, "C", 30.0)];
        let state = fetched(CatalogState::default(), batch.clone());
        let state = CatalogReducer::reduce(
            state,
            CatalogIntent::EditLocally {
                product: product(2, "B edited", 25.0),
            },
        );
        assert_eq!(state.products[1].title, "B edited");

        let state = fetched(state, batch);
        assert_eq!(state.products[1].title, "B edited");
        assert_eq!(state.products[1].price, 25.0);
    }

    #[test]
    fn edit_of_local_addition_survives_refetch() {
        let state = CatalogReducer::reduce(
            CatalogState::default(),
            CatalogIntent::AddLocally { draft: draft("New") },
        );
        let mut edited = state.products[0].clone();
        edited.title = "Renamed".to_string();
        let state = CatalogReducer::reduce(state, CatalogIntent::EditLocally { product: edited });
        let state = fetched(state, vec![product(1, "A", 10.0)]);
        assert_eq!(state.products[1].title, "Renamed");
    }

    #[test]
    fn set_filter_only_touches_filter() {
        let state = fetched(CatalogState::default(), vec![product(1, "A", 10.0)]);
        let next = CatalogReducer::reduce(
            state.clone(),
            CatalogIntent::SetFilter {
                filter: Filter::Favorites,
            },
        );
        assert_eq!(next.filter, Filter::Favorites);
        assert_eq!(next.products, state.products);
    }
}
