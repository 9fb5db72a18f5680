use crate::catalog::{
    list_page, ListQuery, ListingPage, LoadStatus, Product, ProductId, ProductStore,
};
use crate::config::Config;
use crate::dispatch_mvi;
use crate::gateway::FetchError;
use crate::ui::form::{validate, FormIntent, FormMode, FormReducer, FormState};
use crate::ui::listing::{ListingIntent, ListingReducer, ListingState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    List,
    Detail(ProductId),
}

/// Work the UI thread hands to the async side.
#[derive(Debug)]
pub enum UiCommand {
    Fetch,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    screen: Screen,
    size: Option<(u16, u16)>,
    config: Config,
    /// Catalog state (MVI pattern, owned by the store).
    store: ProductStore,
    /// List screen state (MVI pattern).
    listing: ListingState,
    /// Create/edit form overlay (MVI pattern).
    form: FormState,
    command_sender: Option<UiCommandSender>,
    /// Animation tick for the loading spinner.
    tick: u8,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            screen: Screen::List,
            size: None,
            config,
            store: ProductStore::new(),
            listing: ListingState::default(),
            form: FormState::default(),
            command_sender: None,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        if self.store.state().is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // Fetch
    // ========================================================================

    /// Ask the worker for a fresh batch. Ignored while one is in flight.
    pub fn request_fetch(&mut self) {
        if !self.store.begin_fetch() {
            return;
        }
        let sent = match &self.command_sender {
            Some(sender) => match sender.try_send(UiCommand::Fetch) {
                Ok(()) => true,
                Err(err) => {
                    tracing::error!("Fetch command send failed: {}", err);
                    false
                }
            },
            None => false,
        };
        if !sent {
            self.on_fetch_completed(Err(FetchError::WorkerUnavailable));
        }
    }

    pub fn on_fetch_completed(&mut self, result: Result<Vec<Product>, FetchError>) {
        // Already logged and recorded in the store; the list shows the reason.
        let _ = self.store.complete_fetch(result);
        self.sync_listing();
    }

    // ========================================================================
    // List screen
    // ========================================================================

    /// The page the list screen currently shows.
    pub fn current_page(&self) -> ListingPage<'_> {
        list_page(
            self.store.state(),
            &ListQuery {
                search: &self.listing.query,
                sort: self.listing.sort,
                page: self.listing.page,
                page_size: self.config.ui.page_size,
            },
        )
    }

    /// The highlighted row. `None` while loading or failed, since the list
    /// screen shows no rows then.
    pub fn selected_product(&self) -> Option<&Product> {
        if self.store.state().status != LoadStatus::Idle {
            return None;
        }
        self.current_page()
            .items
            .get(self.listing.selected)
            .copied()
    }

    pub fn dispatch_listing(&mut self, intent: ListingIntent) {
        dispatch_mvi!(self, listing, ListingReducer, intent);
    }

    pub fn move_selection(&mut self, direction: i32) {
        let page_len = self.current_page().items.len();
        if direction.is_negative() {
            self.dispatch_listing(ListingIntent::MoveUp { page_len });
        } else {
            self.dispatch_listing(ListingIntent::MoveDown { page_len });
        }
    }

    pub fn next_page(&mut self) {
        let total_pages = self.current_page().total_pages;
        self.dispatch_listing(ListingIntent::NextPage { total_pages });
    }

    pub fn prev_page(&mut self) {
        self.dispatch_listing(ListingIntent::PrevPage);
    }

    pub fn toggle_filter(&mut self) {
        let filter = self.store.state().filter.toggled();
        self.store.set_filter(filter);
        self.dispatch_listing(ListingIntent::ResetPage);
    }

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(id) = self.selected_product().map(|p| p.id) {
            self.store.toggle_favorite(id);
            self.sync_listing();
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_product().map(|p| p.id) {
            self.store.remove_product(id);
            self.sync_listing();
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_product().map(|p| p.id) {
            self.screen = Screen::Detail(id);
        }
    }

    /// Keep page and selection in range after the visible set changed.
    fn sync_listing(&mut self) {
        let page = self.current_page();
        let (total_pages, page_len) = (page.total_pages, page.items.len());
        self.dispatch_listing(ListingIntent::Clamp {
            total_pages,
            page_len,
        });
    }

    // ========================================================================
    // Detail screen
    // ========================================================================

    /// The product the detail screen shows, if it still exists.
    pub fn detail_product(&self) -> Option<&Product> {
        match self.screen {
            Screen::Detail(id) => self.store.state().product(id),
            Screen::List => None,
        }
    }

    pub fn back_to_list(&mut self) {
        self.screen = Screen::List;
        self.sync_listing();
    }

    pub fn toggle_detail_favorite(&mut self) {
        if let Screen::Detail(id) = self.screen {
            self.store.toggle_favorite(id);
        }
    }

    pub fn remove_detail_product(&mut self) {
        if let Screen::Detail(id) = self.screen {
            self.store.remove_product(id);
            self.back_to_list();
        }
    }

    // ========================================================================
    // Create/edit form (MVI pattern)
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_create_form(&mut self) {
        self.dispatch_form(FormIntent::OpenCreate);
    }

    pub fn open_edit_form(&mut self) {
        if let Some(product) = self.detail_product().cloned() {
            self.dispatch_form(FormIntent::OpenEdit { product });
        }
    }

    pub fn close_form(&mut self) {
        self.dispatch_form(FormIntent::Close);
    }

    /// Validate the form and hand the result to the store.
    ///
    /// Returns `true` when the form was accepted and closed.
    pub fn submit_form(&mut self) -> bool {
        let FormState::Visible { mode, values, .. } = &self.form else {
            return false;
        };
        let mode = *mode;
        let draft = match validate(values) {
            Ok(draft) => draft,
            Err(err) => {
                self.dispatch_form(FormIntent::Rejected {
                    message: err.to_string(),
                });
                return false;
            }
        };

        match mode {
            FormMode::Create => {
                let id = self.store.add_product_locally(draft);
                tracing::info!(id, "Created product");
            }
            FormMode::Edit { id } => {
                self.store
                    .edit_product_locally(Product::from_draft(id, draft));
                tracing::info!(id, "Edited product");
            }
        }
        self.close_form();
        self.sync_listing();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Filter;

    fn make_app() -> App {
        App::new(Config::default())
    }

    fn product(id: ProductId, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: format!("{title} is a fine product"),
            price: id as f64,
            images: vec![format!("{id}.png")],
        }
    }

    fn loaded(count: u64) -> App {
        let mut app = make_app();
        let (tx, _rx) = mpsc::channel(1);
        app.set_command_sender(tx);
        app.request_fetch();
        app.on_fetch_completed(Ok((1..=count).map(|id| product(id, &format!("P{id}"))).collect()));
        app
    }

    #[test]
    fn fetch_without_worker_fails_visibly() {
        let mut app = make_app();
        app.request_fetch();
        assert_eq!(app.store().state().status, LoadStatus::Failed);
        assert_eq!(
            app.store().state().last_error.as_deref(),
            Some("Fetch worker is not running")
        );
    }

    #[test]
    fn fetch_sends_one_command_while_loading() {
        let mut app = make_app();
        let (tx, mut rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.request_fetch();
        app.request_fetch();
        assert!(matches!(rx.try_recv(), Ok(UiCommand::Fetch)));
        assert!(rx.try_recv().is_err());
        assert!(app.store().state().is_loading());
    }

    #[test]
    fn removing_last_row_clamps_selection() {
        let mut app = loaded(3);
        app.move_selection(-1);
        assert_eq!(app.listing().selected, 2);
        app.remove_selected();
        assert_eq!(app.listing().selected, 1);
        assert_eq!(app.selected_product().map(|p| p.id), Some(2));
    }

    #[test]
    fn removing_only_row_of_last_page_moves_back_a_page() {
        let mut app = loaded(11);
        app.next_page();
        assert_eq!(app.listing().page, 1);
        app.remove_selected();
        assert_eq!(app.listing().page, 0);
    }

    #[test]
    fn toggling_filter_resets_page() {
        let mut app = loaded(25);
        app.next_page();
        app.toggle_filter();
        assert_eq!(app.store().state().filter, Filter::Favorites);
        assert_eq!(app.listing().page, 0);
    }

    #[test]
    fn row_actions_ignored_after_failed_refetch() {
        let mut app = loaded(2);
        let (tx, _rx) = mpsc::channel(1);
        app.set_command_sender(tx);
        app.request_fetch();
        app.on_fetch_completed(Err(FetchError::Timeout { seconds: 30 }));
        assert_eq!(app.store().state().status, LoadStatus::Failed);

        app.remove_selected();
        app.toggle_selected_favorite();
        app.open_selected();

        let ids: Vec<ProductId> = app.store().state().products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(app.store().state().favorites.is_empty());
        assert_eq!(app.screen(), Screen::List);
    }

    #[test]
    fn row_actions_ignored_while_loading() {
        let mut app = loaded(2);
        let (tx, _rx) = mpsc::channel(1);
        app.set_command_sender(tx);
        app.request_fetch();
        assert!(app.store().state().is_loading());

        app.toggle_selected_favorite();
        app.remove_selected();

        assert!(app.store().state().favorites.is_empty());
        assert_eq!(app.store().state().products.len(), 2);
    }

    #[test]
    fn detail_remove_returns_to_list() {
        let mut app = loaded(2);
        app.open_selected();
        assert_eq!(app.screen(), Screen::Detail(1));
        app.remove_detail_product();
        assert_eq!(app.screen(), Screen::List);
        assert!(app.store().state().product(1).is_none());
    }

    #[test]
    fn invalid_form_stays_open_with_message() {
        let mut app = loaded(1);
        app.open_create_form();
        assert!(!app.submit_form());
        assert!(app.form().is_visible());
        assert_eq!(
            app.form().error(),
            Some("All fields are required: Title is empty")
        );
    }

    #[test]
    fn edit_form_updates_product_in_place() {
        let mut app = loaded(2);
        app.open_selected();
        app.open_edit_form();
        for ch in " v2".chars() {
            app.dispatch_form(FormIntent::Input { ch });
        }
        assert!(app.submit_form());
        assert!(!app.form().is_visible());
        assert_eq!(app.detail_product().map(|p| p.title.as_str()), Some("P1 v2"));
        assert_eq!(app.store().state().products[0].id, 1);
    }
}
