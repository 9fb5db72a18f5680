use crate::ui::app::{App, Screen};
use crate::ui::form::FormIntent;
use crate::ui::listing::ListingIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.form().is_visible() {
        handle_form_key(app, key);
        return;
    }

    match app.screen() {
        Screen::List if app.listing().searching => handle_search_key(app, key),
        Screen::List => handle_list_key(app, key),
        Screen::Detail(_) => handle_detail_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_form(),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input { ch })
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.dispatch_listing(ListingIntent::EndSearch),
        KeyCode::Backspace => app.dispatch_listing(ListingIntent::SearchBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_listing(ListingIntent::SearchInput { ch })
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => app.next_page(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('/') => app.dispatch_listing(ListingIntent::BeginSearch),
        KeyCode::Esc if app.listing().has_query() => {
            app.dispatch_listing(ListingIntent::ClearSearch)
        }
        KeyCode::Char('f') => app.toggle_selected_favorite(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('v') => app.toggle_filter(),
        KeyCode::Char('s') => app.dispatch_listing(ListingIntent::CycleSort),
        KeyCode::Char('n') => app.open_create_form(),
        KeyCode::Char('r') => app.request_fetch(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back_to_list(),
        KeyCode::Char('e') => app.open_edit_form(),
        KeyCode::Char('f') => app.toggle_detail_favorite(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_detail_product(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
