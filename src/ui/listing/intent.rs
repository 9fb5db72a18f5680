use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ListingIntent {
    BeginSearch,
    EndSearch,
    SearchInput { ch: char },
    SearchBackspace,
    ClearSearch,
    CycleSort,
    /// Ignored when already on the last page.
    NextPage { total_pages: usize },
    /// Ignored when already on the first page.
    PrevPage,
    MoveUp { page_len: usize },
    MoveDown { page_len: usize },
    /// Back to the first page, e.g. after the filter changed.
    ResetPage,
    /// Pull page and selection back in range after the result set shrank.
    Clamp { total_pages: usize, page_len: usize },
}

impl Intent for ListingIntent {}
