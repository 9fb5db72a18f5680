use crate::mvi::Reducer;
use crate::ui::listing::intent::ListingIntent;
use crate::ui::listing::state::ListingState;

pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListingIntent::BeginSearch => state.searching = true,
            ListingIntent::EndSearch => state.searching = false,
            ListingIntent::SearchInput { ch } => {
                state.query.push(ch);
                state.page = 0;
                state.selected = 0;
            }
            ListingIntent::SearchBackspace => {
                if state.query.pop().is_some() {
                    state.page = 0;
                    state.selected = 0;
                }
            }
            ListingIntent::ClearSearch => {
                state.query.clear();
                state.searching = false;
                state.page = 0;
                state.selected = 0;
            }
            ListingIntent::CycleSort => {
                state.sort = state.sort.next();
                state.selected = 0;
            }
            ListingIntent::NextPage { total_pages } => {
                if state.page + 1 < total_pages {
                    state.page += 1;
                    state.selected = 0;
                }
            }
            ListingIntent::PrevPage => {
                if state.page > 0 {
                    state.page -= 1;
                    state.selected = 0;
                }
            }
            ListingIntent::MoveUp { page_len } => {
                state.selected = if state.selected == 0 {
                    page_len.saturating_sub(1)
                } else {
                    state.selected - 1
                };
            }
            ListingIntent::MoveDown { page_len } => {
                state.selected = if state.selected + 1 >= page_len {
                    0
                } else {
                    state.selected + 1
                };
            }
            ListingIntent::ResetPage => {
                state.page = 0;
                state.selected = 0;
            }
            ListingIntent::Clamp {
                total_pages,
                page_len,
            } => {
                state.page = state.page.min(total_pages.saturating_sub(1));
                state.selected = state.selected.min(page_len.saturating_sub(1));
            }
        }
        state
    }
}
