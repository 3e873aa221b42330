//! Content/search store
//!
//! Owns the page list and the search cursor. Search hits and cursor moves
//! seek the transport through the playback store passed in by the caller;
//! the dependency only ever points that way.

use log::debug;

use lectern_model::Page;

use super::state::SearchState;
use crate::domains::playback::store::PlaybackStore;

#[derive(Debug, Default)]
pub struct ContentStore {
    pages: Vec<Page>,
    search: SearchState,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the page list wholesale and drop any search state.
    pub fn load(&mut self, pages: Vec<Page>) {
        debug!("content loaded: {} pages", pages.len());
        self.pages = pages;
        self.search = SearchState::default();
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// Run a case-insensitive substring search over the decoded page text.
    ///
    /// Blank queries are ignored. The cursor moves to the first match (if
    /// any) and the transport seeks to that page's timestamp immediately.
    pub fn search(&mut self, query: &str, playback: &mut PlaybackStore) {
        if query.trim().is_empty() {
            return;
        }
        let needle = query.to_lowercase();
        let match_indices: Vec<usize> = self
            .pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.text.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
        debug!("search {query:?}: {} matches", match_indices.len());

        self.search.query = query.to_string();
        self.search.cursor = if match_indices.is_empty() {
            None
        } else {
            Some(0)
        };
        self.search.match_indices = match_indices;
        self.seek_to_selected(playback);
    }

    /// Advance the cursor to the next match, wrapping past the end.
    pub fn find_next(&mut self, playback: &mut PlaybackStore) {
        let count = self.search.match_indices.len();
        if self.search.query.is_empty() || count == 0 {
            return;
        }
        self.search.cursor = Some(self.search.cursor.map_or(0, |cursor| (cursor + 1) % count));
        self.seek_to_selected(playback);
    }

    /// Retreat the cursor to the previous match, wrapping past the start.
    pub fn find_prev(&mut self, playback: &mut PlaybackStore) {
        let count = self.search.match_indices.len();
        if self.search.query.is_empty() || count == 0 {
            return;
        }
        self.search.cursor = Some(
            self.search
                .cursor
                .map_or(0, |cursor| (cursor + count - 1) % count),
        );
        self.seek_to_selected(playback);
    }

    /// Clear the query and match state. Already-empty state is left
    /// untouched so observers see no churn.
    pub fn cancel_search(&mut self) {
        if self.search.query.is_empty() && self.search.match_indices.is_empty() {
            return;
        }
        self.search = SearchState::default();
    }

    fn seek_to_selected(&self, playback: &mut PlaybackStore) {
        let Some(page_index) = self.search.selected_page_index() else {
            return;
        };
        let Some(page) = self.pages.get(page_index) else {
            return;
        };
        playback.seek_to(page.timestamp_ms as f64);
    }
}
