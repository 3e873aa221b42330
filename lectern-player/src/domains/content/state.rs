/// Active text-search state over the loaded page list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current query; empty means no search is active.
    pub query: String,
    /// 0-based indices of matching pages, ascending by construction (a
    /// single forward scan of the page list builds it).
    pub match_indices: Vec<usize>,
    /// Cursor into `match_indices`; `None` when there is no selection
    /// (no active query, or a query with zero matches).
    pub cursor: Option<usize>,
}

impl SearchState {
    pub fn match_count(&self) -> usize {
        self.match_indices.len()
    }

    /// 0-based page index of the currently selected match, if any.
    pub fn selected_page_index(&self) -> Option<usize> {
        self.cursor
            .and_then(|cursor| self.match_indices.get(cursor).copied())
    }
}
