//! Watchlist picker state

use std::collections::HashSet;

/// Watchlist ids checked in the "save to watchlist" picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchlistSelection {
    checked: HashSet<i64>,
}

impl WatchlistSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the watchlists that already hold the stock
    pub fn with_checked(ids: HashSet<i64>) -> Self {
        Self { checked: ids }
    }

    pub fn set_checked(&mut self, id: i64, checked: bool) {
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    /// Flip one id, returning its new state
    pub fn toggle(&mut self, id: i64) -> bool {
        let now_checked = !self.checked.contains(&id);
        self.set_checked(id, now_checked);
        now_checked
    }

    pub fn is_checked(&self, id: i64) -> bool {
        self.checked.contains(&id)
    }

    pub fn ids(&self) -> &HashSet<i64> {
        &self.checked
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }
}
