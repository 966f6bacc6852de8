//! Board View State
//!
//! The filter/tab/page selection of the items board as one immutable value.
//! Each user action derives a new state; any change to what is shown resets
//! the page to 1, page navigation keeps the filter.

use chrono::{DateTime, TimeZone};

use crate::domain::{Item, TaggedItem};
use crate::filter::{aggregate, DateRange, ItemFilter, KindFilter};

/// Which filter bar control changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    /// Search button or Enter
    Search,
    Kind(KindFilter),
    /// Raw select value, `"all"` for any
    Category(String),
    DateRange(DateRange),
}

/// A filter bar interaction together with the live search box text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChange {
    pub search: String,
    pub edit: FilterEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: ItemFilter,
    /// 1-based requested page; the paginator clamps it
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { filter: ItemFilter::default(), page: 1 }
    }
}

impl ViewState {
    fn refiltered(&self, filter: ItemFilter) -> Self {
        Self { filter, page: 1 }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        self.refiltered(ItemFilter { search: search.into(), ..self.filter.clone() })
    }

    pub fn with_kind(&self, kind: KindFilter) -> Self {
        self.refiltered(ItemFilter { kind, ..self.filter.clone() })
    }

    pub fn with_tab(&self, tab: KindFilter) -> Self {
        self.refiltered(ItemFilter { tab, ..self.filter.clone() })
    }

    /// `"all"` clears the category filter
    pub fn with_category(&self, category: &str) -> Self {
        let category = (category != "all" && !category.is_empty()).then(|| category.to_string());
        self.refiltered(ItemFilter { category, ..self.filter.clone() })
    }

    pub fn with_date_range(&self, date_range: DateRange) -> Self {
        self.refiltered(ItemFilter { date_range, ..self.filter.clone() })
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self { filter: self.filter.clone(), page }
    }

    /// Apply one filter bar interaction. The search box text is read as
    /// typed, whether or not it was submitted.
    pub fn with_change(&self, change: FilterChange) -> Self {
        let state = self.with_search(change.search);
        match change.edit {
            FilterEdit::Search => state,
            FilterEdit::Kind(kind) => state.with_kind(kind),
            FilterEdit::Category(category) => state.with_category(&category),
            FilterEdit::DateRange(range) => state.with_date_range(range),
        }
    }

    /// Filtered, sorted sequence for this state
    pub fn apply<Tz: TimeZone>(&self, lost: &[Item], found: &[Item], now: &DateTime<Tz>) -> Vec<TaggedItem> {
        aggregate(lost, found, &self.filter, now)
    }
}
