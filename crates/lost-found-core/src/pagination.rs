//! Pagination Controller
//!
//! Slices an already filtered sequence into fixed-size pages and derives the
//! state of the page buttons. Navigating never refetches.

use std::ops::RangeInclusive;

/// One page of a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, clamped into `1..=total_pages`
    pub current: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Button strip for this page with at most `max_buttons` numbered buttons
    pub fn controls(&self, max_buttons: usize) -> PageControls {
        PageControls::new(self.current, self.total_pages, max_buttons)
    }
}

/// `ceil(count / page_size)`
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Cut `items` into the page `requested` (1-based), clamping out-of-range
/// requests to the nearest valid page.
pub fn paginate<T>(items: &[T], page_size: usize, requested: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), page_size);
    let current = requested.clamp(1, total.max(1));
    let start = ((current - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Page {
        items: &items[start..end],
        current,
        total_pages: total,
        total_items: items.len(),
    }
}

/// Derived pagination bar state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub total_pages: usize,
    /// Numbered buttons to render
    pub buttons: RangeInclusive<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    /// The window starts `max_buttons / 2` pages before the current one
    /// (never before page 1) and is cut at the last page.
    pub fn new(current: usize, total_pages: usize, max_buttons: usize) -> Self {
        let start = current.saturating_sub(max_buttons / 2).max(1);
        let end = total_pages.min(start + max_buttons.saturating_sub(1));
        Self {
            current,
            total_pages,
            buttons: start..=end,
            prev_enabled: current > 1,
            next_enabled: current < total_pages,
        }
    }

    /// A single page (or none) renders no controls at all
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn prev_page(&self) -> Option<usize> {
        self.prev_enabled.then(|| self.current - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.next_enabled.then(|| self.current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_partition_sequence() {
        for n in [0usize, 1, 8, 9, 10, 18, 19, 40] {
            let items: Vec<usize> = (0..n).collect();
            let total = total_pages(n, 9);
            assert_eq!(total, (n + 8) / 9);

            let mut seen = Vec::new();
            for page in 1..=total {
                let p = paginate(&items, 9, page);
                assert!(p.items.len() <= 9);
                assert!(!p.items.is_empty());
                seen.extend_from_slice(p.items);
            }
            assert_eq!(seen, items, "n = {}", n);
        }
    }

    #[test]
    fn test_requested_page_is_clamped() {
        let items: Vec<u32> = (0..20).collect();
        let past_end = paginate(&items, 9, 7);
        assert_eq!(past_end.current, 3);
        assert_eq!(past_end.items, &[18, 19]);

        let zero = paginate(&items, 9, 0);
        assert_eq!(zero.current, 1);
        assert_eq!(zero.items.len(), 9);
    }

    #[test]
    fn test_empty_sequence() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 9, 4);
        assert!(page.is_empty());
        assert_eq!(page.current, 1);
        assert_eq!(page.total_pages, 0);
        assert!(!page.controls(5).is_visible());
    }

    #[test]
    fn test_button_window() {
        let c = PageControls::new(1, 10, 5);
        assert_eq!(c.buttons, 1..=5);
        assert!(!c.prev_enabled);
        assert_eq!(c.next_page(), Some(2));

        let c = PageControls::new(6, 10, 5);
        assert_eq!(c.buttons, 4..=8);

        let c = PageControls::new(10, 10, 5);
        assert_eq!(c.buttons, 8..=10);
        assert!(!c.next_enabled);
        assert_eq!(c.prev_page(), Some(9));

        let c = PageControls::new(2, 3, 5);
        assert_eq!(c.buttons, 1..=3);
    }

    #[test]
    fn test_single_page_hides_controls() {
        let items = vec!["a"; 9];
        let page = paginate(&items, 9, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.controls(5).is_visible());
    }
}
