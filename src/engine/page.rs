//! Pagination stage: fixed-size page slicing with clamped page numbers.

use serde::{Deserialize, Serialize};

/// 1-based page cursor over a fixed page size.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> PageState {
        PageState { page: 1, page_size }
    }

    fn size(&self) -> usize {
        // A zero size is rejected at the CLI; stay total regardless.
        self.page_size.max(1)
    }

    /// `max(1, ceil(count / page_size))` — an empty result still has page 1.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.size()).max(1)
    }

    /// Current page clamped into `[1, total_pages]`.
    pub fn clamped(&self, count: usize) -> usize {
        self.page.clamp(1, self.total_pages(count))
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn next(&mut self, count: usize) {
        self.page = (self.clamped(count) + 1).min(self.total_pages(count));
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// 1-based first/last entry numbers on the current page, for the
    /// `Showing X to Y of Z entries` footer. `(0, 0)` when empty.
    pub fn shown_range(&self, count: usize) -> (usize, usize) {
        if count == 0 {
            return (0, 0);
        }
        let page = self.clamped(count);
        let first = (page - 1) * self.size() + 1;
        let last = (page * self.size()).min(count);
        (first, last)
    }
}

/// Slice one page out of `records`.
///
/// Out-of-range page numbers clamp rather than failing; an empty input
/// yields an empty page (page 1 of 1).
pub fn paginate<'a, T>(records: &'a [T], state: PageState) -> &'a [T] {
    let page = state.clamped(records.len());
    let size = state.page_size.max(1);
    let start = (page - 1) * size;
    let end = (start + size).min(records.len());
    if start >= records.len() {
        return &[];
    }
    &records[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up_and_floors_at_one() {
        let state = PageState::new(8);
        assert_eq!(state.total_pages(0), 1);
        assert_eq!(state.total_pages(1), 1);
        assert_eq!(state.total_pages(8), 1);
        assert_eq!(state.total_pages(9), 2);
        assert_eq!(state.total_pages(16), 2);
        assert_eq!(state.total_pages(17), 3);
    }

    #[test]
    fn test_page_clamps_into_range() {
        let state = PageState { page: 99, page_size: 8 };
        assert_eq!(state.clamped(10), 2);
        let state = PageState { page: 0, page_size: 8 };
        assert_eq!(state.clamped(10), 1);
    }

    #[test]
    fn test_paginate_slices_in_order() {
        let data: Vec<u32> = (0..10).collect();
        let page1 = paginate(&data, PageState { page: 1, page_size: 4 });
        assert_eq!(page1, &[0, 1, 2, 3]);
        let page3 = paginate(&data, PageState { page: 3, page_size: 4 });
        assert_eq!(page3, &[8, 9]);
    }

    #[test]
    fn test_pages_reconstruct_input_exactly() {
        let data: Vec<u32> = (0..23).collect();
        let state = PageState::new(5);
        let total = state.total_pages(data.len());
        let mut joined = Vec::new();
        for page in 1..=total {
            let slice = paginate(&data, PageState { page, page_size: 5 });
            if page < total {
                assert_eq!(slice.len(), 5);
            }
            joined.extend_from_slice(slice);
        }
        assert_eq!(joined, data);
    }

    #[test]
    fn test_empty_input_yields_empty_page_one() {
        let data: Vec<u32> = Vec::new();
        let state = PageState::new(8);
        assert_eq!(state.total_pages(0), 1);
        assert!(paginate(&data, state).is_empty());
        assert_eq!(state.shown_range(0), (0, 0));
    }

    #[test]
    fn test_shown_range() {
        let state = PageState { page: 2, page_size: 8 };
        assert_eq!(state.shown_range(20), (9, 16));
        let state = PageState { page: 3, page_size: 8 };
        assert_eq!(state.shown_range(20), (17, 20));
    }

    #[test]
    fn test_next_prev_stay_in_bounds() {
        let mut state = PageState::new(8);
        state.prev();
        assert_eq!(state.page, 1);
        state.next(20);
        assert_eq!(state.page, 2);
        state.next(20);
        assert_eq!(state.page, 3);
        state.next(20);
        assert_eq!(state.page, 3);
        state.prev();
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_zero_page_size_stays_total() {
        let data: Vec<u32> = (0..3).collect();
        let state = PageState { page: 1, page_size: 0 };
        assert_eq!(state.total_pages(3), 3);
        assert_eq!(paginate(&data, state), &[0]);
    }
}
