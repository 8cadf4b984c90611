/**
* filename : paginator
* date: 2026. 10. 19.
* description: Fixed-size pages over the reward feed.
**/

use std::num::NonZeroUsize;

/// One page of `items`, with the page number already clamped.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub page: usize,
    pub total_pages: usize,
    pub visible: &'a [T],
}

/// Number of pages needed for `len` items; an empty list still has one page.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slices out `requested_page` (1-based), clamped into `[1, total_pages]`.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, requested_page: i64) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let page = requested_page.clamp(1, total_pages as i64) as usize;

    let start = ((page - 1) * page_size.get()).min(items.len());
    let end = (page * page_size.get()).min(items.len());

    Page {
        page,
        total_pages,
        visible: &items[start..end],
    }
}

/// Current page of the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.page
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn jump(&mut self, page: i64, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1) as i64) as usize;
    }

    /// Pulls the cursor back inside `[1, total_pages]` after the feed shrank.
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}
