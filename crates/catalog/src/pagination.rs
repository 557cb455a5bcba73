/// Window growth per advance, matching the browsing gallery.
pub const DEFAULT_PAGE_SIZE: usize = 32;

/// Incremental reveal over a filtered sequence.
///
/// The cursor tracks lengths only; callers keep their filtered data and
/// slice it through [`PageCursor::slice`]. A filter change must go through
/// [`reset`](PageCursor::reset) -- `advance` only ever grows the window,
/// so the visible set is monotonically non-decreasing between resets.
#[derive(Debug, Clone)]
pub struct PageCursor {
    page_size: usize,
    page: usize,
    len: usize,
    loading: bool,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
            len: 0,
            loading: false,
        }
    }

    /// Bind the cursor to a (re)filtered sequence, back at page one.
    pub fn reset(&mut self, len: usize) {
        self.page = 1;
        self.len = len;
        self.loading = false;
    }

    /// Reveal one more page. Returns whether the window grew.
    ///
    /// Ignored while a load is marked in flight or when the sequence is
    /// exhausted, so overlapping proximity triggers collapse into a single
    /// advance instead of queueing.
    pub fn advance(&mut self) -> bool {
        if self.loading || !self.has_more() {
            return false;
        }
        self.loading = true;
        self.page += 1;
        self.loading = false;
        true
    }

    /// Number of items currently revealed: `min(len, page_size * page)`.
    pub fn window(&self) -> usize {
        self.len.min(self.page_size * self.page)
    }

    pub fn has_more(&self) -> bool {
        self.window() < self.len
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Visible prefix of the sequence the cursor was reset to.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.window().min(items.len())]
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
