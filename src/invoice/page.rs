/// Rows per dashboard page
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` rows. Zero rows means zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Rows of 1-indexed `page`, clipped to the list. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page of a paginated list. Navigation clamps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total: usize,
}

impl Pager {
    pub fn new(page: usize, total_pages: usize) -> Self {
        let mut pager = Self {
            current: 1,
            total: total_pages,
        };
        pager.go_to(page);
        pager
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total.max(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.current + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current.saturating_sub(1));
    }
}
