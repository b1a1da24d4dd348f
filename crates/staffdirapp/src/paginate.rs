//! # Pagination
//!
//! [`paginate`] slices one page out of a processed sequence and computes the metadata a
//! pager needs. It never clamps `page`: keeping the page inside `[1, total_pages]` after a
//! mutation is the caller's job (see [`clamp_page`], used by the view coordinator).
//!
//! [`page_window`] builds the compact page-number strip: up to five consecutive pages around
//! the current one, with the first and last page pinned at the ends and ellipses over gaps.
//!
//! ```text
//! total 10, page 1  →  1 2 3 4 5 … 10
//! total 10, page 7  →  1 … 5 6 7 8 9 10
//! total 10, page 10 →  1 … 6 7 8 9 10
//! ```

use serde::Serialize;

/// Pages shown in the window, including the current one.
pub const WINDOW_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 0-based offset of the first item on this page
    pub start_index: usize,
    /// 0-based exclusive end of this page, never past `total_items`
    pub end_index: usize,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl<T> PageResult<T> {
    /// 1-based inclusive range for "Showing X-Y". Reads `(0, 0)` when nothing is visible.
    pub fn display_range(&self) -> (usize, usize) {
        if self.items.is_empty() {
            (0, 0)
        } else {
            (self.start_index + 1, self.end_index)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> String {
        let (from, to) = self.display_range();
        format!("Showing {}-{} of {} employees", from, to, self.total_items)
    }

    pub fn window(&self) -> Vec<PageLink> {
        page_window(self.page, self.total_pages)
    }
}

/// `ceil(total_items / page_size)`, zero for an empty sequence.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Pull `page` back into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice page `page` (1-based) of `page_size` items out of `sequence`.
///
/// A zero `page_size` is treated as 1. Pages past the end yield no items.
pub fn paginate<T: Clone>(sequence: &[T], page: usize, page_size: usize) -> PageResult<T> {
    let page_size = page_size.max(1);
    let total_items = sequence.len();
    let total_pages = total_pages(total_items, page_size);
    let start_index = page.saturating_sub(1).saturating_mul(page_size);
    let end_index = start_index.saturating_add(page_size).min(total_items);

    let items = if start_index < end_index {
        sequence[start_index..end_index].to_vec()
    } else {
        Vec::new()
    };

    PageResult {
        items,
        page,
        page_size,
        total_items,
        total_pages,
        start_index,
        end_index,
        has_prev_page: page > 1,
        has_next_page: page < total_pages,
    }
}

/// One entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

impl PageLink {
    fn page(number: usize, current_page: usize) -> Self {
        PageLink::Page {
            number,
            current: number == current_page,
        }
    }
}

/// The page-number strip for `page` out of `total_pages`. Empty when there are no pages.
pub fn page_window(page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let reach = WINDOW_SIZE / 2;
    let mut start = page.saturating_sub(reach).max(1).min(total_pages);
    let mut end = page.saturating_add(reach).min(total_pages);

    // Widen to a full window when pressed against either edge.
    if end - start + 1 < WINDOW_SIZE {
        if start == 1 {
            end = (start + WINDOW_SIZE - 1).min(total_pages);
        } else if end == total_pages {
            start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
        }
    }

    let mut links = Vec::with_capacity(WINDOW_SIZE + 4);
    if start > 1 {
        links.push(PageLink::page(1, page));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(|n| PageLink::page(n, page)));
    if end < total_pages {
        if end + 1 < total_pages {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::page(total_pages, page));
    }
    links
}
