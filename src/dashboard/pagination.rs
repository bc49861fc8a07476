//! Offset/limit pagination with a sliding window of page links

use crate::consts::dashboard_consts::pagination::WINDOW_RADIUS;

/// Current page and the fixed page size. `current_page` is never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    page_size: u32,
}

/// A prev/next link; disabled links are drawn but do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page: u32,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageItem {
    pub page: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub prev: PageLink,
    pub pages: Vec<PageItem>,
    pub next: PageLink,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Record offset of the current page.
    pub fn offset(&self) -> u64 {
        (self.current_page as u64 - 1) * self.page_size as u64
    }

    /// 1-based position of the `index`-th row of the current page across all pages.
    pub fn row_number(&self, index: usize) -> u64 {
        self.offset() + index as u64 + 1
    }

    /// Moves to `page`. Non-positive pages are ignored.
    pub fn go_to(&mut self, page: i64) -> bool {
        if page < 1 {
            return false;
        }
        self.current_page = page.min(u32::MAX as i64) as u32;
        true
    }

    pub fn total_pages(&self, total: u64) -> u32 {
        total
            .div_ceil(self.page_size as u64)
            .min(u32::MAX as u64) as u32
    }

    /// Pagination bar for `total` records, or `None` when everything fits on one page.
    pub fn view(&self, total: u64) -> Option<PaginationView> {
        let total_pages = self.total_pages(total);
        if total_pages <= 1 {
            return None;
        }
        let current = self.current_page;
        let first = current.saturating_sub(WINDOW_RADIUS).max(1);
        let last = current.saturating_add(WINDOW_RADIUS).min(total_pages);
        let pages = (first..=last)
            .map(|page| PageItem {
                page,
                active: page == current,
            })
            .collect();

        Some(PaginationView {
            prev: PageLink {
                page: current - 1,
                enabled: current > 1,
            },
            pages,
            next: PageLink {
                page: current.saturating_add(1),
                enabled: current < total_pages,
            },
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // 45 records, 20 per page, on page 2.
    fn test_middle_page_window() {
        let mut pagination = Pagination::new(20);
        assert!(pagination.go_to(2));
        assert_eq!(pagination.offset(), 20);

        let view = pagination.view(45).unwrap();
        let pages: Vec<u32> = view.pages.iter().map(|p| p.page).collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert!(view.pages[1].active);
        assert!(!view.pages[0].active && !view.pages[2].active);
        assert_eq!(view.prev, PageLink { page: 1, enabled: true });
        assert_eq!(view.next, PageLink { page: 3, enabled: true });
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_edges_disable_links() {
        let mut pagination = Pagination::new(20);
        let view = pagination.view(45).unwrap();
        assert!(!view.prev.enabled);
        assert!(view.next.enabled);

        pagination.go_to(3);
        let view = pagination.view(45).unwrap();
        assert!(view.prev.enabled);
        assert!(!view.next.enabled);
    }

    #[test]
    fn test_window_slides_and_caps_at_five() {
        let mut pagination = Pagination::new(10);
        pagination.go_to(7);
        let pages: Vec<u32> = pagination
            .view(1000)
            .unwrap()
            .pages
            .iter()
            .map(|p| p.page)
            .collect();
        assert_eq!(pages, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_single_page_has_no_view() {
        let pagination = Pagination::new(20);
        assert_eq!(pagination.view(0), None);
        assert_eq!(pagination.view(20), None);
        assert!(pagination.view(21).is_some());
    }

    #[test]
    fn test_non_positive_pages_are_ignored() {
        let mut pagination = Pagination::new(20);
        pagination.go_to(4);
        assert!(!pagination.go_to(0));
        assert!(!pagination.go_to(-3));
        assert_eq!(pagination.current_page(), 4);
        assert_eq!(pagination.row_number(0), 61);
    }
}
