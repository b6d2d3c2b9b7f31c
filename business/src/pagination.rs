//! Client-side pagination over an already fetched collection.

use std::ops::Range;

/// Position inside a paginated collection.
///
/// `page` is 1-indexed and always within `1..=total_pages()` when there is at
/// least one page. A `per_page` of zero means "everything on one page".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
    total: usize,
}

/// One entry of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}

impl Pagination {
    pub fn new(total: usize, per_page: usize, page: usize) -> Self {
        let mut pagination = Self {
            page: 1,
            per_page,
            total,
        };
        pagination.page = pagination.clamp_page(page);
        pagination
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / per_page)`.
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            0
        } else if self.per_page == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }

    /// Nearest valid page. Page 1 when there are no pages at all.
    pub fn clamp_page(&self, page: usize) -> usize {
        match self.total_pages() {
            0 => 1,
            total_pages => page.clamp(1, total_pages),
        }
    }

    /// Indices of the current page: `[(page - 1) * per_page, page * per_page)`,
    /// cut at `total`.
    pub fn range(&self) -> Range<usize> {
        if self.total_pages() == 0 {
            return 0..0;
        }
        let per_page = if self.per_page == 0 {
            self.total
        } else {
            self.per_page
        };
        let start = (self.page - 1) * per_page;
        start..(start + per_page).min(self.total)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        items.get(range.start.min(end)..end).unwrap_or_default()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Entries of a pagination control: first and last page, the current page
    /// with one neighbour on each side, and ellipses for the gaps.
    pub fn page_items(&self) -> Vec<PageItem> {
        const BOUNDARY: usize = 1;
        const SIBLINGS: usize = 1;
        // boundaries + siblings + current + two ellipses
        const MAX_ITEMS: usize = 2 * BOUNDARY + 2 * SIBLINGS + 3;

        let total_pages = self.total_pages();
        if total_pages <= MAX_ITEMS {
            return (1..=total_pages).map(PageItem::Page).collect();
        }

        let siblings_start = self
            .page
            .saturating_sub(SIBLINGS)
            .min(total_pages - BOUNDARY - 2 * SIBLINGS - 1)
            .max(BOUNDARY + 2);
        let siblings_end = (self.page + SIBLINGS)
            .max(BOUNDARY + 2 * SIBLINGS + 2)
            .min(total_pages - BOUNDARY - 1);

        let mut items = vec![PageItem::Page(1)];
        if siblings_start > BOUNDARY + 2 {
            items.push(PageItem::Ellipsis);
        } else {
            items.push(PageItem::Page(BOUNDARY + 1));
        }
        items.extend((siblings_start..=siblings_end).map(PageItem::Page));
        if siblings_end < total_pages - BOUNDARY - 1 {
            items.push(PageItem::Ellipsis);
        } else {
            items.push(PageItem::Page(total_pages - BOUNDARY));
        }
        items.push(PageItem::Page(total_pages));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(7, 3, 1).total_pages(), 3);
        assert_eq!(Pagination::new(6, 3, 1).total_pages(), 2);
        assert_eq!(Pagination::new(1, 3, 1).total_pages(), 1);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let pagination = Pagination::new(0, 3, 1);

        assert_eq!(pagination.total_pages(), 0);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.range(), 0..0);
        assert!(pagination.page_items().is_empty());
        assert!(!pagination.has_next());
    }

    #[test]
    fn zero_page_size_means_single_page() {
        let pagination = Pagination::new(5, 0, 4);

        assert_eq!(pagination.total_pages(), 1);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.range(), 0..5);
    }

    #[test]
    fn page_range_matches_formula() {
        let items: Vec<u32> = (1..=7).collect();

        assert_eq!(Pagination::new(7, 3, 1).slice(&items), &[1, 2, 3]);
        assert_eq!(Pagination::new(7, 3, 2).slice(&items), &[4, 5, 6]);
        assert_eq!(Pagination::new(7, 3, 3).slice(&items), &[7]);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        assert_eq!(Pagination::new(7, 3, 0).page(), 1);
        assert_eq!(Pagination::new(7, 3, 9).page(), 3);
    }

    #[test]
    fn slice_tolerates_short_input() {
        let items = [1, 2];
        assert_eq!(Pagination::new(7, 3, 3).slice(&items), &[] as &[i32]);
    }

    #[test]
    fn neighbours_of_first_and_last_page() {
        let first = Pagination::new(9, 3, 1);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Pagination::new(9, 3, 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn few_pages_are_all_listed() {
        assert_eq!(
            Pagination::new(7, 3, 2).page_items(),
            vec![Page(1), Page(2), Page(3)]
        );
    }

    #[test]
    fn many_pages_collapse_into_ellipses() {
        // 10 pages
        let at = |page| Pagination::new(100, 10, page).page_items();

        assert_eq!(
            at(1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            at(5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            at(10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
