/// One-based page over an in-memory, already filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Clamps the current page after the list shrinks (e.g. a new search filter).
    pub fn clamped(self, total: usize) -> Self {
        let last = self.page_count(total).max(1);
        Self {
            page: self.page.clamp(1, last),
            ..self
        }
    }

    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page.saturating_sub(1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.page_count(total)
    }

    pub fn next(self, total: usize) -> Self {
        if self.has_next(total) {
            Self { page: self.page + 1, ..self }
        } else {
            self
        }
    }

    pub fn prev(self) -> Self {
        if self.has_prev() {
            Self { page: self.page - 1, ..self }
        } else {
            self
        }
    }

    /// "Showing 11-20 of 45"
    pub fn summary(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("Showing 0 of {}", total);
        }
        format!("Showing {}-{} of {}", range.start + 1, range.end, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling() {
        let p = Pagination::new(10);
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(10), 1);
        assert_eq!(p.page_count(45), 5);
        assert_eq!(Pagination::new(0).page_size, 1);
    }

    #[test]
    fn slices_follow_page_boundaries() {
        let items: Vec<u32> = (0..45).collect();
        let p = Pagination { page: 2, page_size: 10 };
        assert_eq!(p.slice(&items), &items[10..20]);
        let last = Pagination { page: 5, page_size: 10 };
        assert_eq!(last.slice(&items), &items[40..45]);
        assert_eq!(last.summary(45), "Showing 41-45 of 45");
    }

    #[test]
    fn out_of_range_pages_are_empty_until_clamped() {
        let items: Vec<u32> = (0..7).collect();
        let p = Pagination { page: 4, page_size: 5 };
        assert!(p.slice(&items).is_empty());
        let p = p.clamped(items.len());
        assert_eq!(p.page, 2);
        assert_eq!(p.slice(&items), &items[5..7]);
        assert_eq!(Pagination { page: 3, page_size: 5 }.clamped(0).page, 1);
    }

    #[test]
    fn navigation_stops_at_edges() {
        let p = Pagination::new(10);
        assert_eq!(p.prev().page, 1);
        assert_eq!(p.next(25).next(25).next(25).page, 3);
        assert!(!p.has_next(10));
    }
}
