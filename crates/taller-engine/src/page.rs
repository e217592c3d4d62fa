/// One page of a list, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub total_pages: usize,
    pub size: usize,
    pub start: usize,
    pub end: usize,
}

impl Page {
    /// Page `number` of `total_items`, clamped into range. An empty list has a
    /// single empty page.
    pub fn compute(total_items: usize, size: usize, number: usize) -> Self {
        let size = size.max(1);
        let total_pages = total_items.div_ceil(size).max(1);
        let number = number.clamp(1, total_pages);
        let start = (number - 1) * size;
        let end = (start + size).min(total_items);

        Self {
            number,
            total_pages,
            size,
            start,
            end,
        }
    }

    /// Page holding the item at `index`
    pub fn containing(total_items: usize, size: usize, index: usize) -> Self {
        Self::compute(total_items, size, index / size.max(1) + 1)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start.min(items.len())..self.end.min(items.len())]
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_items_in_pages_of_eight() {
        let first = Page::compute(10, 8, 1);
        assert_eq!((first.start, first.end, first.total_pages), (0, 8, 2));
        assert!(first.has_next());

        let second = Page::compute(10, 8, 2);
        assert_eq!((second.start, second.end), (8, 10));
        assert!(!second.has_next());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Page::compute(10, 8, 9).number, 2);
        assert_eq!(Page::compute(10, 8, 0).number, 1);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let page = Page::compute(0, 8, 3);
        assert_eq!((page.number, page.total_pages, page.start, page.end), (1, 1, 0, 0));
        assert!(page.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_containing() {
        assert_eq!(Page::containing(20, 8, 8).number, 2);
        assert_eq!(Page::containing(20, 8, 7).number, 1);
    }
}
