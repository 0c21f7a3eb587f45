//! One-based page navigation over a list of known length.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    item_count: usize,
    page_size: usize,
}

impl Paginator {
    /// Start on page 1. A `page_size` of 0 is treated as 1.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            item_count,
            page_size: page_size.max(1),
        }
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(item_count / page_size)`, never less than 1.
    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.page_size).max(1)
    }

    /// Move to `page`. Out-of-range pages leave the state unchanged.
    ///
    /// Returns whether the page was accepted.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.page_count() {
            return false;
        }
        self.page = page;
        true
    }

    /// Move to a page typed by the user.
    ///
    /// The text is read as a number (surrounding whitespace ignored, empty
    /// text rejected); anything non-finite, fractional or out of range is
    /// rejected without changing the page.
    pub fn set_page_from_input(&mut self, input: &str) -> bool {
        let Ok(value) = input.trim().parse::<f64>() else {
            return false;
        };
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 {
            return false;
        }
        if value > self.page_count() as f64 {
            return false;
        }
        self.set_page(value as usize)
    }

    /// Whether the "previous" control is enabled.
    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    /// Whether the "next" control is enabled.
    pub fn can_go_forward(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn next(&mut self) -> bool {
        self.can_go_forward() && self.set_page(self.page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.can_go_back() && self.set_page(self.page - 1)
    }

    /// Index range of the items on the current page.
    pub fn item_range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }

    /// The slice of `items` on the current page.
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Update the item count (e.g. after filtering), moving back to the last
    /// page if the current one no longer exists.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let page_count = self.page_count();
        if self.page > page_count {
            tracing::debug!(
                from = self.page,
                to = page_count,
                "clamping page after item count change"
            );
            self.page = page_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let paginator = Paginator::new(10, 4);
        assert_eq!(paginator.page_count(), 3);
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let mut paginator = Paginator::new(10, 4);
        assert!(!paginator.set_page(0));
        assert!(!paginator.set_page(4));
        assert_eq!(paginator.page(), 1);
        assert!(paginator.set_page(2));
        assert_eq!(paginator.page(), 2);
    }

    #[test]
    fn empty_list_has_one_page() {
        let paginator = Paginator::new(0, 4);
        assert_eq!(paginator.page_count(), 1);
        assert!(!paginator.can_go_back());
        assert!(!paginator.can_go_forward());
        assert_eq!(paginator.item_range(), 0..0);
    }

    #[test]
    fn text_input_is_validated() {
        let mut paginator = Paginator::new(10, 4);
        assert!(!paginator.set_page_from_input("abc"));
        assert!(!paginator.set_page_from_input(""));
        assert!(!paginator.set_page_from_input("1.5"));
        assert!(!paginator.set_page_from_input("inf"));
        assert!(!paginator.set_page_from_input("NaN"));
        assert!(!paginator.set_page_from_input("-1"));
        assert!(!paginator.set_page_from_input("4"));
        assert_eq!(paginator.page(), 1);

        assert!(paginator.set_page_from_input(" 3 "));
        assert_eq!(paginator.page(), 3);
        assert!(paginator.set_page_from_input("2.0"));
        assert_eq!(paginator.page(), 2);
    }

    #[test]
    fn navigation_stops_at_bounds() {
        let mut paginator = Paginator::new(10, 4);
        assert!(!paginator.prev());
        assert!(paginator.next());
        assert!(paginator.next());
        assert!(!paginator.next());
        assert_eq!(paginator.page(), 3);
        assert_eq!(paginator.item_range(), 8..10);
    }

    #[test]
    fn page_items_slices_current_page() {
        let items: Vec<u32> = (0..10).collect();
        let mut paginator = Paginator::new(items.len(), 4);
        paginator.set_page(2);
        assert_eq!(paginator.page_items(&items), &[4, 5, 6, 7]);
    }

    #[test]
    fn shrinking_item_count_clamps_page() {
        let mut paginator = Paginator::new(10, 4);
        paginator.set_page(3);
        paginator.set_item_count(5);
        assert_eq!(paginator.page(), 2);
    }

    #[test]
    fn zero_page_size_is_one() {
        let paginator = Paginator::new(3, 0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.page_count(), 3);
    }
}
