//! Zero-based card pager that wraps around in both directions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPager {
    current_page: usize,
    card_count: usize,
    cards_per_page: usize,
}

impl CardPager {
    /// A `cards_per_page` of 0 is treated as 1.
    pub fn new(card_count: usize, cards_per_page: usize) -> Self {
        Self {
            current_page: 0,
            card_count,
            cards_per_page: cards_per_page.max(1),
        }
    }

    #[inline]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.card_count.div_ceil(self.cards_per_page)
    }

    /// Move by `delta` pages, wrapping past either end.
    pub fn increment(&mut self, delta: isize) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        let total = total as isize;
        self.current_page = (self.current_page as isize + delta).rem_euclid(total) as usize;
    }

    pub fn forward(&mut self) {
        self.increment(1);
    }

    pub fn back(&mut self) {
        self.increment(-1);
    }

    /// Navigation is only shown when the cards do not fit on one page.
    pub fn shows_navigation(&self) -> bool {
        self.card_count > self.cards_per_page
    }

    pub fn visible<'a, T>(&self, cards: &'a [T]) -> &'a [T] {
        let start = (self.current_page * self.cards_per_page).min(cards.len());
        let end = (start + self.cards_per_page).min(cards.len());
        &cards[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut pager = CardPager::new(3, 1);
        pager.back();
        assert_eq!(pager.current_page(), 2);
        pager.forward();
        assert_eq!(pager.current_page(), 0);
        pager.increment(7);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn shows_cards_of_current_page() {
        let cards = ["a", "b", "c", "d", "e"];
        let mut pager = CardPager::new(cards.len(), 2);
        assert_eq!(pager.total_pages(), 3);
        assert!(pager.shows_navigation());
        pager.back();
        assert_eq!(pager.visible(&cards), &["e"]);
    }

    #[test]
    fn single_page_hides_navigation() {
        let mut pager = CardPager::new(3, 3);
        assert!(!pager.shows_navigation());
        pager.forward();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn empty_pager_stays_put() {
        let mut pager = CardPager::new(0, 3);
        pager.forward();
        assert_eq!(pager.current_page(), 0);
        assert!(pager.visible::<u8>(&[]).is_empty());
    }
}
