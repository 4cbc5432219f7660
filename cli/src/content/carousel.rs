//! # Achievements Carousel
//!
//! File: cli/src/content/carousel.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Paging state for the achievements slider. Items are shown `per_slide` at a
//! time; `next` and `prev` wrap around at both ends. A carousel over zero items
//! still has one (empty) slide so the index is always valid.
//!
use std::ops::Range;

pub const DEFAULT_ITEMS_PER_SLIDE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    total_items: usize,
    per_slide: usize,
    current: usize,
}

impl Carousel {
    /// `per_slide` of zero is treated as one.
    pub fn new(total_items: usize, per_slide: usize) -> Self {
        Self {
            total_items,
            per_slide: per_slide.max(1),
            current: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.total_items.div_ceil(self.per_slide).max(1)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.slide_count();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        let count = self.slide_count();
        self.current = (self.current + count - 1) % count;
        self.current
    }

    /// Jumps to `slide`, clamped to the last slide.
    pub fn go_to(&mut self, slide: usize) -> usize {
        self.current = slide.min(self.slide_count() - 1);
        self.current
    }

    /// Indices of the items on the current slide. The last slide may be short.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.current * self.per_slide).min(self.total_items);
        let end = (start + self.per_slide).min(self.total_items);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_count_rounds_up() {
        assert_eq!(Carousel::new(11, 4).slide_count(), 3);
        assert_eq!(Carousel::new(8, 4).slide_count(), 2);
        assert_eq!(Carousel::new(0, 4).slide_count(), 1);
        assert_eq!(Carousel::new(3, 0).slide_count(), 3);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut c = Carousel::new(11, DEFAULT_ITEMS_PER_SLIDE);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut c = Carousel::new(11, DEFAULT_ITEMS_PER_SLIDE);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.prev(), 1);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = Carousel::new(11, 4);
        assert_eq!(c.go_to(1), 1);
        assert_eq!(c.go_to(42), 2);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_visible_range() {
        let mut c = Carousel::new(11, 4);
        assert_eq!(c.visible_range(), 0..4);
        c.go_to(2);
        assert_eq!(c.visible_range(), 8..11);
        assert_eq!(Carousel::new(0, 4).visible_range(), 0..0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = Carousel::new(2, 4);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }
}
