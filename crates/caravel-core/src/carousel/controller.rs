use tracing::debug;

use crate::config::CarouselConfig;

use super::indicators::IndicatorSet;
use super::viewport::ViewportClass;

/// Navigation direction along the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The carousel controller.
///
/// Tracks the index of the first visible item within a fixed set of items,
/// derives the items-per-page from the viewport width, and keeps the
/// indicator set in step. Every entry point is synchronous; invalid input is
/// clamped, never rejected. After any operation
/// `current_index <= max_index = item_count.saturating_sub(page_size)` holds.
#[derive(Debug, Clone)]
pub struct Carousel {
    item_count: usize,
    config: CarouselConfig,
    viewport_class: ViewportClass,
    page_size: usize,
    current_index: usize,
    indicators: IndicatorSet,
}

impl Carousel {
    /// Create a controller for `item_count` items at the given viewport
    /// width. Zero items is valid and degenerates to a single no-op page.
    pub fn new(item_count: usize, viewport_width: u16, config: CarouselConfig) -> Self {
        let viewport_class = ViewportClass::classify(viewport_width, &config);
        let page_size = config.page_size_for(viewport_class);
        let max_index = item_count.saturating_sub(page_size);

        Self {
            item_count,
            config,
            viewport_class,
            page_size,
            current_index: 0,
            indicators: IndicatorSet::rebuild(max_index, 0),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport_class
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Largest reachable index: `max(0, item_count - page_size)`.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.page_size)
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    /// Step one index forward or backward, saturating at the bounds.
    pub fn advance(&mut self, direction: Direction) {
        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1).min(self.max_index()),
            Direction::Backward => self.current_index.saturating_sub(1),
        };
        self.indicators.set_active(self.current_index);
    }

    /// Jump to an indicator's index. Out-of-range input (including negative)
    /// is clamped into `[0, max_index]`, never rejected.
    pub fn jump_to(&mut self, index: isize) {
        self.current_index = index.clamp(0, self.max_index() as isize) as usize;
        self.indicators.set_active(self.current_index);
    }

    /// Reclassify the viewport. When the page size changes, the max index is
    /// recomputed, the current index re-clamped, and the indicator set
    /// rebuilt. Repeated calls with the same width are no-ops.
    pub fn on_resize(&mut self, viewport_width: u16) {
        let class = ViewportClass::classify(viewport_width, &self.config);
        let page_size = self.config.page_size_for(class);
        self.viewport_class = class;

        if page_size != self.page_size {
            debug!(
                width = viewport_width,
                ?class,
                page_size,
                "carousel page size changed"
            );
            self.page_size = page_size;
            self.current_index = self.current_index.min(self.max_index());
            self.indicators = IndicatorSet::rebuild(self.max_index(), self.current_index);
        }
    }

    /// Interpret a completed horizontal drag. A drag left (start right of
    /// end) past the threshold advances forward, a drag right advances
    /// backward, anything within the threshold is ignored. Only the start
    /// and end positions matter; motion in between is never consulted.
    pub fn on_gesture_end(&mut self, start_x: u16, end_x: u16) {
        let diff = i32::from(start_x) - i32::from(end_x);
        let threshold = i32::from(self.config.swipe_threshold);

        if diff > threshold {
            self.advance(Direction::Forward);
        } else if diff < -threshold {
            self.advance(Direction::Backward);
        }
    }

    /// Horizontal track translation for the current index.
    ///
    /// `item_width` must be read fresh from a rendered item at call time so
    /// layout reflow is picked up; the caller guarantees at least one item
    /// is rendered.
    pub fn offset(&self, item_width: u16) -> u32 {
        self.current_index as u32 * (u32::from(item_width) + u32::from(self.config.gap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(item_count: usize, viewport_width: u16) -> Carousel {
        Carousel::new(item_count, viewport_width, CarouselConfig::default())
    }

    // Default breakpoints: <=768 Narrow (1/page), <=1024 Medium (2/page),
    // else Wide (3/page).
    const NARROW: u16 = 600;
    const MEDIUM: u16 = 900;
    const WIDE: u16 = 1200;

    #[test]
    fn new_starts_at_zero_with_class_derived_page_size() {
        let c = carousel(7, WIDE);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.viewport_class(), ViewportClass::Wide);
        assert_eq!(c.page_size(), 3);
        assert_eq!(c.max_index(), 4);
        assert_eq!(c.indicators().count(), 5);
    }

    #[test]
    fn advance_saturates_at_both_bounds() {
        let mut c = carousel(7, WIDE);

        c.advance(Direction::Backward);
        assert_eq!(c.current_index(), 0);

        for _ in 0..10 {
            c.advance(Direction::Forward);
        }
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.indicators().active(), 4);
    }

    #[test]
    fn jump_to_clamps_any_integer() {
        let mut c = carousel(7, WIDE);

        c.jump_to(3);
        assert_eq!(c.current_index(), 3);

        c.jump_to(-5);
        assert_eq!(c.current_index(), 0);

        c.jump_to(99);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.indicators().active(), 4);
    }

    #[test]
    fn gesture_within_threshold_is_a_no_op() {
        let mut c = carousel(7, WIDE);
        c.jump_to(2);

        // |diff| = 20 <= 50
        c.on_gesture_end(100, 120);
        assert_eq!(c.current_index(), 2);

        // Exactly at the threshold is still a no-op
        c.on_gesture_end(150, 100);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn gesture_past_threshold_advances_one_step() {
        let mut c = carousel(7, WIDE);

        // diff = 100 > 50: drag left, same as one Forward advance
        c.on_gesture_end(200, 100);
        assert_eq!(c.current_index(), 1);

        // diff = -100: drag right, same as one Backward advance
        c.on_gesture_end(100, 200);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn indicator_count_is_max_index_plus_one() {
        assert_eq!(carousel(7, WIDE).indicators().count(), 5);
        // Fewer items than the page size: one dot
        assert_eq!(carousel(2, WIDE).indicators().count(), 1);
    }

    #[test]
    fn resize_reclamps_only_when_needed() {
        let mut c = carousel(9, WIDE);
        c.jump_to(6);
        assert_eq!(c.max_index(), 6);

        // Narrow: page size 1, max index 8, 6 still in range
        c.on_resize(NARROW);
        assert_eq!(c.page_size(), 1);
        assert_eq!(c.max_index(), 8);
        assert_eq!(c.current_index(), 6);
        assert_eq!(c.indicators().count(), 9);

        // Walk to the new end, then widen again: 8 > 6 gets reclamped
        c.jump_to(8);
        c.on_resize(WIDE);
        assert_eq!(c.page_size(), 3);
        assert_eq!(c.max_index(), 6);
        assert_eq!(c.current_index(), 6);
        assert_eq!(c.indicators().count(), 7);
        assert_eq!(c.indicators().active(), 6);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut c = carousel(9, WIDE);
        c.jump_to(4);

        c.on_resize(MEDIUM);
        let once = (c.current_index(), c.page_size(), c.indicators().clone());
        c.on_resize(MEDIUM);
        let twice = (c.current_index(), c.page_size(), c.indicators().clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn zero_items_degenerates_harmlessly() {
        let mut c = carousel(0, WIDE);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.indicators().count(), 1);

        c.advance(Direction::Forward);
        c.jump_to(5);
        c.on_gesture_end(300, 100);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn offset_uses_fresh_item_width_and_gap() {
        let mut c = carousel(7, WIDE);
        assert_eq!(c.offset(200), 0);

        c.jump_to(2);
        // 2 * (200 + 20)
        assert_eq!(c.offset(200), 440);
        // Reflowed layout: same index, new width
        assert_eq!(c.offset(150), 340);
    }

    #[test]
    fn invariant_holds_under_mixed_operation_sequences() {
        let mut c = carousel(9, WIDE);
        let widths = [NARROW, MEDIUM, WIDE, 768, 1024, 1025];

        for step in 0..200usize {
            match step % 5 {
                0 => c.advance(Direction::Forward),
                1 => c.advance(Direction::Backward),
                2 => c.jump_to(step as isize - 100),
                3 => c.on_resize(widths[step % widths.len()]),
                _ => c.on_gesture_end(((step * 37) % 400) as u16, 100),
            }

            assert!(c.current_index() <= c.max_index());
            assert_eq!(c.max_index(), 9usize.saturating_sub(c.page_size()));
            assert_eq!(c.indicators().count(), c.max_index() + 1);
            assert_eq!(c.indicators().active(), c.current_index());
        }
    }
}
