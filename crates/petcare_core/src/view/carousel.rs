//! KPI carousel indicator state.
//!
//! # Invariants
//! - Each card is `ITEM_WIDTH_RATIO` of the viewport wide.
//! - The active index always lies in `0..item_count` (0 when empty).
//! - The index is only recomputed after `SCROLL_DEBOUNCE` without scroll
//!   updates.

use std::time::{Duration, Instant};

/// Card width as a fraction of the viewport width.
pub const ITEM_WIDTH_RATIO: f64 = 0.76;
/// Quiet period required before the active index follows the scroll offset.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(50);

/// Width of one carousel card for `viewport_width`.
pub fn item_width(viewport_width: f64) -> f64 {
    viewport_width * ITEM_WIDTH_RATIO
}

/// Nearest card index for a horizontal scroll offset.
///
/// `round(offset / item_width)` clamped to `[0, item_count - 1]`. Degenerate
/// inputs (no items, non-positive width, NaN offset) yield 0.
pub fn active_index(scroll_offset: f64, viewport_width: f64, item_count: usize) -> usize {
    let width = item_width(viewport_width);
    if item_count == 0 || width.is_nan() || width <= 0.0 {
        return 0;
    }
    let raw = (scroll_offset / width).round();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    let last = item_count - 1;
    if raw >= last as f64 {
        last
    } else {
        raw as usize
    }
}

/// Scroll offset that brings card `index` into place.
pub fn scroll_offset_for(index: usize, viewport_width: f64) -> f64 {
    index as f64 * item_width(viewport_width)
}

/// Trailing-edge debouncer for scroll offsets.
#[derive(Debug, Clone, Copy)]
pub struct ScrollDebouncer {
    quiet_period: Duration,
    pending: Option<(f64, Instant)>,
}

impl Default for ScrollDebouncer {
    fn default() -> Self {
        Self::new(SCROLL_DEBOUNCE)
    }
}

impl ScrollDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Records the latest offset, restarting the quiet period.
    pub fn on_scroll(&mut self, offset: f64, at: Instant) {
        self.pending = Some((offset, at));
    }

    /// Returns the settled offset once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let (offset, last_update) = self.pending?;
        if now.saturating_duration_since(last_update) < self.quiet_period {
            return None;
        }
        self.pending = None;
        Some(offset)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Carousel indicator state owned by the dashboard view.
#[derive(Debug, Clone, Copy)]
pub struct CarouselState {
    item_count: usize,
    viewport_width: f64,
    active_index: usize,
    debouncer: ScrollDebouncer,
}

impl CarouselState {
    pub fn new(item_count: usize, viewport_width: f64) -> Self {
        Self {
            item_count,
            viewport_width,
            active_index: 0,
            debouncer: ScrollDebouncer::default(),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Indicators are only rendered for more than one card.
    pub fn shows_indicators(&self) -> bool {
        self.item_count > 1
    }

    /// `true` at the active indicator position.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.item_count)
            .map(|index| index == self.active_index)
            .collect()
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.active_index = self.active_index.min(item_count.saturating_sub(1));
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
    }

    pub fn on_scroll(&mut self, offset: f64, at: Instant) {
        self.debouncer.on_scroll(offset, at);
    }

    /// Applies a settled scroll offset; returns the new index when it changed.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        let offset = self.debouncer.poll(now)?;
        let index = active_index(offset, self.viewport_width, self.item_count);
        if index == self.active_index {
            return None;
        }
        self.active_index = index;
        Some(index)
    }

    /// Target offset for an indicator click; the index follows once the
    /// resulting scroll settles.
    pub fn offset_for_indicator(&self, index: usize) -> f64 {
        let index = index.min(self.item_count.saturating_sub(1));
        scroll_offset_for(index, self.viewport_width)
    }
}
