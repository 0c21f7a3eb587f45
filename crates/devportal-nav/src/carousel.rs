//! Carousel index controller.
//!
//! A carousel shows `visible_count` of `item_count` items starting at
//! `active_index`. Moving wraps at both ends. While a slide animation is
//! running the controller is [`TransitionState::Transitioning`] and every
//! navigation request is dropped, not queued.

use std::time::{Duration, Instant};

/// Length of the slide animation.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(600);

/// Interval between unattended advances.
pub const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// Animation state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Transitioning { started_at: Instant },
}

impl TransitionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, TransitionState::Idle)
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The index changed and a transition started.
    Moved { from: usize, to: usize },
    /// The request was dropped (transition running, or already there).
    Ignored,
}

impl NavOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, NavOutcome::Moved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    active_index: usize,
    item_count: usize,
    visible_count: usize,
    transition: Duration,
    state: TransitionState,
}

impl CarouselController {
    /// Create a controller positioned at the first item.
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            active_index: 0,
            item_count,
            visible_count,
            transition: DEFAULT_TRANSITION,
            state: TransitionState::Idle,
        }
    }

    /// Override the transition length.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Highest index the window may start at.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// Finish the running transition if its window has elapsed at `now`.
    ///
    /// Returns `true` when the controller is idle afterwards.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let TransitionState::Transitioning { started_at } = self.state
            && now.saturating_duration_since(started_at) >= self.transition
        {
            self.state = TransitionState::Idle;
        }
        self.state.is_idle()
    }

    /// End the running transition immediately.
    pub fn finish_transition(&mut self) {
        self.state = TransitionState::Idle;
    }

    /// Advance one item, wrapping to the start after `max_index`.
    pub fn next(&mut self, now: Instant) -> NavOutcome {
        if !self.poll(now) {
            return NavOutcome::Ignored;
        }
        let to = if self.active_index >= self.max_index() {
            0
        } else {
            self.active_index + 1
        };
        self.move_to(to, now)
    }

    /// Step back one item, wrapping to `max_index` before the start.
    pub fn prev(&mut self, now: Instant) -> NavOutcome {
        if !self.poll(now) {
            return NavOutcome::Ignored;
        }
        let to = if self.active_index == 0 {
            self.max_index()
        } else {
            self.active_index - 1
        };
        self.move_to(to, now)
    }

    /// Jump to `index`.
    ///
    /// The index is not bounds-checked; indicator lists only offer valid
    /// positions.
    pub fn goto_index(&mut self, index: usize, now: Instant) -> NavOutcome {
        if index == self.active_index || !self.poll(now) {
            return NavOutcome::Ignored;
        }
        self.move_to(index, now)
    }

    /// Change how many items fit in the viewport.
    ///
    /// Keeps `active_index` within the new `max_index`.
    pub fn set_visible_count(&mut self, visible_count: usize) {
        self.visible_count = visible_count;
        let max_index = self.max_index();
        if self.active_index > max_index {
            tracing::debug!(
                from = self.active_index,
                to = max_index,
                "clamping carousel index after resize"
            );
            self.active_index = max_index;
        }
    }

    /// Indices of the `window` items shown from the active index, wrapping
    /// past the end of the list.
    pub fn visible_indices(&self, window: usize) -> Vec<usize> {
        if self.item_count == 0 {
            return Vec::new();
        }
        let window = window.min(self.item_count);
        let start = self.active_index % self.item_count;
        (0..window)
            .map(|offset| (start + offset) % self.item_count)
            .collect()
    }

    fn move_to(&mut self, to: usize, now: Instant) -> NavOutcome {
        let from = self.active_index;
        if from == to {
            return NavOutcome::Ignored;
        }
        self.active_index = to;
        self.state = TransitionState::Transitioning { started_at: now };
        NavOutcome::Moved { from, to }
    }
}

/// Unattended advance on a fixed interval.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_ADVANCE_INTERVAL)
    }
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Start counting the interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_tick = Some(now);
    }

    /// Stop until the next [`AutoAdvance::start`].
    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Advance `carousel` if the next scheduled tick is due at `now`.
    ///
    /// Ticks stay on the `start + k * interval` grid however late they are
    /// polled; intervals missed entirely are skipped rather than replayed.
    /// A tick that lands during a transition is consumed without moving.
    pub fn tick(&mut self, carousel: &mut CarouselController, now: Instant) -> NavOutcome {
        let Some(last) = self.last_tick else {
            return NavOutcome::Ignored;
        };
        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.interval || self.interval.is_zero() {
            return NavOutcome::Ignored;
        }
        let remainder = elapsed.as_nanos() % self.interval.as_nanos();
        let lateness = Duration::from_nanos(u64::try_from(remainder).unwrap_or(0));
        self.last_tick = Some(now - lateness);
        carousel.next(now)
    }
}

/// Selected indicator for a free-scrolling carousel.
///
/// Maps the scroll offset to the nearest item:
/// `round(scroll_left / scroll_width * child_count)`.
pub fn index_from_scroll(scroll_left: f64, scroll_width: f64, child_count: usize) -> usize {
    if child_count == 0 || scroll_width <= 0.0 || !scroll_left.is_finite() {
        return 0;
    }
    let index = (scroll_left / scroll_width * child_count as f64).round();
    (index.max(0.0) as usize).min(child_count - 1)
}
