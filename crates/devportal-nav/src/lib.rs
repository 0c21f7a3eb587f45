//! Navigation state for card carousels and paginated lists.
//!
//! All types here are synchronous and clock-free: anything time-based takes
//! the current [`std::time::Instant`] as an argument, so callers drive the
//! timers and tests can step time explicitly.

pub mod carousel;
pub mod pager;
pub mod paginator;

pub use carousel::{
    AutoAdvance, CarouselController, DEFAULT_AUTO_ADVANCE_INTERVAL, DEFAULT_TRANSITION,
    NavOutcome, TransitionState, index_from_scroll,
};
pub use pager::CardPager;
pub use paginator::Paginator;
