//! Leptos Gesture Utilities
//!
//! Swipe-to-reveal and long-press recognition for Leptos using pointer events.
//! The trackers are plain structs so the thresholds can be tested without a
//! browser; the `make_on_*` helpers wire them to signals and DOM handlers.

mod long_press;
mod swipe;

pub use long_press::{
    create_long_press_signals, make_on_press_cancel, make_on_press_click, make_on_press_end,
    make_on_press_move, make_on_press_start, LongPressSignals, LongPressTracker, LONG_PRESS_MS,
    PRESS_SLOP_PX,
};
pub use swipe::{
    create_swipe_signals, make_on_swipe_cancel, make_on_swipe_end, make_on_swipe_move,
    make_on_swipe_start, SwipeConfig, SwipeOutcome, SwipeSignals, SwipeTracker, AXIS_LOCK_PX,
};
