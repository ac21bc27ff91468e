//! Long press
//!
//! Holding a pointer still for `LONG_PRESS_MS` fires once. Moving more than
//! `PRESS_SLOP_PX` or releasing early disarms the press. Each press gets a
//! generation number; the timer callback only fires if its generation is
//! still the armed one.

use leptos::prelude::*;

/// Hold duration before a press counts as long
pub const LONG_PRESS_MS: u32 = 500;

/// Movement that turns a press into a scroll
pub const PRESS_SLOP_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LongPressTracker {
    generation: u64,
    armed: bool,
    start_x: f64,
    start_y: f64,
    /// Set when a press fired, cleared by the click that ends it
    fired: bool,
}

impl LongPressTracker {
    /// Arm a new press and return its generation
    pub fn begin(&mut self, x: f64, y: f64) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        self.fired = false;
        self.start_x = x;
        self.start_y = y;
        self.generation
    }

    /// Disarm if the pointer wandered too far
    pub fn moved(&mut self, x: f64, y: f64) {
        if self.armed {
            let dx = x - self.start_x;
            let dy = y - self.start_y;
            if (dx * dx + dy * dy).sqrt() > PRESS_SLOP_PX {
                self.armed = false;
            }
        }
    }

    /// Pointer released or cancelled
    pub fn end(&mut self) {
        self.armed = false;
    }

    /// Timer elapsed for `generation`; returns true if the press fires
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed && self.generation == generation {
            self.armed = false;
            self.fired = true;
            true
        } else {
            false
        }
    }

    /// Returns true (once) if the click that follows a fired press should be swallowed
    pub fn take_fired(&mut self) -> bool {
        std::mem::take(&mut self.fired)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Long-press state signal for one row
#[derive(Clone, Copy)]
pub struct LongPressSignals {
    pub tracker: RwSignal<LongPressTracker>,
}

impl LongPressSignals {
    /// Whether a press is being held (reactive), for pressed-state styling
    pub fn is_pressed(&self) -> bool {
        self.tracker.with(|t| t.is_armed())
    }
}

pub fn create_long_press_signals() -> LongPressSignals {
    LongPressSignals {
        tracker: RwSignal::new(LongPressTracker::default()),
    }
}

/// Create pointerdown handler: arm the press and schedule the timer
pub fn make_on_press_start(lp: LongPressSignals, on_long_press: Callback<()>) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() > 0 {
            return;
        }
        let generation = lp
            .tracker
            .try_update(|t| t.begin(ev.client_x() as f64, ev.client_y() as f64));
        let Some(generation) = generation else { return };

        let tracker = lp.tracker;
        gloo_timers::callback::Timeout::new(LONG_PRESS_MS, move || {
            if tracker.try_update(|t| t.fire(generation)).unwrap_or(false) {
                on_long_press.run(());
            }
        })
        .forget();
    }
}

pub fn make_on_press_move(lp: LongPressSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if lp.tracker.with_untracked(|t| t.is_armed()) {
            lp.tracker
                .update(|t| t.moved(ev.client_x() as f64, ev.client_y() as f64));
        }
    }
}

/// Create pointerup handler
pub fn make_on_press_end(lp: LongPressSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        lp.tracker.update(|t| t.end());
    }
}

/// Create pointercancel/pointerleave handler
pub fn make_on_press_cancel(lp: LongPressSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        lp.tracker.update(|t| t.end());
    }
}

/// Create click handler that swallows the click ending a long press
pub fn make_on_press_click(lp: LongPressSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if lp.tracker.try_update(|t| t.take_fired()).unwrap_or(false) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_press_fires_once() {
        let mut t = LongPressTracker::default();
        let generation = t.begin(10.0, 10.0);
        assert!(t.fire(generation));
        assert!(!t.fire(generation));
        assert!(t.take_fired());
        assert!(!t.take_fired());
    }

    #[test]
    fn test_released_press_does_not_fire() {
        let mut t = LongPressTracker::default();
        let generation = t.begin(10.0, 10.0);
        t.end();
        assert!(!t.fire(generation));
        assert!(!t.take_fired());
    }

    #[test]
    fn test_small_jitter_keeps_press() {
        let mut t = LongPressTracker::default();
        let generation = t.begin(10.0, 10.0);
        t.moved(14.0, 13.0);
        assert!(t.fire(generation));
    }

    #[test]
    fn test_moving_disarms() {
        let mut t = LongPressTracker::default();
        let generation = t.begin(10.0, 10.0);
        t.moved(10.0, 30.0);
        assert!(!t.is_armed());
        assert!(!t.fire(generation));
    }

    #[test]
    fn test_stale_timer_ignored() {
        let mut t = LongPressTracker::default();
        let first = t.begin(0.0, 0.0);
        t.end();
        let second = t.begin(0.0, 0.0);
        assert!(!t.fire(first));
        assert!(t.fire(second));
    }
}
