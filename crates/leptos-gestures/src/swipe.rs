//! Swipe to reveal
//!
//! A row follows the finger to the left (damped by `friction`) and reveals an
//! action panel on its right. Releasing with the panel at least `threshold`
//! wide opens it; anything less springs back.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement in pixels before the gesture commits to an axis
pub const AXIS_LOCK_PX: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Finger distance divided by this gives row distance
    pub friction: f64,
    /// Width of the revealed action panel; the row never travels further
    pub panel_width: f64,
    /// Revealed width required on release to open the panel
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            friction: 2.0,
            panel_width: 80.0,
            threshold: 80.0,
        }
    }
}

/// Result of releasing a swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Panel opened fully
    Opened,
    /// Row returns to rest
    Settled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    /// Pointer down, axis not decided yet
    Pending { start_x: f64, start_y: f64 },
    /// Horizontal drag in progress
    Swiping { start_x: f64 },
    /// Vertical movement: leave it to the scroll container
    Scrolling,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    config: SwipeConfig,
    phase: Phase,
    offset: f64,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.phase = Phase::Pending { start_x: x, start_y: y };
        self.offset = 0.0;
    }

    /// Feed a pointer position; returns the row offset to render (zero or negative)
    pub fn update(&mut self, x: f64, y: f64) -> f64 {
        match self.phase {
            Phase::Pending { start_x, start_y } => {
                let dx = (x - start_x).abs();
                let dy = (y - start_y).abs();
                if dx > AXIS_LOCK_PX || dy > AXIS_LOCK_PX {
                    if dx > dy {
                        self.phase = Phase::Swiping { start_x };
                        self.offset = self.offset_for(x - start_x);
                    } else {
                        self.phase = Phase::Scrolling;
                    }
                }
            }
            Phase::Swiping { start_x } => self.offset = self.offset_for(x - start_x),
            Phase::Idle | Phase::Scrolling => {}
        }
        self.offset
    }

    /// Release the pointer
    pub fn finish(&mut self) -> SwipeOutcome {
        let opened = matches!(self.phase, Phase::Swiping { .. }) && -self.offset >= self.config.threshold;
        self.phase = Phase::Idle;
        self.offset = 0.0;
        if opened {
            SwipeOutcome::Opened
        } else {
            SwipeOutcome::Settled
        }
    }

    /// Abort without opening
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.offset = 0.0;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_swiping(&self) -> bool {
        matches!(self.phase, Phase::Swiping { .. })
    }

    fn offset_for(&self, dx: f64) -> f64 {
        let damped = dx / self.config.friction.max(1.0);
        damped.clamp(-self.config.panel_width, 0.0)
    }
}

/// Swipe state signal for one row
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub tracker: RwSignal<SwipeTracker>,
}

impl SwipeSignals {
    /// Current row offset (reactive)
    pub fn offset(&self) -> f64 {
        self.tracker.with(|t| t.offset())
    }

    pub fn is_swiping(&self) -> bool {
        self.tracker.with(|t| t.is_swiping())
    }
}

pub fn create_swipe_signals(config: SwipeConfig) -> SwipeSignals {
    SwipeSignals {
        tracker: RwSignal::new(SwipeTracker::new(config)),
    }
}

/// Create pointerdown handler: start tracking and capture the pointer
pub fn make_on_swipe_start(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        // Buttons inside the row handle their own taps
        if let Some(target) = ev.target() {
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                if el.closest("button").ok().flatten().is_some() {
                    return;
                }
            }
        }
        if let Some(current) = ev.current_target() {
            if let Some(el) = current.dyn_ref::<web_sys::Element>() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
        sw.tracker
            .update(|t| t.begin(ev.client_x() as f64, ev.client_y() as f64));
    }
}

pub fn make_on_swipe_move(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        sw.tracker.update(|t| {
            t.update(ev.client_x() as f64, ev.client_y() as f64);
        });
    }
}

/// Create pointerup handler; `on_open` runs when the panel opens
pub fn make_on_swipe_end(sw: SwipeSignals, on_open: Callback<()>) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        let outcome = sw
            .tracker
            .try_update(|t| t.finish())
            .unwrap_or(SwipeOutcome::Settled);
        if outcome == SwipeOutcome::Opened {
            on_open.run(());
        }
    }
}

pub fn make_on_swipe_cancel(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        sw.tracker.update(|t| t.reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(SwipeConfig::default())
    }

    #[test]
    fn test_short_swipe_settles() {
        let mut t = tracker();
        t.begin(300.0, 100.0);
        assert_eq!(t.update(200.0, 100.0), -50.0);
        assert_eq!(t.finish(), SwipeOutcome::Settled);
        assert_eq!(t.offset(), 0.0);
    }

    #[test]
    fn test_long_swipe_opens() {
        let mut t = tracker();
        t.begin(300.0, 100.0);
        t.update(250.0, 101.0);
        assert_eq!(t.update(100.0, 102.0), -80.0);
        assert_eq!(t.finish(), SwipeOutcome::Opened);
    }

    #[test]
    fn test_no_overshoot() {
        let mut t = tracker();
        t.begin(400.0, 0.0);
        assert_eq!(t.update(0.0, 0.0), -80.0);
    }

    #[test]
    fn test_swipe_right_does_nothing() {
        let mut t = tracker();
        t.begin(0.0, 0.0);
        assert_eq!(t.update(200.0, 0.0), 0.0);
        assert_eq!(t.finish(), SwipeOutcome::Settled);
    }

    #[test]
    fn test_vertical_motion_is_scroll() {
        let mut t = tracker();
        t.begin(300.0, 100.0);
        t.update(299.0, 130.0);
        assert_eq!(t.update(0.0, 130.0), 0.0);
        assert!(!t.is_swiping());
        assert_eq!(t.finish(), SwipeOutcome::Settled);
    }

    #[test]
    fn test_tap_does_not_open() {
        let mut t = tracker();
        t.begin(10.0, 10.0);
        t.update(12.0, 11.0);
        assert_eq!(t.finish(), SwipeOutcome::Settled);
    }

    #[test]
    fn test_move_without_begin_is_ignored() {
        let mut t = tracker();
        assert_eq!(t.update(-500.0, 0.0), 0.0);
        assert_eq!(t.finish(), SwipeOutcome::Settled);
    }
}
