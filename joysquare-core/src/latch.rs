//! One-shot press latch
//!
//! A raised latch stays pending until drained, so a press is never lost
//! between control-loop iterations; raising an already-raised latch
//! coalesces into the one pending event instead of queueing. Draining an
//! unraised latch reports nothing and changes nothing.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// One-shot, write-wins press latch, safe to raise from any context.
pub struct PressLatch {
    inner: Signal<CriticalSectionRawMutex, ()>,
}

impl PressLatch {
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Raises the latch; raising while already raised coalesces.
    pub fn raise(&self) {
        self.inner.signal(());
    }

    /// Drains the latch, reporting whether a press was pending.
    pub fn take(&self) -> bool {
        self.inner.try_take().is_some()
    }
}

impl Default for PressLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::BorderStyle;
    use crate::state::PanelState;

    #[test]
    fn draining_an_unraised_latch_reports_nothing() {
        let latch = PressLatch::new();
        assert!(!latch.take());
    }

    #[test]
    fn raise_then_drain_is_one_shot() {
        let latch = PressLatch::new();
        latch.raise();
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn raises_before_a_drain_coalesce_into_one_press() {
        let latch = PressLatch::new();
        latch.raise();
        latch.raise();
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn unraised_latch_drives_no_state_change() {
        // the drain structure of the control loop: state only moves when
        // the latch actually held a press
        let latch = PressLatch::new();
        let mut state = PanelState::new();
        if latch.take() {
            state.on_joystick_press();
        }
        assert_eq!(state.border, BorderStyle::Solid);
        assert!(!state.green_led_on);
        assert!(state.leds_enabled);
    }
}
