//! Press signaling
//!
//! The two one-shot press latches between the button tasks and the control
//! loop, one per physical button. See [`joysquare_core::latch`] for the
//! latch semantics (pending until drained, write-wins coalescing, idle
//! drains are no-ops).

use joysquare_core::PressLatch;

/// Pending confirmed press of the joystick button
static JOYSTICK_PRESSED: PressLatch = PressLatch::new();

/// Pending confirmed press of button A
static BUTTON_A_PRESSED: PressLatch = PressLatch::new();

/// Raises the joystick-button press latch.
pub fn joystick_pressed() {
    JOYSTICK_PRESSED.raise();
}

/// Drains the joystick-button press latch, reporting whether a press was
/// pending.
pub fn take_joystick_press() -> bool {
    JOYSTICK_PRESSED.take()
}

/// Raises the button-A press latch.
pub fn button_a_pressed() {
    BUTTON_A_PRESSED.raise();
}

/// Drains the button-A press latch, reporting whether a press was pending.
pub fn take_button_a_press() -> bool {
    BUTTON_A_PRESSED.take()
}
