//! Push-button handling
//!
//! One task per button: wait for a falling edge (both buttons are active
//! low with pull-ups), run the debounce gate, and on a confirmed press
//! raise the matching press latch. Nothing else happens here; display,
//! PWM and ADC work stays in the control loop.

use crate::system::press;
use crate::system::resources::{ButtonAResources, JoystickButtonResources};
use embassy_rp::gpio::{Input, Pull};
use embassy_time::Instant;
use joysquare_core::DebounceGate;

/// Joystick button handler
#[embassy_executor::task]
pub async fn joystick_button_handle(r: JoystickButtonResources) {
    let mut btn = Input::new(r.pin, Pull::Up);
    let mut gate = DebounceGate::new();
    loop {
        btn.wait_for_falling_edge().await;
        if gate.on_edge(Instant::now().as_micros()) {
            press::joystick_pressed();
        }
    }
}

/// Button A handler
#[embassy_executor::task]
pub async fn button_a_handle(r: ButtonAResources) {
    let mut btn = Input::new(r.pin, Pull::Up);
    let mut gate = DebounceGate::new();
    loop {
        btn.wait_for_falling_edge().await;
        if gate.on_edge(Instant::now().as_micros()) {
            press::button_a_pressed();
        }
    }
}
