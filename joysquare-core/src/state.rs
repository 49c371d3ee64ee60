//! Panel state
//!
//! The mutable state driven by confirmed button presses. Owned exclusively
//! by the control loop task; button tasks only raise press signals and
//! never touch this struct.

use crate::border::BorderStyle;

/// Runtime state of the demo panel.
pub struct PanelState {
    /// Currently active border style
    pub border: BorderStyle,
    /// Whether LED output is enabled at all; when false every channel is
    /// forced to zero by the control loop
    pub leds_enabled: bool,
    /// Green LED toggle, flipped on each confirmed joystick-button press
    pub green_led_on: bool,
}

impl PanelState {
    /// Initial state: solid border, LEDs enabled, green LED off.
    pub const fn new() -> Self {
        Self {
            border: BorderStyle::Solid,
            leds_enabled: true,
            green_led_on: false,
        }
    }

    /// Applies a confirmed joystick-button press: flips the green LED
    /// toggle and advances the border style.
    pub fn on_joystick_press(&mut self) {
        self.green_led_on = !self.green_led_on;
        self.border = self.border.next();
    }

    /// Applies a confirmed button-A press, toggling LED output.
    ///
    /// Returns the new enable state so the caller can force channels off
    /// immediately on a disable transition.
    pub fn on_button_a_press(&mut self) -> bool {
        self.leds_enabled = !self.leds_enabled;
        self.leds_enabled
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = PanelState::new();
        assert_eq!(state.border, BorderStyle::Solid);
        assert!(state.leds_enabled);
        assert!(!state.green_led_on);
    }

    #[test]
    fn joystick_press_flips_green_and_advances_border() {
        let mut state = PanelState::new();
        state.on_joystick_press();
        assert!(state.green_led_on);
        assert_eq!(state.border, BorderStyle::Double);
        state.on_joystick_press();
        assert!(!state.green_led_on);
        assert_eq!(state.border, BorderStyle::Round);
    }

    #[test]
    fn five_presses_return_border_to_solid() {
        let mut state = PanelState::new();
        for _ in 0..BorderStyle::COUNT {
            state.on_joystick_press();
        }
        assert_eq!(state.border, BorderStyle::Solid);
        // odd/even bookkeeping of the green toggle survives the cycle
        assert!(state.green_led_on);
    }

    #[test]
    fn button_a_toggles_led_enable() {
        let mut state = PanelState::new();
        assert!(!state.on_button_a_press());
        assert!(!state.leds_enabled);
        assert!(state.on_button_a_press());
        assert!(state.leds_enabled);
    }
}
