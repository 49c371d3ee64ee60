//! Edge debouncing
//!
//! Suppresses spurious repeated edge triggers from mechanical contact
//! bounce. Each physical button gets its own gate; there is no shared
//! state between gates.

/// Minimum time between two accepted edges from the same source.
pub const DEBOUNCE_WINDOW_US: u64 = 50_000;

/// Per-source debounce gate.
///
/// Fails closed: an edge arriving inside the quiet window is rejected and
/// the stored timestamp is left untouched, so a burst of bounces extends
/// nothing and confirms nothing.
pub struct DebounceGate {
    last_accepted_us: Option<u64>,
}

impl DebounceGate {
    pub const fn new() -> Self {
        Self {
            last_accepted_us: None,
        }
    }

    /// Reports whether an edge at `now_us` counts as a confirmed press.
    ///
    /// The first edge ever seen is always accepted. Afterwards an edge is
    /// accepted iff at least [`DEBOUNCE_WINDOW_US`] has passed since the
    /// last accepted one; acceptance stores `now_us` as the new reference.
    pub fn on_edge(&mut self, now_us: u64) -> bool {
        match self.last_accepted_us {
            Some(last) if now_us.saturating_sub(last) < DEBOUNCE_WINDOW_US => false,
            _ => {
                self.last_accepted_us = Some(now_us);
                true
            }
        }
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_000_000;

    #[test]
    fn first_edge_is_accepted() {
        let mut gate = DebounceGate::new();
        assert!(gate.on_edge(0));
    }

    #[test]
    fn edge_inside_window_is_rejected() {
        let mut gate = DebounceGate::new();
        assert!(gate.on_edge(T0));
        assert!(!gate.on_edge(T0 + DEBOUNCE_WINDOW_US - 1));
    }

    #[test]
    fn edge_at_window_boundary_is_accepted() {
        let mut gate = DebounceGate::new();
        assert!(gate.on_edge(T0));
        assert!(gate.on_edge(T0 + DEBOUNCE_WINDOW_US));
    }

    #[test]
    fn rejected_edge_leaves_reference_timestamp_unchanged() {
        let mut gate = DebounceGate::new();
        assert!(gate.on_edge(T0));
        assert!(!gate.on_edge(T0 + 20_000));
        // still measured from T0, not from the rejected edge
        assert!(gate.on_edge(T0 + DEBOUNCE_WINDOW_US));
    }

    #[test]
    fn gates_are_independent() {
        let mut joystick = DebounceGate::new();
        let mut button_a = DebounceGate::new();
        assert!(joystick.on_edge(T0));
        // a press on one source never shadows the other
        assert!(button_a.on_edge(T0 + 1));
    }
}
