//! Display border styles
//!
//! Small cyclic state machine advanced by confirmed joystick-button
//! presses. Exactly one style is active at a time.

use defmt::Format;

/// Available border styles, cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum BorderStyle {
    /// No border pixels
    None,
    /// 1 px frame at the screen edges
    Solid,
    /// 2 px frame, insets 0 and 1
    Double,
    /// 1 px frame with rounded corners
    Round,
    /// Single pixels at fixed spacing along the edges
    Dotted,
}

impl BorderStyle {
    /// Number of styles in the cycle.
    pub const COUNT: usize = 5;

    /// Returns the next style in the cycle, wrapping from `Dotted` back
    /// to `None`.
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Solid,
            Self::Solid => Self::Double,
            Self::Double => Self::Round,
            Self::Round => Self::Dotted,
            Self::Dotted => Self::None,
        }
    }
}

impl Default for BorderStyle {
    /// The demo starts with a solid border.
    fn default() -> Self {
        Self::Solid
    }
}
