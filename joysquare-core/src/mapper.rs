//! Axis mapping
//!
//! Converts raw joystick samples into a square position on the display and
//! into LED brightness levels.
//!
//! # Position
//! Each axis scales linearly over the range the square can occupy without
//! leaving the screen: `pixel = raw * (dim - SQUARE_SIZE) / MAX_SAMPLE`,
//! integer floor division per axis. The X sample (ADC0) drives the width
//! axis, the Y sample (ADC1) the height axis.
//!
//! # Brightness
//! Deviation-linear with a clamped floor: the further the stick sits from
//! its center rest position, the brighter the LED, but never below
//! `PWM_MIN` so the LED stays visibly lit whenever it is driven at all.
//! Disabling LED output entirely is the caller's concern, not the mapper's.

/// Full-scale raw sample of the 12-bit converter
pub const MAX_SAMPLE: u16 = 4095;

/// Joystick rest position (half of full scale)
pub const SAMPLE_CENTER: u16 = 2048;

/// Display width in pixels
pub const SCREEN_WIDTH: u16 = 128;

/// Display height in pixels
pub const SCREEN_HEIGHT: u16 = 64;

/// Edge length of the moving square
pub const SQUARE_SIZE: u16 = 8;

/// PWM wrap value, also the maximum brightness level
pub const PWM_MAX: u16 = 4095;

/// Minimum emitted brightness, avoids an imperceptibly dim LED
pub const PWM_MIN: u16 = 50;

/// Maps a pair of raw samples to the square's top-left pixel coordinate.
///
/// The result stays within `[0, dim - SQUARE_SIZE]` on both axes for any
/// input in `[0, MAX_SAMPLE]`.
pub fn map_position(raw_x: u16, raw_y: u16) -> (u16, u16) {
    (
        scale_axis(raw_x, SCREEN_WIDTH),
        scale_axis(raw_y, SCREEN_HEIGHT),
    )
}

fn scale_axis(raw: u16, dim: u16) -> u16 {
    (u32::from(raw) * u32::from(dim - SQUARE_SIZE) / u32::from(MAX_SAMPLE)) as u16
}

/// Maps a raw sample to a brightness level in `[PWM_MIN, PWM_MAX]`,
/// proportional to the deviation from the stick's center position.
pub fn map_brightness(raw: u16) -> u16 {
    let deviation = u32::from(raw.abs_diff(SAMPLE_CENTER));
    let span = u32::from(PWM_MAX - PWM_MIN);
    (u32::from(PWM_MIN) + deviation * span / u32::from(SAMPLE_CENTER)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_stays_in_bounds_over_full_range() {
        for raw in 0..=MAX_SAMPLE {
            let (x, y) = map_position(raw, raw);
            assert!(x <= SCREEN_WIDTH - SQUARE_SIZE);
            assert!(y <= SCREEN_HEIGHT - SQUARE_SIZE);
        }
    }

    #[test]
    fn position_boundaries_are_exact() {
        assert_eq!(map_position(0, 0), (0, 0));
        // raw == MAX_SAMPLE divides evenly, no one-short floor artifact
        assert_eq!(
            map_position(MAX_SAMPLE, MAX_SAMPLE),
            (SCREEN_WIDTH - SQUARE_SIZE, SCREEN_HEIGHT - SQUARE_SIZE)
        );
    }

    #[test]
    fn centered_stick_lands_at_range_midpoint() {
        let (x, y) = map_position(SAMPLE_CENTER, SAMPLE_CENTER);
        assert_eq!(x, (SCREEN_WIDTH - SQUARE_SIZE) / 2);
        assert_eq!(y, (SCREEN_HEIGHT - SQUARE_SIZE) / 2);
    }

    #[test]
    fn brightness_stays_clamped_over_full_range() {
        for raw in 0..=MAX_SAMPLE {
            let level = map_brightness(raw);
            assert!((PWM_MIN..=PWM_MAX).contains(&level));
        }
    }

    #[test]
    fn brightness_boundaries() {
        // at rest the floor clamp holds the output at the minimum
        assert_eq!(map_brightness(SAMPLE_CENTER), PWM_MIN);
        // full deflection low reaches the maximum exactly
        assert_eq!(map_brightness(0), PWM_MAX);
        // full deflection high is one deviation step short of center*2,
        // floor division lands two below the maximum
        assert_eq!(map_brightness(MAX_SAMPLE), 4093);
    }
}
