//! Frame rendering
//!
//! Draws one frame of the demo into any monochrome `DrawTarget`: the moving
//! square at its mapped position, then the border for the active style on
//! top. The hardware flush stays with the caller.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment},
    Pixel,
};

use crate::border::BorderStyle;
use crate::mapper::{SCREEN_HEIGHT, SCREEN_WIDTH, SQUARE_SIZE};

/// Corner radius of the `Round` border style.
const ROUND_CORNER_RADIUS: u32 = 8;

/// Pixel spacing of the `Dotted` border style.
const DOT_SPACING: usize = 4;

/// Clears the frame and draws the square and border.
pub fn draw_frame<D>(target: &mut D, x: u16, y: u16, border: BorderStyle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    Rectangle::new(
        Point::new(i32::from(x), i32::from(y)),
        Size::new_equal(u32::from(SQUARE_SIZE)),
    )
    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
    .draw(target)?;

    draw_border(target, border)
}

fn draw_border<D>(target: &mut D, border: BorderStyle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let screen = Rectangle::new(
        Point::zero(),
        Size::new(u32::from(SCREEN_WIDTH), u32::from(SCREEN_HEIGHT)),
    );

    match border {
        BorderStyle::None => Ok(()),
        BorderStyle::Solid => screen.into_styled(frame_style(1)).draw(target),
        BorderStyle::Double => screen.into_styled(frame_style(2)).draw(target),
        BorderStyle::Round => RoundedRectangle::with_equal_corners(
            screen,
            Size::new_equal(ROUND_CORNER_RADIUS),
        )
        .into_styled(frame_style(1))
        .draw(target),
        BorderStyle::Dotted => {
            let w = i32::from(SCREEN_WIDTH);
            let h = i32::from(SCREEN_HEIGHT);
            let top_bottom = (0..w)
                .step_by(DOT_SPACING)
                .flat_map(move |x| [Point::new(x, 0), Point::new(x, h - 1)]);
            let sides = (0..h)
                .step_by(DOT_SPACING)
                .flat_map(move |y| [Point::new(0, y), Point::new(w - 1, y)]);
            target.draw_iter(
                top_bottom
                    .chain(sides)
                    .map(|p| Pixel(p, BinaryColor::On)),
            )
        }
    }
}

/// Frame stroke of the given width, kept inside the screen bounds.
fn frame_style(width: u32) -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}
