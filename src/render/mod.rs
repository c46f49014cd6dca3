//! Cell-write renderers and the terminal screen writer.

pub mod axes;
pub mod braille;
pub mod dot;
pub mod screen;

pub use screen::{Screen, terminal_inner};

use crate::core::cell::Rect;

/// Screen row for quantized cell-row `b`: row 0 sits just above the axis
/// line, rows count upward from there.
#[inline]
pub(crate) fn row_y(area: &Rect, b: i32) -> i32 {
    area.min_y + area.dy() - 3 - b
}
