//! The drawing-surface contract.

use crate::style::Color;

/// An addressable 2D drawing target with fixed pixel dimensions.
///
/// The renderer is written against this trait; any backend that can fill
/// and stroke rectangles and circles and place baseline text can display a
/// playback frame. Coordinates may fall outside the surface — backends
/// clip rather than panic.
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole surface with one opaque color.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color);

    fn stroke_rect(&mut self, x: i32, y: i32, w: u32, h: u32, line_width: u32, color: Color);

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);

    /// One-pixel ring at `radius`.
    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);

    /// Draw `text` centered horizontally on `x` with its baseline at `y`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);
}
