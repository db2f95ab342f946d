//! Headless RGBA raster surface.
//!
//! A plain row-major pixel buffer with bounds-checked access and simple
//! scanline shape fills. Labels use a built-in 5x7 glyph set (uppercase
//! ASCII and digits), enough for short marker tags like "GK" or "DEF-1".

use crate::style::Color;
use crate::surface::DrawSurface;

/// Glyph cell dimensions for the built-in font.
const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;
/// Horizontal advance per glyph (one column of spacing).
const GLYPH_ADVANCE: i32 = GLYPH_W + 1;

/// RGBA8 pixel buffer, row-major.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at (x, y), or None outside the surface.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    /// Source-over blend one pixel; out-of-bounds writes are clipped.
    fn blend(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        if color.a == 0xff {
            self.pixels[i] = color.r;
            self.pixels[i + 1] = color.g;
            self.pixels[i + 2] = color.b;
            self.pixels[i + 3] = 0xff;
            return;
        }
        let a = color.a as u32;
        let inv = 255 - a;
        self.pixels[i] = ((color.r as u32 * a + self.pixels[i] as u32 * inv) / 255) as u8;
        self.pixels[i + 1] = ((color.g as u32 * a + self.pixels[i + 1] as u32 * inv) / 255) as u8;
        self.pixels[i + 2] = ((color.b as u32 * a + self.pixels[i + 2] as u32 * inv) / 255) as u8;
        self.pixels[i + 3] = (a + self.pixels[i + 3] as u32 * inv / 255).min(255) as u8;
    }

    fn draw_glyph(&mut self, left: i32, top: i32, ch: char, color: Color) {
        let rows = glyph(ch);
        for (dy, row) in rows.iter().enumerate() {
            for dx in 0..GLYPH_W {
                if row & (0x10 >> dx) != 0 {
                    self.blend(left + dx, top + dy as i32, color);
                }
            }
        }
    }
}

impl DrawSurface for Pixmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = 0xff;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                self.blend(x + dx, y + dy, color);
            }
        }
    }

    fn stroke_rect(&mut self, x: i32, y: i32, w: u32, h: u32, line_width: u32, color: Color) {
        if w == 0 || h == 0 {
            return;
        }
        let lw = line_width.clamp(1, w.min(h).div_ceil(2));
        // Top and bottom bands, then the remaining left/right bands.
        self.fill_rect(x, y, w, lw, color);
        self.fill_rect(x, y + (h - lw) as i32, w, lw, color);
        if h > 2 * lw {
            self.fill_rect(x, y + lw as i32, lw, h - 2 * lw, color);
            self.fill_rect(x + (w - lw) as i32, y + lw as i32, lw, h - 2 * lw, color);
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.blend(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let outer = radius * radius;
        let inner = (radius - 1) * (radius - 1);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = dx * dx + dy * dy;
                if d2 <= outer && d2 > inner {
                    self.blend(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        let glyph_count = text.chars().count() as i32;
        if glyph_count == 0 {
            return;
        }
        let total_w = glyph_count * GLYPH_ADVANCE - 1;
        let mut left = x - total_w / 2;
        let top = y - GLYPH_H;
        for ch in text.chars() {
            self.draw_glyph(left, top, ch.to_ascii_uppercase(), color);
            left += GLYPH_ADVANCE;
        }
    }
}

/// 5x7 bitmap rows (bit 4 = leftmost column) for the label character set.
/// Unknown characters render as blank space.
fn glyph(ch: char) -> [u8; 7] {
    match ch {
        'A' => [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'B' => [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e],
        'C' => [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e],
        'D' => [0x1e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1e],
        'E' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f],
        'F' => [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10],
        'G' => [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0e],
        'H' => [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11],
        'I' => [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f],
        'M' => [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e],
        'P' => [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10],
        'Q' => [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d],
        'R' => [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11],
        'S' => [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e],
        'T' => [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0a],
        'X' => [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f],
        '0' => [0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e],
        '1' => [0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e],
        '2' => [0x0e, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1f],
        '3' => [0x1f, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0e],
        '4' => [0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02],
        '5' => [0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e],
        '6' => [0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e],
        '7' => [0x1f, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e],
        '9' => [0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c],
        '-' => [0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00],
        _ => [0x00; 7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pixmap_is_transparent_black() {
        let pixmap = Pixmap::new(4, 3);
        assert_eq!(pixmap.data().len(), 4 * 3 * 4);
        assert_eq!(pixmap.get(0, 0), Some(Color::rgba(0, 0, 0, 0)));
        assert_eq!(pixmap.get(4, 0), None);
        assert_eq!(pixmap.get(0, 3), None);
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut pixmap = Pixmap::new(8, 8);
        pixmap.clear(Color::rgb(1, 2, 3));
        assert_eq!(pixmap.get(0, 0), Some(Color::rgb(1, 2, 3)));
        assert_eq!(pixmap.get(7, 7), Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_fill_circle_covers_center_not_corners() {
        let mut pixmap = Pixmap::new(21, 21);
        pixmap.clear(Color::rgb(0, 0, 0));
        pixmap.fill_circle(10, 10, 5, Color::rgb(255, 255, 255));
        assert_eq!(pixmap.get(10, 10), Some(Color::rgb(255, 255, 255)));
        assert_eq!(pixmap.get(10, 5), Some(Color::rgb(255, 255, 255)));
        assert_eq!(pixmap.get(0, 0), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn test_stroke_circle_leaves_interior_untouched() {
        let mut pixmap = Pixmap::new(21, 21);
        pixmap.clear(Color::rgb(0, 0, 0));
        pixmap.stroke_circle(10, 10, 6, Color::rgb(255, 0, 0));
        assert_eq!(pixmap.get(10, 10), Some(Color::rgb(0, 0, 0)));
        assert_eq!(pixmap.get(10, 4), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_shapes_clip_at_the_edges() {
        let mut pixmap = Pixmap::new(10, 10);
        pixmap.fill_rect(-5, -5, 100, 100, Color::rgb(9, 9, 9));
        pixmap.fill_circle(0, 0, 50, Color::rgb(1, 1, 1));
        assert_eq!(pixmap.get(9, 9), Some(Color::rgb(1, 1, 1)));
    }

    #[test]
    fn test_translucent_fill_blends_over_background() {
        let mut pixmap = Pixmap::new(2, 2);
        pixmap.clear(Color::rgb(0, 0, 0));
        pixmap.fill_rect(0, 0, 2, 2, Color::rgba(255, 255, 255, 0x80));
        let px = pixmap.get(0, 0).unwrap();
        assert!(px.r > 100 && px.r < 160, "half-alpha white over black, got {}", px.r);
        assert_eq!(px.a, 0xff);
    }

    #[test]
    fn test_draw_text_marks_pixels_near_baseline() {
        let mut pixmap = Pixmap::new(40, 20);
        pixmap.clear(Color::rgb(0, 0, 0));
        pixmap.draw_text(20, 15, "GK", Color::rgb(255, 255, 255));
        let lit = (0..40)
            .flat_map(|x| (0..20).map(move |y| (x, y)))
            .filter(|&(x, y)| pixmap.get(x, y) == Some(Color::rgb(255, 255, 255)))
            .count();
        assert!(lit > 10, "expected glyph pixels, found {lit}");
        // Nothing below the baseline.
        for x in 0..40 {
            for y in 15..20 {
                assert_eq!(pixmap.get(x, y), Some(Color::rgb(0, 0, 0)));
            }
        }
    }
}
