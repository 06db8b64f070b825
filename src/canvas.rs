//! Canvas - an owned RGBA raster with the drawing primitives icons need
//!
//! Drawing replaces pixel values rather than compositing them, so a
//! translucent ink leaves its own alpha in the buffer. All primitives clip to
//! the canvas and accept coordinates outside it.

use image::RgbaImage;

use crate::core::Color;

/// Square RGBA drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocate a `size x size` canvas filled with `fill`
    pub fn new(size: u32, fill: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(size, size, fill.into()),
        }
    }

    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).map(|p| Color::from(*p))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Paint the inclusive rectangle `[x0, x1] x [y0, y1]`
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let last = i64::from(self.size()) - 1;
        let (x0, x1) = (x0.max(0), x1.min(last));
        let (y0, y1) = (y0.max(0), y1.min(last));
        if x0 > x1 || y0 > y1 {
            return;
        }

        let ink = color.into();
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.pixels.put_pixel(x as u32, y as u32, ink);
            }
        }
    }

    /// Outline the inclusive rectangle `[x0, x1] x [y0, y1]`.
    ///
    /// The stroke grows inward: every pixel within `width` of an edge is
    /// painted.
    pub fn stroke_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color, width: u32) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        let w = i64::from(width.max(1));

        self.fill_rect(x0, y0, x1, (y0 + w - 1).min(y1), color);
        self.fill_rect(x0, (y1 - w + 1).max(y0), x1, y1, color);
        self.fill_rect(x0, y0, (x0 + w - 1).min(x1), y1, color);
        self.fill_rect((x1 - w + 1).max(x0), y0, x1, y1, color);
    }

    /// Horizontal line from `x0` to `x1` (inclusive) centered on row `y`
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, color: Color, width: u32) {
        let (before, after) = stroke_band(width);
        self.fill_rect(x0.min(x1), y - before, x0.max(x1), y + after, color);
    }

    /// Vertical line from `y0` to `y1` (inclusive) centered on column `x`
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, color: Color, width: u32) {
        let (before, after) = stroke_band(width);
        self.fill_rect(x - before, y0.min(y1), x + after, y0.max(y1), color);
    }
}

/// Pixels a stroke covers on each side of its axis.
///
/// Even widths put the extra pixel on the positive side.
fn stroke_band(width: u32) -> (i64, i64) {
    let extra = i64::from(width.max(1)) - 1;
    let before = extra / 2;
    (before, extra - before)
}
