//! Color model - RGBA colors and the icon palette

use image::Rgba;

/// An 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

/// Blue background (Tailwind blue-500)
pub const BACKGROUND: Color = Color::rgb(59, 130, 246);
/// Opaque white border
pub const BORDER: Color = Color::rgb(255, 255, 255);
/// Translucent white cross
pub const CROSS: Color = BORDER.with_alpha(200);

/// Palette used to paint an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub background: Color,
    pub border: Color,
    pub cross: Color,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            border: BORDER,
            cross: CROSS,
        }
    }
}
