//! Icon rendering
//!
//! Draws the placeholder icon (blue tile, white border, translucent cross)
//! and writes it to disk as an RGBA PNG.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::canvas::Canvas;
use crate::core::{IconError, IconGeometry, IconStyle};

/// Largest edge length accepted (a 1 GiB RGBA buffer)
pub const MAX_ICON_SIZE: u32 = 16_384;

/// A successfully written icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub path: PathBuf,
    pub size: u32,
    /// Encoded PNG length in bytes
    pub bytes: usize,
}

impl fmt::Display for RenderedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} ({}x{})",
            self.path.display(),
            self.size,
            self.size
        )
    }
}

/// Something that can produce an icon file of a given size
pub trait IconRenderer {
    fn render(&self, size: u32, path: &Path) -> Result<RenderedIcon, IconError>;
}

/// Renders icons with the `image` crate's PNG encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct PngIconRenderer {
    style: IconStyle,
}

impl PngIconRenderer {
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Paint the icon for `size` onto a fresh canvas
    pub fn draw(&self, size: u32) -> Result<Canvas, IconError> {
        if size == 0 || size > MAX_ICON_SIZE {
            return Err(IconError::InvalidSize(size));
        }

        let geometry = IconGeometry::for_size(size);
        let mut canvas = Canvas::new(size, self.style.background);

        let (x0, y0, x1, y1) = geometry.border_rect();
        canvas.stroke_rect(
            x0.into(),
            y0.into(),
            x1.into(),
            y1.into(),
            self.style.border,
            geometry.border_width,
        );

        let (x0, x1, y) = geometry.cross_horizontal();
        canvas.hline(x0.into(), x1.into(), y.into(), self.style.cross, geometry.cross_width);
        let (x, y0, y1) = geometry.cross_vertical();
        canvas.vline(x.into(), y0.into(), y1.into(), self.style.cross, geometry.cross_width);

        Ok(canvas)
    }

    /// Draw and PNG-encode the icon for `size`
    pub fn encode(&self, size: u32) -> Result<Vec<u8>, IconError> {
        let canvas = self.draw(size)?;
        let mut bytes = Vec::new();
        canvas
            .as_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

impl IconRenderer for PngIconRenderer {
    fn render(&self, size: u32, path: &Path) -> Result<RenderedIcon, IconError> {
        let png = self.encode(size)?;
        fs::write(path, &png).map_err(|e| IconError::io(path, e))?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), png.len());

        Ok(RenderedIcon {
            path: path.to_path_buf(),
            size,
            bytes: png.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, BACKGROUND, BORDER, CROSS};
    use image::ColorType;

    fn render_to_temp(size: u32) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("icon{size}.png"));
        PngIconRenderer::default().render(size, &path).unwrap();
        (dir, path)
    }

    fn pixel(img: &image::RgbaImage, x: u32, y: u32) -> Color {
        Color::from(*img.get_pixel(x, y))
    }

    #[test]
    fn test_render_reference_sizes_decode_as_rgba_png() {
        for size in [16, 48, 128] {
            let (_dir, path) = render_to_temp(size);
            let img = image::open(&path).unwrap();
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
            assert_eq!(img.color(), ColorType::Rgba8);
        }
    }

    #[test]
    fn test_render_odd_sizes() {
        for size in [1, 2, 7, 9, 33, 200] {
            let (_dir, path) = render_to_temp(size);
            let img = image::open(&path).unwrap();
            assert_eq!((img.width(), img.height()), (size, size));
        }
    }

    #[test]
    fn test_border_band() {
        for size in [16, 48, 128] {
            let g = IconGeometry::for_size(size);
            let (_dir, path) = render_to_temp(size);
            let img = image::open(&path).unwrap().to_rgba8();

            let y = g.margin + g.border_width + 1;
            for dx in 0..g.border_width {
                assert_eq!(pixel(&img, g.margin + dx, y), BORDER, "size {size}");
                assert_eq!(pixel(&img, size - g.margin - dx, y), BORDER, "size {size}");
            }
            assert_eq!(pixel(&img, g.margin + g.border_width, y), BACKGROUND);
            assert_eq!(pixel(&img, g.margin - 1, y), BACKGROUND);
            assert_eq!(pixel(&img, 0, 0), BACKGROUND);
        }
    }

    #[test]
    fn test_cross_pixels() {
        for size in [16, 48, 128] {
            let g = IconGeometry::for_size(size);
            let img = PngIconRenderer::default().draw(size).unwrap().into_image();

            assert_eq!(pixel(&img, g.center + g.cross_half, g.center), CROSS);
            assert_eq!(pixel(&img, g.center - g.cross_half, g.center), CROSS);
            assert_eq!(pixel(&img, g.center, g.center + g.cross_half), CROSS);
            assert_eq!(pixel(&img, g.center, g.center), CROSS);
            assert_eq!(pixel(&img, g.center + g.cross_half + 1, g.center), BACKGROUND);
            assert_eq!(
                pixel(&img, g.center + g.cross_half, g.center + g.cross_half),
                BACKGROUND
            );
        }
    }

    #[test]
    fn test_wide_cross_128() {
        let img = PngIconRenderer::default().draw(128).unwrap().into_image();
        // width 3 covers rows 63..=65
        assert_eq!(pixel(&img, 50, 63), CROSS);
        assert_eq!(pixel(&img, 50, 65), CROSS);
        assert_eq!(pixel(&img, 50, 62), BACKGROUND);
        assert_eq!(pixel(&img, 50, 66), BACKGROUND);
    }

    #[test]
    fn test_tiny_icon_clips_border() {
        // margin is 0, so the far edges of the border land off-canvas
        let img = PngIconRenderer::default().draw(7).unwrap().into_image();
        assert_eq!(pixel(&img, 0, 3), BORDER);
        assert_eq!(pixel(&img, 3, 0), BORDER);
        assert_eq!(pixel(&img, 6, 2), BACKGROUND);
        assert_eq!(pixel(&img, 2, 6), BACKGROUND);
        assert_eq!(pixel(&img, 3, 3), CROSS);
    }

    #[test]
    fn test_render_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon48.png");
        let renderer = PngIconRenderer::default();

        renderer.render(48, &path).unwrap();
        let first = fs::read(&path).unwrap();
        let rendered = renderer.render(48, &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(rendered.bytes, second.len());
    }

    #[test]
    fn test_custom_style() {
        let style = IconStyle {
            background: Color::rgb(0, 0, 0),
            ..IconStyle::default()
        };
        let img = PngIconRenderer::new(style).draw(16).unwrap().into_image();
        assert_eq!(pixel(&img, 0, 0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = PngIconRenderer::default().draw(0).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize(0)));
        let err = PngIconRenderer::default().draw(MAX_ICON_SIZE + 1).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize(_)));
    }

    #[test]
    fn test_missing_parent_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon16.png");
        let err = PngIconRenderer::default().render(16, &path).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_rendered_icon_message() {
        let icon = RenderedIcon {
            path: PathBuf::from("icons/icon16.png"),
            size: 16,
            bytes: 100,
        };
        assert_eq!(icon.to_string(), "Generated icons/icon16.png (16x16)");
    }
}
