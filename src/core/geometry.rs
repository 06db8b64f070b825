//! Icon geometry - every coordinate the renderer needs, derived from the size
//!
//! All values use integer division so a given size always produces the
//! same layout.

/// Layout of the border and cross for a square icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    /// Edge length in pixels
    pub size: u32,
    /// Inset of the border rectangle from each edge (size / 8)
    pub margin: u32,
    /// Border stroke width, at least 1 (size / 20)
    pub border_width: u32,
    /// Cross center on both axes (size / 2)
    pub center: u32,
    /// Length of each cross arm from the center (size / 8)
    pub cross_half: u32,
    /// Cross stroke width, at least 1 (size / 40)
    pub cross_width: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            margin: size / 8,
            border_width: (size / 20).max(1),
            center: size / 2,
            cross_half: size / 8,
            cross_width: (size / 40).max(1),
        }
    }

    /// Border rectangle as inclusive `(x0, y0, x1, y1)`.
    ///
    /// The far corner sits at `size - margin`, which is one past the last
    /// pixel when the margin is zero.
    pub fn border_rect(&self) -> (u32, u32, u32, u32) {
        let far = self.size - self.margin;
        (self.margin, self.margin, far, far)
    }

    /// Horizontal arm endpoints `(x0, x1, y)`
    pub fn cross_horizontal(&self) -> (u32, u32, u32) {
        (
            self.center.saturating_sub(self.cross_half),
            self.center + self.cross_half,
            self.center,
        )
    }

    /// Vertical arm endpoints `(x, y0, y1)`
    pub fn cross_vertical(&self) -> (u32, u32, u32) {
        (
            self.center,
            self.center.saturating_sub(self.cross_half),
            self.center + self.cross_half,
        )
    }
}
