//! screencut-icons - placeholder icon generator for the ScreenCut browser extension
//!
//! Draws a blue tile with a white border and a translucent cross at each
//! size the extension manifest needs, and writes the results as PNG files.

pub mod canvas;
pub mod core;
pub mod driver;
pub mod render;

pub use crate::core::{Color, IconError, IconGeometry, IconStyle};
pub use driver::{exit_codes, generate_icons, icon_path, GeneratorConfig};
pub use render::{IconRenderer, PngIconRenderer, RenderedIcon};
