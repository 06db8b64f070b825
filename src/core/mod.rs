//! Core data models: colors, icon geometry and errors

mod color;
mod error;
mod geometry;

pub use color::*;
pub use error::*;
pub use geometry::*;
