//! Procedural image renderer.
//!
//! Every pixel is mapped to a normalized coordinate, pushed through a
//! [`FieldFunction`] and coloured by a [`Colorizer`]. The result is an
//! RGBA8 frame ready to hand to a raster surface.

pub mod color;
pub mod complex;
pub mod config;
pub mod coords;
pub mod error;
pub mod field;
pub mod render;

pub use color::{Colorizer, Falloff, Hsv, Rgb, Rgba, Rgba8};
pub use coords::{Mapping, Point2D, PolarPoint};
pub use error::{ConfigError, RenderError};
pub use field::FieldFunction;
pub use render::{render, render_into, PixelBuffer, RenderConfig};
