//! The render pass: map, transform and colour every pixel of a frame.

use std::time::Instant;

use crate::color::{Colorizer, Rgba8};
use crate::coords::Mapping;
use crate::error::RenderError;
use crate::field::FieldFunction;

pub const BYTES_PER_PIXEL: usize = 4;

/// Which strategies a render pass composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub mapping: Mapping,
    pub field: FieldFunction,
    pub colorizer: Colorizer,
}

impl RenderConfig {
    /// Colour of pixel `(px, py)` in a `width`×`height` frame.
    pub fn shade(&self, px: u32, py: u32, width: u32, height: u32) -> Rgba8 {
        let point = self.mapping.map(px, py, width, height);
        let value = self.field.apply(point);
        self.colorizer.colorize(value).to_rgba8()
    }
}

/// An owned RGBA8 frame, row-major with the origin at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let len = frame_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, px: u32, py: u32) -> Option<Rgba8> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let index = (py as usize * self.width as usize + px as usize) * BYTES_PER_PIXEL;
        let bytes = &self.data[index..index + BYTES_PER_PIXEL];
        Some(*bytemuck::from_bytes(bytes))
    }
}

/// Byte length of a `width`×`height` RGBA8 frame.
pub fn frame_len(width: u32, height: u32) -> Result<usize, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyFrame { width, height });
    }
    Ok(width as usize * height as usize * BYTES_PER_PIXEL)
}

/// Renders a fresh frame.
pub fn render(config: &RenderConfig, width: u32, height: u32) -> Result<PixelBuffer, RenderError> {
    let mut buffer = PixelBuffer::new(width, height)?;
    render_into(config, width, height, &mut buffer.data)?;
    Ok(buffer)
}

/// Renders into an existing RGBA8 frame, e.g. the one a surface hands out.
///
/// Every pixel is written exactly once, row by row. The frame must be
/// exactly `width * height * 4` bytes.
pub fn render_into(
    config: &RenderConfig,
    width: u32,
    height: u32,
    frame: &mut [u8],
) -> Result<(), RenderError> {
    let expected = frame_len(width, height)?;
    if frame.len() != expected {
        return Err(RenderError::FrameSize {
            expected,
            actual: frame.len(),
        });
    }

    log::info!(
        "rendering {}x{} (mapping={}, field={}, colorizer={})",
        width,
        height,
        config.mapping,
        config.field,
        config.colorizer
    );
    let start = Instant::now();

    let pixels: &mut [Rgba8] = bytemuck::cast_slice_mut(frame);
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let px = (i % width as usize) as u32;
        let py = (i / width as usize) as u32;
        *pixel = config.shade(px, py, width, height);
    }

    log::debug!("rendered in {:?}", start.elapsed());
    Ok(())
}
