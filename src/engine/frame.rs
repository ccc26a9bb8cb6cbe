use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};

/// RGBA8 pixels of one rendered subplot, row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub viewport: Viewport,
    pub pixels: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(viewport: Viewport, pixels: Vec<u8>) -> Self {
        Self { viewport, pixels }
    }

    #[must_use]
    pub fn filled(viewport: Viewport, rgba: [u8; 4]) -> Self {
        let count = viewport.width as usize * viewport.height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self { viewport, pixels }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let expected = self.viewport.width as usize * self.viewport.height as usize * 4;
        if self.pixels.len() != expected {
            return Err(PlotError::value(format!(
                "frame buffer holds {} bytes, expected {expected} for {}x{} RGBA",
                self.pixels.len(),
                self.viewport.width,
                self.viewport.height
            )));
        }
        Ok(())
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        let offset = (y as usize * self.viewport.width as usize + x as usize) * 4;
        let bytes = self.pixels.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
