use image::{Rgba, RgbaImage};

use crate::alignment::pattern_positions;
use crate::error::RenderResult;
use crate::geometry::Geometry;
use crate::raster::Rasterizer;
use crate::symbol;
use crate::zone::{ZoneMap, ZonePalette};

// Renderer
//------------------------------------------------------------------------------

/// Stateless rendering service: configured once, then shared freely. Every
/// call allocates its own matrix, geometry and canvas, so a single value can
/// serve concurrent callers through a shared reference.
#[derive(Debug, PartialEq, Clone)]
pub struct QrRenderer {
    roundness: f32,
    side: u32,
    padding: u32,
    foreground: Rgba<u8>,
    background: Rgba<u8>,
    palette: ZonePalette,
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRenderer {
    pub fn new() -> Self {
        Self {
            roundness: 0.85,
            side: 256,
            padding: 1,
            foreground: Rgba([0x00, 0x00, 0x00, 0xFF]),
            background: Rgba([0xFF, 0xFF, 0xFF, 0xFF]),
            palette: ZonePalette::default(),
        }
    }

    /// Corner rounding ratio in `[0, 1]`; 0 keeps sharp squares, 1 rounds up
    /// to half the cell size. Values outside the range are clamped.
    pub fn roundness(&mut self, roundness: f32) -> &mut Self {
        self.roundness = roundness;
        self
    }

    /// Requested square side in pixels. The canvas never shrinks below one
    /// pixel per module.
    pub fn side(&mut self, side: u32) -> &mut Self {
        self.side = side;
        self
    }

    /// Minimum margin in pixels. 0 disables the margin entirely, which slows
    /// down scanners; non-zero values are raised to the natural margin.
    pub fn padding(&mut self, padding: u32) -> &mut Self {
        self.padding = padding;
        self
    }

    pub fn foreground(&mut self, color: Rgba<u8>) -> &mut Self {
        self.foreground = color;
        self
    }

    pub fn background(&mut self, color: Rgba<u8>) -> &mut Self {
        self.background = color;
        self
    }

    pub fn palette(&mut self, palette: ZonePalette) -> &mut Self {
        self.palette = palette;
        self
    }

    /// Renders `content` as a styled QR symbol.
    ///
    /// Fails with [`RenderError::Encoding`](crate::RenderError::Encoding) if
    /// the content does not fit a version 40 symbol at error correction level
    /// H, and with [`RenderError::CellTooSmall`](crate::RenderError::CellTooSmall)
    /// if side and padding leave less than one pixel per module.
    pub fn render(&self, content: &str) -> RenderResult<RgbaImage> {
        let (matrix, version) = symbol::encode(content)?;
        let positions = pattern_positions(version);
        let geo = Geometry::plan(matrix.width() as u32, self.side, self.padding, self.roundness)?;
        let zones = ZoneMap::new(&matrix, &positions);
        let raster =
            Rasterizer::new(&matrix, zones, geo, &self.palette, self.foreground, self.background);
        Ok(raster.draw())
    }
}
