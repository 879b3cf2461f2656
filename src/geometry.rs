use crate::error::{RenderError, RenderResult};

// Geometry planner
//------------------------------------------------------------------------------

/// Pixel-space layout for one render: canvas dimensions, uniform cell size,
/// grid origin and corner radius. Immutable once planned.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub cell: u32,
    pub left: u32,
    pub top: u32,
    pub radius: u32,
}

impl Geometry {
    /// Plans the layout for an `n` module symbol rendered at roughly `side`
    /// pixels with at least `padding` pixels of margin.
    ///
    /// The canvas never shrinks below one pixel per module. A non-zero
    /// `padding` is raised to the natural margin `side / (n + 2)` and the
    /// grid is centered; `padding == 0` disables the margin entirely and the
    /// canvas is cropped to exactly `cell * n` per axis, which trades scan
    /// reliability for a tight fit.
    pub fn plan(n: u32, side: u32, padding: u32, roundness: f32) -> RenderResult<Self> {
        debug_assert!(n > 0, "empty matrix");

        let output = n.max(side);
        let natural = output / (n + 2);
        let pad = if padding > 0 { padding.max(natural) } else { 0 };

        if output <= 2 * pad {
            return Err(RenderError::CellTooSmall { side, padding, modules: n });
        }
        let cell = (output - 2 * pad) / n;
        if cell == 0 {
            return Err(RenderError::CellTooSmall { side, padding, modules: n });
        }

        let (width, left) = if pad > 0 { (output, (output - cell * n) / 2) } else { (cell * n, 0) };
        let radius = ((cell / 2) as f32 * roundness.clamp(0.0, 1.0)) as u32;

        Ok(Self { width, height: width, cell, left, top: left, radius })
    }
}
