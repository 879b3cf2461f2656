use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::geometry::Geometry;
use crate::matrix::ModuleMatrix;
use crate::zone::{ZoneMap, ZonePalette};

// Corner decisions
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Clockwise from the top left, matching the order of the decision arrays
/// below.
pub const CORNERS: [Corner; 4] = [
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomRight,
    Corner::BottomLeft,
];

/// For a dark module, decides per corner whether it is rounded: a corner is
/// rounded iff neither of the two orthogonal neighbors sharing it nor the
/// diagonal neighbor at it is dark. Out of bounds neighbors read as light.
pub fn rounded_corners(m: &ModuleMatrix, x: i16, y: i16) -> [bool; 4] {
    let l = m.is_dark(x - 1, y);
    let t = m.is_dark(x, y - 1);
    let r = m.is_dark(x + 1, y);
    let b = m.is_dark(x, y + 1);
    [
        !(t || l || m.is_dark(x - 1, y - 1)),
        !(t || r || m.is_dark(x + 1, y - 1)),
        !(b || r || m.is_dark(x + 1, y + 1)),
        !(b || l || m.is_dark(x - 1, y + 1)),
    ]
}

/// For a light module, decides per corner whether it receives a notch fill:
/// the corner's two orthogonal neighbors must both be dark, so that the
/// rounded squares on either side appear to flow into each other.
pub fn notch_corners(m: &ModuleMatrix, x: i16, y: i16) -> [bool; 4] {
    let l = m.is_dark(x - 1, y);
    let t = m.is_dark(x, y - 1);
    let r = m.is_dark(x + 1, y);
    let b = m.is_dark(x, y + 1);
    [t && l, t && r, b && r, b && l]
}

// Rasterizer
//------------------------------------------------------------------------------

/// Walks the matrix in row-major order and paints every module onto a fresh
/// RGBA canvas. The canvas is the only thing mutated; one canvas per call.
pub struct Rasterizer<'a> {
    matrix: &'a ModuleMatrix,
    zones: ZoneMap,
    geo: Geometry,
    palette: &'a ZonePalette,
    foreground: Rgba<u8>,
    background: Rgba<u8>,
}

impl<'a> Rasterizer<'a> {
    pub fn new(
        matrix: &'a ModuleMatrix,
        zones: ZoneMap,
        geo: Geometry,
        palette: &'a ZonePalette,
        foreground: Rgba<u8>,
        background: Rgba<u8>,
    ) -> Self {
        Self { matrix, zones, geo, palette, foreground, background }
    }

    pub fn draw(&self) -> RgbaImage {
        let Geometry { width, height, cell, left, top, radius } = self.geo;
        let mut canvas = RgbaImage::from_pixel(width, height, self.background);

        let n = self.matrix.width() as i16;
        for y in 0..n {
            for x in 0..n {
                let cx = left + x as u32 * cell;
                let cy = top + y as u32 * cell;
                if self.matrix.is_dark(x, y) {
                    let color = self.palette.color(self.zones.classify(x, y), self.foreground);
                    draw_filled_rect_mut(
                        &mut canvas,
                        Rect::at(cx as i32, cy as i32).of_size(cell, cell),
                        color,
                    );
                    // carve rounded corners back to background; a rounded
                    // corner implies all touching neighbors are light, so no
                    // notch can land on the carved pixels
                    for (corner, rounded) in CORNERS.into_iter().zip(rounded_corners(self.matrix, x, y)) {
                        if rounded {
                            fill_corner_wedge(&mut canvas, corner, cx, cy, cell, radius, self.background);
                        }
                    }
                } else {
                    for (corner, notch) in CORNERS.into_iter().zip(notch_corners(self.matrix, x, y)) {
                        if notch {
                            fill_corner_wedge(&mut canvas, corner, cx, cy, cell, radius, self.foreground);
                        }
                    }
                }
            }
        }
        canvas
    }
}

/// Fills the L-shaped wedge left between a cell corner and the quarter disc
/// of `radius` bulging toward the cell interior. Painting it with the
/// background color carves a rounded corner out of a dark module; painting it
/// with the foreground color lays a notch onto a light module.
///
/// Pixels are sampled at their centers against the disc boundary; the disc
/// itself is untouched. `radius` never exceeds `cell / 2`, so wedges at
/// different corners of one cell cannot overlap.
fn fill_corner_wedge(
    canvas: &mut RgbaImage,
    corner: Corner,
    cx: u32,
    cy: u32,
    cell: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    if radius == 0 {
        return;
    }
    // cell-local origin of the corner square and the disc center
    let (sx, sy) = match corner {
        Corner::TopLeft => (0, 0),
        Corner::TopRight => (cell - radius, 0),
        Corner::BottomRight => (cell - radius, cell - radius),
        Corner::BottomLeft => (0, cell - radius),
    };
    let (ax, ay) = match corner {
        Corner::TopLeft => (radius, radius),
        Corner::TopRight => (cell - radius, radius),
        Corner::BottomRight => (cell - radius, cell - radius),
        Corner::BottomLeft => (radius, cell - radius),
    };
    let r2 = (radius * radius) as f32;
    for py in sy..sy + radius {
        for px in sx..sx + radius {
            let dx = px as f32 + 0.5 - ax as f32;
            let dy = py as f32 + 0.5 - ay as f32;
            if dx * dx + dy * dy > r2 {
                canvas.put_pixel(cx + px, cy + py, color);
            }
        }
    }
}
