use image::Rgba;

use crate::matrix::ModuleMatrix;

// Color zones
//------------------------------------------------------------------------------

/// Classification of a dark module by the symbol region it falls in.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Zone {
    TopLeftFinderOuter,
    TopLeftFinderInner,
    BottomLeftFinder,
    TopRightFinderOuter,
    TopRightFinderInner,
    AlignmentHalo,
    Foreground,
}

/// Zone to accent color mapping. `Zone::Foreground` always resolves to the
/// caller's foreground color and has no entry here.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ZonePalette {
    pub top_left_outer: Rgba<u8>,
    pub top_left_inner: Rgba<u8>,
    pub bottom_left: Rgba<u8>,
    pub top_right_outer: Rgba<u8>,
    pub top_right_inner: Rgba<u8>,
    pub alignment_halo: Rgba<u8>,
}

const SKY: Rgba<u8> = Rgba([0x00, 0xA5, 0xFF, 0xFF]);
const EMBER: Rgba<u8> = Rgba([0xFF, 0x6B, 0x36, 0xFF]);
const OXBLOOD: Rgba<u8> = Rgba([0xAC, 0x0D, 0x00, 0xFF]);

impl Default for ZonePalette {
    fn default() -> Self {
        Self {
            top_left_outer: SKY,
            top_left_inner: EMBER,
            bottom_left: EMBER,
            top_right_outer: OXBLOOD,
            top_right_inner: EMBER,
            alignment_halo: SKY,
        }
    }
}

impl ZonePalette {
    pub fn color(&self, zone: Zone, foreground: Rgba<u8>) -> Rgba<u8> {
        match zone {
            Zone::TopLeftFinderOuter => self.top_left_outer,
            Zone::TopLeftFinderInner => self.top_left_inner,
            Zone::BottomLeftFinder => self.bottom_left,
            Zone::TopRightFinderOuter => self.top_right_outer,
            Zone::TopRightFinderInner => self.top_right_inner,
            Zone::AlignmentHalo => self.alignment_halo,
            Zone::Foreground => foreground,
        }
    }
}

// Zone classifier
//------------------------------------------------------------------------------

/// Per-render classification parameters, derived once from the matrix and the
/// alignment pattern positions. Classification itself is a pure function of
/// module position.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ZoneMap {
    n: i16,
    offset: i16,
    detect_corner: i16,
    halo: Option<(i16, i16)>,
}

impl ZoneMap {
    pub fn new(matrix: &ModuleMatrix, positions: &[i16]) -> Self {
        let n = matrix.width() as i16;
        let block = n / 7;
        // floor(block * 1.8)
        let offset = block * 9 / 5;
        // outer finder ring thickness varies by a one-module visual convention
        let detect_corner = if matrix.is_dark(0, 5) { 7 } else { 5 };
        // version 1 symbols have a degenerate single locator entry; the halo
        // needs the first two, so it is disabled for them
        let halo = match positions {
            [x, y, ..] => Some((*x, *y)),
            _ => None,
        };
        Self { n, offset, detect_corner, halo }
    }

    /// Classifies the dark module at `(x, y)`.
    pub fn classify(&self, x: i16, y: i16) -> Zone {
        let (n, offset) = (self.n, self.offset);
        if x < offset && y < offset {
            if self.in_outer_ring(x, y) {
                Zone::TopLeftFinderOuter
            } else {
                Zone::TopLeftFinderInner
            }
        } else if x < offset && y >= n - offset {
            // the bottom left finder keeps a single flat accent
            Zone::BottomLeftFinder
        } else if x >= n - offset && y < offset {
            if self.in_outer_ring(x, y) {
                Zone::TopRightFinderOuter
            } else {
                Zone::TopRightFinderInner
            }
        } else {
            match self.halo {
                Some((ax, ay)) if (ax - 2..=ax + 2).contains(&x) && (ay - 1..=ay + 3).contains(&y) => {
                    Zone::AlignmentHalo
                }
                _ => Zone::Foreground,
            }
        }
    }

    /// Whether `(x, y)` lies on the boundary row/column of a finder bounding
    /// box. Only meaningful for modules already inside a finder region.
    fn in_outer_ring(&self, x: i16, y: i16) -> bool {
        let (n, d) = (self.n, self.detect_corner);
        x == 0
            || x == d - 1
            || x == n - 1
            || x == n - d
            || y == 0
            || y == d - 1
            || y == n - 1
            || y == n - d
    }
}
