//! # qurve
//!
//! Styled QR code rendering: dark modules become rounded squares whose
//! corners round or stay sharp depending on neighboring dark modules, finder
//! and alignment patterns get tinted with configurable accent colors, and
//! light modules between diagonally touching dark ones receive small notch
//! fills so the squares appear to flow into each other. The result is a
//! "squircle" look that scanners still read.
//!
//! Symbol encoding is delegated to the [`qrcode`] crate at error correction
//! level H; this crate owns everything from the module matrix to the pixels.
//!
//! ## Quick start
//!
//! ```rust
//! use qurve::QrRenderer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut renderer = QrRenderer::new();
//! renderer.roundness(0.85).side(256).padding(1);
//!
//! let img = renderer.render("https://github.com/MALTF")?;
//! assert_eq!((img.width(), img.height()), (256, 256));
//! # Ok(())
//! # }
//! ```
//!
//! The renderer is stateless: configure one value at startup and hand out
//! shared references; every call allocates its own canvas.

pub mod alignment;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod raster;
pub mod renderer;
pub mod symbol;
pub mod zone;

pub use error::{RenderError, RenderResult};
pub use geometry::Geometry;
pub use matrix::ModuleMatrix;
pub use renderer::QrRenderer;
pub use zone::{Zone, ZonePalette};
