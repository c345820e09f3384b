//! Font rasterization
//!
//! Handles:
//! - TTF/OTF font loading (freetype)
//! - Coverage quantization into 4-bit ROM intensities
//! - Placement and clipping into the fixed glyph cell

pub mod freetype;
pub mod rasterizer;

pub use freetype::FtFont;
pub use rasterizer::{rasterize_font, OutlineRasterizer};
