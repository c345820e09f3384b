//! Character ROM
//!
//! Handles:
//! - Glyph storage (128 cells of 16x32 4-bit intensities)
//! - Hex text export for the hardware build

pub mod export;
pub mod store;

pub use export::write_rom;
pub use store::{Glyph, GlyphIndex, GlyphStore};
