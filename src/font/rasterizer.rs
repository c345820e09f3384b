//! Glyph rasterizer
//!
//! Drives an outline rasterizer over the printable codes and quantizes
//! its 8-bit coverage into 4-bit ROM intensities.

use log::{debug, info, warn};

use crate::config::RomConfig;
use crate::rom::{Glyph, GlyphIndex, GlyphStore};

/// Grayscale coverage bitmap produced by an outline rasterizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageBitmap {
    /// Coverage, row-major, `width * height` bytes (0 = empty, 255 = covered)
    pub coverage: Vec<u8>,
    /// Bitmap width (pixels)
    pub width: u32,
    /// Bitmap height (pixels)
    pub height: u32,
    /// Horizontal offset of the left edge from the pen position
    pub left: i32,
    /// Distance from the baseline up to the top row
    pub top: i32,
}

/// Capability to render a character code into a coverage bitmap.
///
/// Returns `None` when the font has no glyph for `code` or rendering
/// fails; the caller leaves that slot blank.
pub trait OutlineRasterizer {
    fn render(&mut self, code: u8, config: &RomConfig) -> Option<CoverageBitmap>;
}

/// 8-bit coverage to 4-bit intensity (truncating, never rounds up)
#[inline]
pub fn quantize(coverage: u8) -> u8 {
    coverage >> 4
}

/// Copy a bitmap into a glyph with its top-left at (row, col), clipping
pub fn blit_coverage(glyph: &mut Glyph, bitmap: &CoverageBitmap, row: i32, col: i32) {
    let width = bitmap.width as usize;
    let lines = bitmap.coverage.chunks(width.max(1)).take(bitmap.height as usize);
    for (q, line) in lines.enumerate() {
        for (p, &value) in line.iter().enumerate() {
            glyph.put(row + q as i32, col + p as i32, quantize(value));
        }
    }
}

/// Rasterize summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub rendered: usize,
    pub skipped: usize,
}

/// Render every configured code from the font into the store
pub fn rasterize_font<R: OutlineRasterizer + ?Sized>(
    font: &mut R,
    config: &RomConfig,
    store: &mut GlyphStore,
) -> RasterStats {
    let mut stats = RasterStats::default();

    for code in config.codes() {
        let Some(bitmap) = font.render(code, config) else {
            debug!("No glyph for {:#04x}, leaving blank", code);
            stats.skipped += 1;
            continue;
        };

        let glyph = match GlyphIndex::try_from(u32::from(code)) {
            Ok(index) => store.glyph_mut(index),
            Err(e) => {
                warn!("{}", e);
                stats.skipped += 1;
                continue;
            }
        };
        blit_coverage(glyph, &bitmap, config.baseline_row - bitmap.top, bitmap.left);
        stats.rendered += 1;
    }

    info!(
        "Rasterized {} glyphs ({} skipped)",
        stats.rendered, stats.skipped
    );
    stats
}
