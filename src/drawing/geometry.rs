//! Integer geometry for procedurally drawn glyphs
//!
//! All arithmetic is exact integer math so the ROM is bit-for-bit
//! reproducible across hosts.

use crate::constants::MAX_INTENSITY;

/// Radius of the rounded-corner disc (pixels)
pub const CORNER_RADIUS: i32 = 0x20;

/// Sub-samples per pixel along each axis
pub const SUBSAMPLES: i32 = 4;

/// Coverage of pixel (x, y) by the disc of `CORNER_RADIUS` centred at the origin.
///
/// Pixels fully inside the disc are 15, pixels fully outside are 0.
/// Edge pixels count the 4x4 sub-sample points strictly inside the
/// circle, saturating at 15.
///
/// # Arguments
/// * `x`, `y` - Pixel offsets from the disc centre, both >= 0
pub fn quarter_disc_coverage(x: i32, y: i32) -> u8 {
    let r2 = CORNER_RADIUS * CORNER_RADIUS;

    // Outer corner strictly inside: fully covered
    if (x + 1) * (x + 1) + (y + 1) * (y + 1) < r2 {
        return MAX_INTENSITY;
    }
    // Inner corner on or outside: empty
    if x * x + y * y >= r2 {
        return 0;
    }

    let scaled_r2 = r2 * SUBSAMPLES * SUBSAMPLES;
    let mut fill = 0u8;
    for dx in 0..SUBSAMPLES {
        for dy in 0..SUBSAMPLES {
            let sx = x * SUBSAMPLES + dx;
            let sy = y * SUBSAMPLES + dy;
            if sx * sx + sy * sy < scaled_r2 {
                fill += 1;
            }
        }
    }
    fill.min(MAX_INTENSITY)
}
