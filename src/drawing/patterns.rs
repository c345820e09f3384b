//! Test pattern and gradient glyphs

use crate::constants::{CELL_HEIGHT, CELL_WIDTH, GLYPH_GRADIENT, GLYPH_TEST_PATTERN, MAX_INTENSITY};
use crate::rom::{GlyphIndex, GlyphStore};

/// Single-pixel diagonal where column == row (rows 16+ stay dark)
pub fn draw_test_pattern(store: &mut GlyphStore) {
    let glyph = store.glyph_mut(GlyphIndex::from_code(GLYPH_TEST_PATTERN));
    for row in 0..CELL_HEIGHT as i32 {
        for col in 0..CELL_WIDTH as i32 {
            glyph.put(row, col, if row == col { MAX_INTENSITY } else { 0 });
        }
    }
}

/// 16-step ramp, dark at the top, each step two rows tall
pub fn draw_gradient(store: &mut GlyphStore) {
    let glyph = store.glyph_mut(GlyphIndex::from_code(GLYPH_GRADIENT));
    for row in 0..CELL_HEIGHT as i32 {
        for col in 0..CELL_WIDTH as i32 {
            glyph.put(row, col, (row >> 1) as u8);
        }
    }
}
