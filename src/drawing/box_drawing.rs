//! Box drawing glyphs
//!
//! Lines, corners, tees and the cross are unions of four arms radiating
//! from the 2x2 centre block (rows 15-16, columns 7-8). Arms overlap the
//! centre block so every junction joins without gaps.

use std::ops::RangeInclusive;

use crate::constants::{
    GLYPH_BOX_CROSS, GLYPH_BOX_DOT, GLYPH_BOX_DOWN_LEFT, GLYPH_BOX_DOWN_RIGHT,
    GLYPH_BOX_HORIZONTAL, GLYPH_BOX_TEE_DOWN, GLYPH_BOX_TEE_LEFT, GLYPH_BOX_TEE_RIGHT,
    GLYPH_BOX_TEE_UP, GLYPH_BOX_UP_LEFT, GLYPH_BOX_UP_RIGHT, GLYPH_BOX_VERTICAL, MAX_INTENSITY,
};
use crate::rom::{Glyph, GlyphIndex, GlyphStore};

/// Centre block rows
const CENTRE_ROWS: RangeInclusive<i32> = 0x0F..=0x10;
/// Centre block columns
const CENTRE_COLS: RangeInclusive<i32> = 0x07..=0x08;

/// One arm of a box drawing glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arm {
    Up,
    Down,
    Left,
    Right,
}

impl Arm {
    /// Inclusive (rows, cols) covered by this arm
    pub fn rect(self) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
        match self {
            Self::Up => (0x00..=0x10, CENTRE_COLS),
            Self::Down => (0x0F..=0x1F, CENTRE_COLS),
            Self::Left => (CENTRE_ROWS, 0x00..=0x08),
            Self::Right => (CENTRE_ROWS, 0x07..=0x0F),
        }
    }
}

/// Glyph slot and the arms it is built from
pub const BOX_GLYPHS: [(u8, &[Arm]); 11] = [
    (GLYPH_BOX_UP_LEFT, &[Arm::Up, Arm::Left]),
    (GLYPH_BOX_DOWN_LEFT, &[Arm::Down, Arm::Left]),
    (GLYPH_BOX_DOWN_RIGHT, &[Arm::Down, Arm::Right]),
    (GLYPH_BOX_UP_RIGHT, &[Arm::Up, Arm::Right]),
    (GLYPH_BOX_CROSS, &[Arm::Up, Arm::Down, Arm::Left, Arm::Right]),
    (GLYPH_BOX_HORIZONTAL, &[Arm::Left, Arm::Right]),
    (GLYPH_BOX_TEE_RIGHT, &[Arm::Up, Arm::Down, Arm::Right]),
    (GLYPH_BOX_TEE_LEFT, &[Arm::Up, Arm::Down, Arm::Left]),
    (GLYPH_BOX_TEE_UP, &[Arm::Up, Arm::Left, Arm::Right]),
    (GLYPH_BOX_TEE_DOWN, &[Arm::Down, Arm::Left, Arm::Right]),
    (GLYPH_BOX_VERTICAL, &[Arm::Up, Arm::Down]),
];

fn draw_arms(glyph: &mut Glyph, arms: &[Arm]) {
    for &arm in arms {
        let (rows, cols) = arm.rect();
        glyph.fill_rect(rows, cols, MAX_INTENSITY);
    }
}

/// Draw the line, corner, tee, cross and dot glyphs
pub fn draw_box_glyphs(store: &mut GlyphStore) {
    for (code, arms) in BOX_GLYPHS {
        draw_arms(store.glyph_mut(GlyphIndex::from_code(code)), arms);
    }

    store
        .glyph_mut(GlyphIndex::from_code(GLYPH_BOX_DOT))
        .fill_rect(CENTRE_ROWS, CENTRE_COLS, MAX_INTENSITY);
}
