//! Glyph store
//!
//! Fixed table of 128 glyph cells. Every slot exists from construction
//! and starts blank; producers write into disjoint slots, the exporter
//! reads the finished table.

#![allow(dead_code)]

use crate::constants::{CELL_HEIGHT, CELL_WIDTH, GLYPH_COUNT, MAX_INTENSITY};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Errors raised by ROM table construction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RomError {
    #[error("glyph index {0:#x} out of range (must be < 0x80)")]
    GlyphIndexOutOfRange(u32),
}

/// Slot in the character ROM (always < 0x80)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphIndex(u8);

impl GlyphIndex {
    /// Build an index from a known-good code.
    ///
    /// Panics on codes above 0x7F (a compile error in const context).
    pub const fn from_code(code: u8) -> Self {
        assert!((code as usize) < GLYPH_COUNT, "glyph code out of range");
        Self(code)
    }

    /// Iterate all 128 slots in ROM order
    pub fn all() -> impl Iterator<Item = GlyphIndex> {
        (0..GLYPH_COUNT as u8).map(GlyphIndex)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for GlyphIndex {
    type Error = RomError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (value as usize) < GLYPH_COUNT {
            Ok(Self(value as u8))
        } else {
            Err(RomError::GlyphIndexOutOfRange(value))
        }
    }
}

impl TryFrom<char> for GlyphIndex {
    type Error = RomError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::try_from(ch as u32)
    }
}

/// One 16x32 glyph cell, row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    cells: [[u8; CELL_WIDTH]; CELL_HEIGHT],
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            cells: [[0; CELL_WIDTH]; CELL_HEIGHT],
        }
    }
}

impl Glyph {
    /// Intensity at (row, col). Panics on out-of-cell coordinates.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Write an intensity, clipping anything outside the cell.
    ///
    /// Values above 15 saturate so the 4-bit invariant always holds.
    pub fn put(&mut self, row: i32, col: i32, intensity: u8) {
        if row < 0 || col < 0 || row >= CELL_HEIGHT as i32 || col >= CELL_WIDTH as i32 {
            return;
        }
        self.cells[row as usize][col as usize] = intensity.min(MAX_INTENSITY);
    }

    /// Fill an inclusive rectangle with one intensity
    pub fn fill_rect(&mut self, rows: RangeInclusive<i32>, cols: RangeInclusive<i32>, intensity: u8) {
        for row in rows {
            for col in cols.clone() {
                self.put(row, col, intensity);
            }
        }
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8; CELL_WIDTH]> {
        self.cells.iter()
    }

    /// True when every cell is zero
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0)
    }
}

/// The full 128-glyph table
#[derive(Debug, Clone)]
pub struct GlyphStore {
    glyphs: Vec<Glyph>,
}

impl Default for GlyphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphStore {
    /// All slots allocated and blank
    pub fn new() -> Self {
        Self {
            glyphs: vec![Glyph::default(); GLYPH_COUNT],
        }
    }

    pub fn glyph(&self, index: GlyphIndex) -> &Glyph {
        &self.glyphs[index.0 as usize]
    }

    pub fn glyph_mut(&mut self, index: GlyphIndex) -> &mut Glyph {
        &mut self.glyphs[index.0 as usize]
    }

    /// Glyphs in ROM order
    pub fn iter(&self) -> impl Iterator<Item = (GlyphIndex, &Glyph)> {
        GlyphIndex::all().zip(self.glyphs.iter())
    }
}
