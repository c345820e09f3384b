//! Rounded corner glyphs
//!
//! Each corner is a 32x32 quarter disc spread over two horizontally
//! adjacent glyphs. The disc centre sits on the cell edge facing the
//! inside of the box, so a pair placed at a box corner rounds it off.

use crate::constants::{
    CELL_HEIGHT, CELL_WIDTH, GLYPH_CORNER_NE, GLYPH_CORNER_NW, GLYPH_CORNER_SE, GLYPH_CORNER_SW,
};
use crate::rom::{GlyphIndex, GlyphStore};

use super::geometry::{quarter_disc_coverage, CORNER_RADIUS};

/// Which corner of a box a glyph pair rounds off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthWest,
        Corner::SouthEast,
    ];

    /// Glyph slots (left, right)
    pub fn glyphs(self) -> (u8, u8) {
        match self {
            Self::NorthWest => GLYPH_CORNER_NW,
            Self::NorthEast => GLYPH_CORNER_NE,
            Self::SouthWest => GLYPH_CORNER_SW,
            Self::SouthEast => GLYPH_CORNER_SE,
        }
    }

    /// Disc centre lies on the right edge of the pair
    fn centre_right(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    /// Disc centre lies on the bottom edge of the pair
    fn centre_bottom(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    /// Map a disc offset (dx, dy) to (glyph code, row, col)
    pub fn place(self, dx: usize, dy: usize) -> (u8, usize, usize) {
        let (left, right) = self.glyphs();
        let near = dx < CELL_WIDTH;
        let col_in_half = dx % CELL_WIDTH;

        let (code, col) = if self.centre_right() {
            (if near { right } else { left }, CELL_WIDTH - 1 - col_in_half)
        } else {
            (if near { left } else { right }, col_in_half)
        };
        let row = if self.centre_bottom() {
            CELL_HEIGHT - 1 - dy
        } else {
            dy
        };
        (code, row, col)
    }
}

/// Draw all eight rounded corner glyphs
pub fn draw_corners(store: &mut GlyphStore) {
    let size = CORNER_RADIUS as usize;
    for dy in 0..size {
        for dx in 0..size {
            let fill = quarter_disc_coverage(dx as i32, dy as i32);
            for corner in Corner::ALL {
                let (code, row, col) = corner.place(dx, dy);
                store
                    .glyph_mut(GlyphIndex::from_code(code))
                    .put(row as i32, col as i32, fill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_store() -> GlyphStore {
        let mut store = GlyphStore::new();
        draw_corners(&mut store);
        store
    }

    fn at(store: &GlyphStore, code: u8, row: usize, col: usize) -> u8 {
        store.glyph(GlyphIndex::from_code(code)).get(row, col)
    }

    #[test]
    fn test_disc_centres_are_solid() {
        let store = corner_store();
        // NW: bottom-right of 0x03
        assert_eq!(at(&store, 0x03, 31, 15), 15);
        // NE: bottom-left of 0x04
        assert_eq!(at(&store, 0x04, 31, 0), 15);
        // SW: top-right of 0x07
        assert_eq!(at(&store, 0x07, 0, 15), 15);
        // SE: top-left of 0x08
        assert_eq!(at(&store, 0x08, 0, 0), 15);
    }

    #[test]
    fn test_far_corners_are_empty() {
        let store = corner_store();
        assert_eq!(at(&store, 0x02, 0, 0), 0);
        assert_eq!(at(&store, 0x05, 0, 15), 0);
        assert_eq!(at(&store, 0x06, 31, 0), 0);
        assert_eq!(at(&store, 0x09, 31, 15), 0);
    }

    #[test]
    fn test_orientations_mirror_each_other() {
        let store = corner_store();
        for dy in 0..32 {
            for dx in 0..32 {
                let expected = quarter_disc_coverage(dx as i32, dy as i32);
                for corner in Corner::ALL {
                    let (code, row, col) = corner.place(dx, dy);
                    assert_eq!(
                        at(&store, code, row, col),
                        expected,
                        "{:?} at offset ({}, {})",
                        corner,
                        dx,
                        dy
                    );
                }
            }
        }
    }

    #[test]
    fn test_pair_mirroring() {
        let store = corner_store();
        for row in 0..CELL_HEIGHT {
            for col in 0..CELL_WIDTH {
                let mirrored_col = CELL_WIDTH - 1 - col;
                let mirrored_row = CELL_HEIGHT - 1 - row;
                // Horizontal mirror: NW <-> NE
                assert_eq!(at(&store, 0x02, row, col), at(&store, 0x05, row, mirrored_col));
                assert_eq!(at(&store, 0x03, row, col), at(&store, 0x04, row, mirrored_col));
                // Vertical mirror: NW <-> SW
                assert_eq!(at(&store, 0x02, row, col), at(&store, 0x06, mirrored_row, col));
                // Point mirror: NW <-> SE
                assert_eq!(
                    at(&store, 0x03, row, col),
                    at(&store, 0x08, mirrored_row, mirrored_col)
                );
            }
        }
    }

    #[test]
    fn test_every_cell_written_once() {
        let mut seen = std::collections::HashSet::new();
        for corner in Corner::ALL {
            for dy in 0..32 {
                for dx in 0..32 {
                    assert!(seen.insert(corner.place(dx, dy)));
                }
            }
        }
        assert_eq!(seen.len(), 8 * CELL_WIDTH * CELL_HEIGHT);
    }
}
