//! Global constants for fontrom
//!
//! Consolidates cell geometry, glyph slot assignments, and rasterization
//! constants to eliminate magic numbers throughout the codebase.

#![allow(dead_code)]

// ============================================================================
// Cell Geometry
// ============================================================================

/// Glyph cell width (columns)
pub const CELL_WIDTH: usize = 0x10;

/// Glyph cell height (rows)
pub const CELL_HEIGHT: usize = 0x20;

/// Number of glyph slots in the ROM (one per 7-bit character code)
pub const GLYPH_COUNT: usize = 0x80;

/// Maximum 4-bit intensity value
pub const MAX_INTENSITY: u8 = 0x0F;

/// Total ROM records (one per cell pixel)
pub const ROM_RECORDS: usize = GLYPH_COUNT * CELL_HEIGHT * CELL_WIDTH;

// ============================================================================
// Rasterization Defaults
// ============================================================================

/// Nominal em size in points
pub const DEFAULT_POINT_SIZE: u32 = 27;

/// Rendering resolution (1 point = 1 pixel)
pub const DEFAULT_DPI: u32 = 72;

/// Row of the cell the font baseline sits on
pub const DEFAULT_BASELINE_ROW: i32 = 0x18;

/// First character code taken from the font
pub const FIRST_PRINTABLE: u8 = 0x21;

/// Last character code taken from the font
pub const LAST_PRINTABLE: u8 = 0x7E;

// ============================================================================
// Procedural Glyph Slots
// ============================================================================

/// Diagonal test pattern
pub const GLYPH_TEST_PATTERN: u8 = 0x01;

/// Rounded top-left corner (left glyph, right glyph)
pub const GLYPH_CORNER_NW: (u8, u8) = (0x02, 0x03);
/// Rounded top-right corner
pub const GLYPH_CORNER_NE: (u8, u8) = (0x04, 0x05);
/// Rounded bottom-left corner
pub const GLYPH_CORNER_SW: (u8, u8) = (0x06, 0x07);
/// Rounded bottom-right corner
pub const GLYPH_CORNER_SE: (u8, u8) = (0x08, 0x09);

/// Box drawing: up + left
pub const GLYPH_BOX_UP_LEFT: u8 = 0x0A;
/// Box drawing: down + left
pub const GLYPH_BOX_DOWN_LEFT: u8 = 0x0B;
/// Box drawing: down + right
pub const GLYPH_BOX_DOWN_RIGHT: u8 = 0x0C;
/// Box drawing: up + right
pub const GLYPH_BOX_UP_RIGHT: u8 = 0x0D;
/// Box drawing: cross
pub const GLYPH_BOX_CROSS: u8 = 0x0E;
/// Box drawing: horizontal line
pub const GLYPH_BOX_HORIZONTAL: u8 = 0x11;
/// Box drawing: tee pointing right
pub const GLYPH_BOX_TEE_RIGHT: u8 = 0x14;
/// Box drawing: tee pointing left
pub const GLYPH_BOX_TEE_LEFT: u8 = 0x15;
/// Box drawing: tee pointing up
pub const GLYPH_BOX_TEE_UP: u8 = 0x16;
/// Box drawing: tee pointing down
pub const GLYPH_BOX_TEE_DOWN: u8 = 0x17;
/// Box drawing: vertical line
pub const GLYPH_BOX_VERTICAL: u8 = 0x18;
/// Box drawing: centre dot
pub const GLYPH_BOX_DOT: u8 = 0x1E;

/// Vertical intensity ramp
pub const GLYPH_GRADIENT: u8 = 0x7F;
