//! Procedural glyph synthesis
//!
//! This module draws the glyphs that have no font representation:
//! - Diagonal test pattern (0x01)
//! - Rounded box corners (0x02-0x09)
//! - Box drawing lines, tees, cross and dot (0x0A-0x18, 0x1E)
//! - Vertical gradient (0x7F)
//!
//! These are rendered procedurally rather than from fonts
//! to ensure exact pixel alignment and seamless transitions.

pub mod box_drawing;
pub mod corners;
pub mod geometry;
pub mod patterns;

use log::debug;

use crate::rom::GlyphStore;

pub use box_drawing::draw_box_glyphs;
pub use corners::draw_corners;
pub use patterns::{draw_gradient, draw_test_pattern};

/// Draw every procedural glyph into the store
pub fn synthesize(store: &mut GlyphStore) {
    draw_test_pattern(store);
    draw_corners(store);
    draw_box_glyphs(store);
    draw_gradient(store);
    debug!("Procedural glyphs drawn");
}
