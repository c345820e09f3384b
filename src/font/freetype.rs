//! FreeType wrapper
//!
//! Grayscale outline rendering for the glyph rasterizer

use anyhow::{anyhow, Context, Result};
use freetype::face::LoadFlag;
use freetype::render_mode::RenderMode;
use freetype::Library;
use log::{info, warn};
use std::path::Path;
use std::rc::Rc;

use super::rasterizer::{CoverageBitmap, OutlineRasterizer};
use crate::config::RomConfig;

/// Sanity limit for glyph bitmaps from malformed fonts
const MAX_GLYPH_DIMENSION: u32 = 4096;

/// FreeType font
pub struct FtFont {
    // Face borrows the library internally; keep it alive for the face's lifetime
    _library: Library,
    face: freetype::Face,
    /// Char size currently applied to the face (points, dpi)
    size: Option<(u32, u32)>,
}

impl FtFont {
    /// Load a font file
    pub fn open(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        Self::from_bytes(data)
    }

    /// Load from font data
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let library =
            Library::init().map_err(|e| anyhow!("FreeType initialization failed: {:?}", e))?;

        // freetype-rs requires Rc<Vec<u8>>
        let face = library
            .new_memory_face(Rc::new(data), 0)
            .map_err(|e| anyhow!("FreeType font loading failed: {:?}", e))?;

        let family = face.family_name().unwrap_or_else(|| "unknown".to_string());
        info!("FreeType font loaded: {}", family);

        Ok(Self {
            _library: library,
            face,
            size: None,
        })
    }

    /// Apply the nominal em size (26.6 fixed point, square pixels)
    fn apply_size(&mut self, point_size: u32, dpi: u32) -> Result<()> {
        if self.size == Some((point_size, dpi)) {
            return Ok(());
        }
        self.face
            .set_char_size(point_size as isize * 64, 0, dpi, 0)
            .map_err(|e| anyhow!("FreeType size setting failed: {:?}", e))?;
        self.size = Some((point_size, dpi));
        Ok(())
    }
}

impl OutlineRasterizer for FtFont {
    fn render(&mut self, code: u8, config: &RomConfig) -> Option<CoverageBitmap> {
        if let Err(e) = self.apply_size(config.point_size, config.dpi) {
            warn!("{}", e);
            return None;
        }

        // get_char_index returns 0 if not found
        let glyph_index = self.face.get_char_index(code as usize);
        if glyph_index.is_none() || glyph_index == Some(0) {
            return None;
        }

        if self.face.load_char(code as usize, LoadFlag::DEFAULT).is_err() {
            return None;
        }

        let glyph = self.face.glyph();
        if glyph.render_glyph(RenderMode::Normal).is_err() {
            return None;
        }

        let bitmap = glyph.bitmap();
        let width = bitmap.width() as u32;
        let height = bitmap.rows() as u32;

        if width > MAX_GLYPH_DIMENSION || height > MAX_GLYPH_DIMENSION {
            warn!("FreeType: glyph too large ({}x{}), skipping", width, height);
            return None;
        }

        // Copy out honoring pitch (rows may be padded)
        let buffer = bitmap.buffer();
        let pitch = bitmap.pitch().unsigned_abs() as usize;
        let mut coverage = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height as usize {
            let start = y * pitch;
            coverage.extend_from_slice(buffer.get(start..start + width as usize)?);
        }

        Some(CoverageBitmap {
            coverage,
            width,
            height,
            left: glyph.bitmap_left(),
            top: glyph.bitmap_top(),
        })
    }
}
