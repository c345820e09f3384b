//! fontrom - character ROM generator for the text-mode video core
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │   Font file  →  FreeType (0x21-0x7E)     │
//! │                          ↓               │
//! │   Procedural glyphs → GlyphStore (128)   │
//! │                          ↓               │
//! │        Hex ROM text (stdout)             │
//! └──────────────────────────────────────────┘
//! ```

mod config;
mod constants;
mod drawing;
mod font;
mod rom;

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::Path;

use config::RomConfig;
use font::{FtFont, OutlineRasterizer};
use rom::GlyphStore;

/// Build the complete glyph table
fn build_store<R: OutlineRasterizer + ?Sized>(font: &mut R, config: &RomConfig) -> GlyphStore {
    let mut store = GlyphStore::new();
    font::rasterize_font(font, config, &mut store);
    drawing::synthesize(&mut store);
    store
}

/// Build the table and write it out, returning the record count
fn generate_rom<R, W>(font: &mut R, config: &RomConfig, sink: W) -> Result<usize>
where
    R: OutlineRasterizer + ?Sized,
    W: Write,
{
    let store = build_store(font, config);
    rom::write_rom(&store, sink)
}

/// The font path, when invoked with exactly one argument
fn font_arg(args: &[String]) -> Option<&str> {
    match args {
        [_, font] => Some(font.as_str()),
        _ => None,
    }
}

fn usage(args: &[String]) -> String {
    let prog = args.first().map(String::as_str).unwrap_or("fontrom");
    format!("usage: {} font", prog)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let Some(font_path) = font_arg(&args) else {
        eprintln!("{}", usage(&args));
        std::process::exit(1);
    };

    let font_path = Path::new(font_path);
    let config = RomConfig::default();

    let mut font = FtFont::open(font_path)
        .with_context(|| format!("Failed to load font: {}", font_path.display()))?;
    info!("Generating ROM from {}", font_path.display());

    let stdout = std::io::stdout();
    generate_rom(&mut font, &config, stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CELL_HEIGHT, CELL_WIDTH, ROM_RECORDS};
    use crate::font::rasterizer::CoverageBitmap;
    use crate::rom::GlyphIndex;

    /// Adapter that fails for every code
    struct NoGlyphs;

    impl OutlineRasterizer for NoGlyphs {
        fn render(&mut self, _code: u8, _config: &RomConfig) -> Option<CoverageBitmap> {
            None
        }
    }

    /// Solid block for every code, overhanging the cell on all sides
    struct SolidBlocks;

    impl OutlineRasterizer for SolidBlocks {
        fn render(&mut self, _code: u8, _config: &RomConfig) -> Option<CoverageBitmap> {
            Some(CoverageBitmap {
                coverage: vec![0xFF; 24 * 40],
                width: 24,
                height: 40,
                left: -4,
                top: 0x20,
            })
        }
    }

    fn records(font: &mut dyn OutlineRasterizer) -> Vec<u8> {
        let mut buf = Vec::new();
        let n = generate_rom(font, &RomConfig::default(), &mut buf).unwrap();
        assert_eq!(n, ROM_RECORDS);
        let text = String::from_utf8(buf).unwrap();
        text.lines()
            .map(|l| u8::from_str_radix(l, 16).unwrap())
            .collect()
    }

    fn glyph_records(all: &[u8], code: u8) -> &[u8] {
        let size = CELL_WIDTH * CELL_HEIGHT;
        let start = code as usize * size;
        &all[start..start + size]
    }

    #[test]
    fn test_failing_font_still_yields_full_rom() {
        let all = records(&mut NoGlyphs);
        assert_eq!(all.len(), ROM_RECORDS);
        assert!(all.iter().all(|&v| v <= 15));

        for code in 0x20..=0x7Eu8 {
            assert!(glyph_records(&all, code).iter().all(|&v| v == 0), "{:#x}", code);
        }
        assert!(glyph_records(&all, 0x00).iter().all(|&v| v == 0));
        assert!(glyph_records(&all, 0x1F).iter().all(|&v| v == 0));

        // Procedural glyphs unaffected
        let store = build_store(&mut SolidBlocks, &RomConfig::default());
        for code in [0x01u8, 0x02, 0x09, 0x0A, 0x18, 0x1E, 0x7F] {
            let expected: Vec<u8> = store
                .glyph(GlyphIndex::from_code(code))
                .rows()
                .flatten()
                .copied()
                .collect();
            assert_eq!(glyph_records(&all, code), expected.as_slice(), "{:#x}", code);
        }
    }

    #[test]
    fn test_font_and_procedural_ranges_disjoint() {
        let all = records(&mut SolidBlocks);
        for code in 0x21..=0x7Eu8 {
            assert!(glyph_records(&all, code).iter().all(|&v| v == 15));
        }
        // Space and control slots are never taken from the font
        assert!(glyph_records(&all, 0x20).iter().all(|&v| v == 0));
        let gradient = glyph_records(&all, 0x7F);
        assert_eq!(gradient[0], 0);
        assert_eq!(gradient[CELL_WIDTH * CELL_HEIGHT - 1], 15);
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        generate_rom(&mut SolidBlocks, &RomConfig::default(), &mut first).unwrap();
        generate_rom(&mut SolidBlocks, &RomConfig::default(), &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), ROM_RECORDS * 2);
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_font_arg_requires_exactly_one() {
        assert_eq!(font_arg(&args(&["fontrom"])), None);
        assert_eq!(font_arg(&args(&["fontrom", "a.ttf"])), Some("a.ttf"));
        assert_eq!(font_arg(&args(&["fontrom", "a.ttf", "b.ttf"])), None);
        assert_eq!(font_arg(&[]), None);
    }

    #[test]
    fn test_usage_text() {
        assert_eq!(usage(&args(&["./fontrom", "a", "b"])), "usage: ./fontrom font");
        assert_eq!(usage(&[]), "usage: fontrom font");
    }
}
