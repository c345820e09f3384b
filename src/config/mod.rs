//! Rasterization settings
//!
//! The generator binary always runs with the built-in defaults: the ROM
//! layout is fixed by the hardware. TOML loading is available for
//! callers that build alternative ROM images from the same pipeline.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::constants::{
    DEFAULT_BASELINE_ROW, DEFAULT_DPI, DEFAULT_POINT_SIZE, FIRST_PRINTABLE, GLYPH_COUNT,
    LAST_PRINTABLE,
};

/// Font rasterization settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RomConfig {
    /// Nominal em size in points
    pub point_size: u32,
    /// Rendering resolution (dots per inch)
    pub dpi: u32,
    /// Cell row the baseline sits on
    pub baseline_row: i32,
    /// First character code rendered from the font (inclusive)
    pub first_code: u8,
    /// Last character code rendered from the font (inclusive)
    pub last_code: u8,
}

impl Default for RomConfig {
    fn default() -> Self {
        Self {
            point_size: DEFAULT_POINT_SIZE,
            dpi: DEFAULT_DPI,
            baseline_row: DEFAULT_BASELINE_ROW,
            first_code: FIRST_PRINTABLE,
            last_code: LAST_PRINTABLE,
        }
    }
}

impl RomConfig {
    /// Parse and validate settings from TOML text
    #[allow(dead_code)]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RomConfig = toml::from_str(content).context("Failed to parse ROM config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from specified path
    #[allow(dead_code)]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        if self.first_code > self.last_code {
            bail!(
                "first_code {:#x} is after last_code {:#x}",
                self.first_code,
                self.last_code
            );
        }
        if self.last_code as usize >= GLYPH_COUNT {
            bail!("last_code {:#x} does not fit the 7-bit ROM", self.last_code);
        }
        if self.point_size == 0 || self.dpi == 0 {
            bail!("point_size and dpi must be non-zero");
        }
        Ok(())
    }

    /// Character codes rendered from the font
    pub fn codes(&self) -> std::ops::RangeInclusive<u8> {
        self.first_code..=self.last_code
    }
}
