//! ROM hex export
//!
//! One uppercase hex digit per line, glyph → row → column order.
//! The hardware build consumes this text verbatim.

use super::store::GlyphStore;
use anyhow::{Context, Result};
use log::info;
use std::io::{BufWriter, Write};

/// Serialize the whole store, returning the number of records written
pub fn write_rom<W: Write>(store: &GlyphStore, sink: W) -> Result<usize> {
    let mut out = BufWriter::new(sink);
    let mut records = 0usize;

    for (_, glyph) in store.iter() {
        for row in glyph.rows() {
            for &intensity in row {
                writeln!(out, "{:X}", intensity).context("Failed to write ROM record")?;
                records += 1;
            }
        }
    }

    out.flush().context("Failed to flush ROM output")?;
    info!("ROM exported: {} records", records);
    Ok(records)
}
