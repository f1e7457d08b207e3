//! Compat (two-glyph) table generator for terminals without wide glyphs

use anyhow::Result;
use std::path::Path;

use super::{include_name, write_frames, write_header};
use crate::model::{Document, TableKind};

/// Glyph substituted for every non-space character
pub const MARKER: char = '#';

/// Keep spaces, replace everything else (tabs included) with [`MARKER`]
pub fn compat_line(line: &str) -> String {
    line.chars()
        .map(|ch| if ch == ' ' { ' ' } else { MARKER })
        .collect()
}

/// Generate the narrow `char` table from space/marker-filtered lines
pub fn generate_compat_table(document: &Document, output: &Path) -> Result<String> {
    let mut table = String::new();

    write_header(
        &mut table,
        document,
        "Auto-generated ASCII art include file (compat mode)",
        "char",
        &include_name(&TableKind::Compat.output_path(output)),
    )?;
    write_frames(&mut table, document, "", compat_line)?;

    Ok(table)
}
