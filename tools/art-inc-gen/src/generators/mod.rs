//! Include-table generators
//!
//! Both tables share the same layout: a usage comment followed by one
//! brace-delimited initializer group per frame, one string literal per line.

pub mod compat;
pub mod full;

use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::error::ArtError;
use crate::model::{Document, TableKind};

/// Generate the table of the given kind for a destination path
pub fn generate_table(document: &Document, kind: TableKind, output: &Path) -> Result<String> {
    match kind {
        TableKind::Full => full::generate_full_table(document, output),
        TableKind::Compat => compat::generate_compat_table(document, output),
    }
}

/// Escape a line for use inside a C string literal.
///
/// Only `\` and `"` are escaped; everything else is copied as is.
pub fn escape_c_string(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// File name used in the `#include` hint, with directories stripped
pub fn include_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Usage comment at the top of a generated table
pub(crate) fn write_header(
    output: &mut String,
    document: &Document,
    title: &str,
    element_type: &str,
    include: &str,
) -> Result<()> {
    let dims = document.dimensions().ok_or(ArtError::EmptyDocument)?;

    writeln!(output, "/** {}", title)?;
    writeln!(
        output,
        " * Num Frames: {}, Dimensions: {} characters",
        document.len(),
        dims
    )?;
    writeln!(output, " * Usage: ")?;
    writeln!(
        output,
        " *     const {} *art[NUM_FRAMES][ART_HEIGHT] = {{",
        element_type
    )?;
    writeln!(output, " * #include \"{}\"", include)?;
    writeln!(output, " *     }};")?;
    writeln!(output, " */")?;
    writeln!(output)?;

    Ok(())
}

/// One initializer group per frame, each line mapped then escaped
pub(crate) fn write_frames<F>(
    output: &mut String,
    document: &Document,
    literal_prefix: &str,
    map_line: F,
) -> Result<()>
where
    F: Fn(&str) -> String,
{
    for frame in &document.frames {
        writeln!(output, "{{")?;
        for line in &frame.lines {
            let escaped = escape_c_string(&map_line(line));
            writeln!(output, "{}\"{}\",", literal_prefix, escaped)?;
        }
        writeln!(output, "}},")?;
    }

    Ok(())
}
