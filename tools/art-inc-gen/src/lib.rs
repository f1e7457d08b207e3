//! ASCII art include-table generator library
//!
//! Turns a multi-frame art file (frames separated by `*` lines) into two C
//! include files: a `wchar_t` table with the original glyphs, and a `.compat`
//! `char` table drawn only with spaces and `#`.

pub mod error;
pub mod generators;
pub mod model;
pub mod parser;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use error::ArtError;
pub use model::{Dimensions, Document, Frame, TableKind};

/// Tables produced for every input, in write order
pub const TABLES: [TableKind; 2] = [TableKind::Full, TableKind::Compat];

/// Knobs for [`generate`] and [`check`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Fail instead of warning when frames differ in size
    pub strict: bool,
}

/// Summary of a successful generation
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub frames: usize,
    pub dimensions: Dimensions,
    pub written: Vec<PathBuf>,
}

/// Parse `input` and write both include tables next to `output`.
///
/// Both tables are rendered before anything is written, so a data error
/// never leaves output behind. An I/O failure on the second write can still
/// leave the first table on disk.
pub fn generate(input: &Path, output: &Path, options: GenerateOptions) -> Result<GenerateReport> {
    let (document, dimensions) = load_document(input, options)?;
    let tables = render_tables(&document, output)?;

    let mut written = Vec::with_capacity(tables.len());
    for (kind, path, table) in tables {
        std::fs::write(&path, table)
            .with_context(|| format!("Failed to write {} to {}", kind, path.display()))?;
        tracing::info!("Generated {}: {}", kind, path.display());
        written.push(path);
    }

    Ok(GenerateReport {
        frames: document.len(),
        dimensions,
        written,
    })
}

/// Check that the tables on disk match what `input` would generate
pub fn check(input: &Path, output: &Path, options: GenerateOptions) -> Result<bool> {
    let (document, _) = load_document(input, options)?;

    let mut in_sync = true;
    for (kind, path, fresh) in render_tables(&document, output)? {
        let existing = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if fresh != existing {
            tracing::warn!("✗ {} out of sync: {}", kind, path.display());
            in_sync = false;
        } else {
            tracing::info!("✓ {} in sync: {}", kind, path.display());
        }
    }

    Ok(in_sync)
}

/// Parse an input file, rejecting empty documents.
///
/// Returns the document with its header dimensions (from the first frame).
pub fn load_document(input: &Path, options: GenerateOptions) -> Result<(Document, Dimensions)> {
    let document = parser::parse_file(input)?;

    let Some(dimensions) = document.dimensions() else {
        return Err(ArtError::NoFrames {
            input: input.to_path_buf(),
        }
        .into());
    };

    validate_dimensions(&document, options.strict)?;

    tracing::info!(
        "Parsed {} frames, dimensions {} from {}",
        document.len(),
        dimensions,
        input.display()
    );

    Ok((document, dimensions))
}

/// Report frames whose size differs from the first frame.
///
/// Mismatches are warnings unless `strict` is set.
pub fn validate_dimensions(document: &Document, strict: bool) -> Result<(), ArtError> {
    let Some(expected) = document.dimensions() else {
        return Ok(());
    };

    for (frame, found) in document.mismatched_frames() {
        if strict {
            return Err(ArtError::DimensionMismatch {
                frame,
                expected,
                found,
            });
        }
        tracing::warn!(
            "Frame {} has dimensions {}, expected {}",
            frame,
            found,
            expected
        );
    }

    Ok(())
}

fn render_tables(document: &Document, output: &Path) -> Result<Vec<(TableKind, PathBuf, String)>> {
    TABLES
        .iter()
        .map(|&kind| {
            let table = generators::generate_table(document, kind, output)
                .with_context(|| format!("Failed to generate {}", kind))?;
            Ok::<_, anyhow::Error>((kind, kind.output_path(output), table))
        })
        .collect()
}
