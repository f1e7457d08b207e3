//! Data errors raised while turning art files into tables

use std::path::PathBuf;

use crate::model::Dimensions;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtError {
    /// Input parsed to zero frames (empty file, or only sentinel lines)
    #[error("no frames parsed from {}", input.display())]
    NoFrames { input: PathBuf },

    /// A generator was handed a document without frames
    #[error("document contains no frames")]
    EmptyDocument,

    /// Frame size differs from the first frame (only raised in strict mode)
    #[error("frame {frame} has dimensions {found}, expected {expected} (from frame 0)")]
    DimensionMismatch {
        frame: usize,
        expected: Dimensions,
        found: Dimensions,
    },
}
